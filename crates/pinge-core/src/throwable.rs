// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The view of a raised error that event assembly works from.

use crate::frame::CallSite;

/// A captured error as seen by the event builder.
///
/// Any runtime's error-reflection facility can populate this: the throw site
/// (`file`, `line`) plus the call chain the runtime recorded, innermost caller
/// first. An empty call chain means the platform reported no trace at all.
pub trait Throwable {
	/// Concrete classification of the error, e.g. its type name.
	fn exception_type(&self) -> &str;

	fn message(&self) -> &str;

	fn file(&self) -> &str;

	fn line(&self) -> u32;

	fn call_chain(&self) -> &[CallSite];

	/// The synthetic frame for where the error was raised.
	fn throw_site(&self) -> CallSite {
		CallSite::new(self.file(), self.line(), "")
	}
}

impl<T: Throwable + ?Sized> Throwable for &T {
	fn exception_type(&self) -> &str {
		(**self).exception_type()
	}

	fn message(&self) -> &str {
		(**self).message()
	}

	fn file(&self) -> &str {
		(**self).file()
	}

	fn line(&self) -> u32 {
		(**self).line()
	}

	fn call_chain(&self) -> &[CallSite] {
		(**self).call_chain()
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// Plain error record for exercising the builders.
	#[derive(Debug, Clone)]
	pub struct TestError {
		pub exception_type: String,
		pub message: String,
		pub file: String,
		pub line: u32,
		pub call_chain: Vec<CallSite>,
	}

	impl TestError {
		pub fn new(message: &str, file: &str, line: u32) -> Self {
			Self {
				exception_type: "TestError".to_string(),
				message: message.to_string(),
				file: file.to_string(),
				line,
				call_chain: Vec::new(),
			}
		}

		pub fn called_from(mut self, file: &str, line: u32, function: &str) -> Self {
			self.call_chain.push(CallSite::new(file, line, function));
			self
		}
	}

	impl Throwable for TestError {
		fn exception_type(&self) -> &str {
			&self.exception_type
		}

		fn message(&self) -> &str {
			&self.message
		}

		fn file(&self) -> &str {
			&self.file
		}

		fn line(&self) -> u32 {
			self.line
		}

		fn call_chain(&self) -> &[CallSite] {
			&self.call_chain
		}
	}
}
