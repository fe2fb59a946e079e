// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turning Rust errors into capturable values.

use std::error::Error;
use std::panic::Location;

use pinge_core::{CallSite, Throwable};

use crate::backtrace::capture_call_chain;

/// An error snapshot: what was raised, where, and the call chain that led
/// there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
	exception_type: String,
	message: String,
	file: String,
	line: u32,
	call_chain: Vec<CallSite>,
}

impl CapturedError {
	/// Describe an error raised at `file:line` with no recorded call chain.
	pub fn new(
		exception_type: impl Into<String>,
		message: impl Into<String>,
		file: impl Into<String>,
		line: u32,
	) -> Self {
		Self {
			exception_type: exception_type.into(),
			message: message.into(),
			file: file.into(),
			line,
			call_chain: Vec::new(),
		}
	}

	pub fn with_call_chain(mut self, call_chain: Vec<CallSite>) -> Self {
		self.call_chain = call_chain;
		self
	}

	/// Capture `error` at the caller's location, with the current backtrace as
	/// its call chain.
	///
	/// The type name becomes the exception type; the message is the error's
	/// `Display` text followed by each `source()` cause.
	#[track_caller]
	pub fn from_error<E: Error + 'static>(error: &E) -> Self {
		let location = Location::caller();
		Self::new(
			std::any::type_name::<E>(),
			error_chain_message(error),
			crate::backtrace::absolutize(location.file()),
			location.line(),
		)
		.with_call_chain(capture_call_chain())
	}
}

impl Throwable for CapturedError {
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

/// `"outer: cause: root cause"`
fn error_chain_message(error: &dyn Error) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
