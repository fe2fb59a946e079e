// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Stack frames and the call-chain entries they are resolved from.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::source::{ContextLine, SourceContext, SourceContextReader};

/// One entry of an error's recorded call chain, as reported by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallSite {
	pub file: String,
	/// 1-based
	pub line: u32,
	pub function: String,
}

impl CallSite {
	pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
		Self {
			file: file.into(),
			line,
			function: function.into(),
		}
	}

	/// Check that this entry can become a [`Frame`].
	pub fn validate(&self) -> Result<()> {
		if self.file.is_empty() {
			return Err(self.invalid("file path is empty"));
		}
		if self.line == 0 {
			return Err(self.invalid("line numbers start at 1"));
		}
		Ok(())
	}

	fn invalid(&self, reason: &'static str) -> CoreError {
		CoreError::InvalidFrame {
			file: self.file.clone(),
			line: self.line,
			reason,
		}
	}
}

/// A single stack frame enriched with the source lines around it.
///
/// `context`, `pre_context` and `post_context` are all empty when the file
/// could not be read at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
	file: String,
	line: u32,
	function: String,
	context: Option<String>,
	pre_context: Vec<ContextLine>,
	post_context: Vec<ContextLine>,
}

impl Frame {
	/// Resolve a call site into a frame, reading its source context from disk.
	pub fn resolve(site: &CallSite) -> Result<Self> {
		Self::resolve_with(site, &SourceContextReader::default())
	}

	/// Like [`Frame::resolve`], with an explicit reader.
	pub fn resolve_with(site: &CallSite, reader: &SourceContextReader) -> Result<Self> {
		site.validate()?;
		let source = reader.read(&site.file, site.line);
		Ok(Self::from_parts(site.clone(), source))
	}

	fn from_parts(site: CallSite, source: SourceContext) -> Self {
		let SourceContext {
			pre_context,
			context,
			post_context,
		} = source;

		Self {
			file: site.file,
			line: site.line,
			function: site.function,
			context,
			pre_context,
			post_context,
		}
	}

	pub fn file(&self) -> &str {
		&self.file
	}

	pub fn line(&self) -> u32 {
		self.line
	}

	/// Symbol name; empty for the synthetic throw-site frame.
	pub fn function(&self) -> &str {
		&self.function
	}

	pub fn context(&self) -> Option<&str> {
		self.context.as_deref()
	}

	pub fn pre_context(&self) -> &[ContextLine] {
		&self.pre_context
	}

	pub fn post_context(&self) -> &[ContextLine] {
		&self.post_context
	}

	pub fn has_source(&self) -> bool {
		self.context.is_some() || !self.pre_context.is_empty() || !self.post_context.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn resolves_context_from_readable_file() {
		let mut file = NamedTempFile::new().unwrap();
		for i in 1..=15 {
			writeln!(file, "statement_{i}();").unwrap();
		}
		file.flush().unwrap();
		let path = file.path().to_string_lossy().to_string();

		let frame = Frame::resolve(&CallSite::new(&path, 8, "handler")).unwrap();

		assert_eq!(frame.file(), path);
		assert_eq!(frame.line(), 8);
		assert_eq!(frame.function(), "handler");
		assert_eq!(frame.context(), Some("statement_8();"));
		assert_eq!(frame.pre_context().len(), 5);
		assert_eq!(frame.post_context().len(), 5);
		assert!(frame.pre_context().iter().all(|l| l.line != 8));
		assert!(frame.post_context().iter().all(|l| l.line != 8));
	}

	#[test]
	fn unreadable_file_preserves_location() {
		let site = CallSite::new("/app/gone.src", 42, "vanished");
		let frame = Frame::resolve(&site).unwrap();

		assert_eq!(frame.file(), "/app/gone.src");
		assert_eq!(frame.line(), 42);
		assert_eq!(frame.function(), "vanished");
		assert_eq!(frame.context(), None);
		assert!(frame.pre_context().is_empty());
		assert!(frame.post_context().is_empty());
		assert!(!frame.has_source());
	}

	#[test]
	fn empty_function_name_is_allowed() {
		let frame = Frame::resolve(&CallSite::new("/app/index.src", 14, "")).unwrap();
		assert_eq!(frame.function(), "");
	}

	#[test]
	fn rejects_line_zero() {
		let err = Frame::resolve(&CallSite::new("/app/index.src", 0, "main")).unwrap_err();
		assert!(matches!(err, CoreError::InvalidFrame { line: 0, .. }));
	}

	#[test]
	fn rejects_empty_file() {
		let err = Frame::resolve(&CallSite::new("", 3, "main")).unwrap_err();
		assert!(matches!(err, CoreError::InvalidFrame { .. }));
	}

	#[test]
	fn serializes_with_snake_case_context_keys() {
		let frame = Frame::resolve(&CallSite::new("/app/gone.src", 3, "f")).unwrap();
		let json = serde_json::to_value(&frame).unwrap();

		assert_eq!(json["file"], "/app/gone.src");
		assert_eq!(json["line"], 3);
		assert_eq!(json["function"], "f");
		assert!(json["context"].is_null());
		assert_eq!(json["pre_context"], serde_json::json!([]));
		assert_eq!(json["post_context"], serde_json::json!([]));
	}
}
