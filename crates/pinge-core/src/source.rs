// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source context extraction around a line of a file on disk.
//!
//! Context is best-effort: a missing, unreadable or non-regular file yields an
//! empty [`SourceContext`] rather than an error, so a frame can always be built.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Number of lines read on each side of the target line.
pub const CONTEXT_LINES: u32 = 5;

/// One line of source text with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextLine {
	pub line: u32,
	pub content: String,
}

impl ContextLine {
	pub fn new(line: u32, content: impl Into<String>) -> Self {
		Self {
			line,
			content: content.into(),
		}
	}
}

/// The window of source text around a target line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceContext {
	/// Lines `[max(1, target - 5), target - 1]`, ascending.
	pub pre_context: Vec<ContextLine>,
	/// The target line itself, if the file has it.
	pub context: Option<String>,
	/// Lines `[target + 1, target + 5]`, truncated at end of file.
	pub post_context: Vec<ContextLine>,
}

impl SourceContext {
	pub fn is_empty(&self) -> bool {
		self.context.is_none() && self.pre_context.is_empty() && self.post_context.is_empty()
	}
}

/// Reads bounded windows of source lines.
///
/// Each call opens the file, reads at most up to `target + radius` and drops
/// the handle before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceContextReader {
	radius: u32,
}

impl Default for SourceContextReader {
	fn default() -> Self {
		Self {
			radius: CONTEXT_LINES,
		}
	}
}

impl SourceContextReader {
	pub fn new() -> Self {
		Self::default()
	}

	/// Reader with a window other than [`CONTEXT_LINES`] on each side.
	pub fn with_radius(radius: u32) -> Self {
		Self { radius }
	}

	pub fn radius(&self) -> u32 {
		self.radius
	}

	/// Read the window around `target` (1-based) from `path`.
	pub fn read(&self, path: impl AsRef<Path>, target: u32) -> SourceContext {
		let mut window = SourceContext::default();
		if target == 0 {
			return window;
		}

		let Some(file) = open_regular_file(path.as_ref()) else {
			return window;
		};

		let first = target.saturating_sub(self.radius).max(1);
		let last = target.saturating_add(self.radius);

		let mut reader = BufReader::new(file);
		let mut buf = Vec::new();
		let mut lineno: u32 = 0;

		while lineno < last {
			buf.clear();
			match reader.read_until(b'\n', &mut buf) {
				Ok(0) | Err(_) => break,
				Ok(_) => {}
			}
			lineno += 1;
			if lineno < first {
				continue;
			}

			let content = decode_line(&buf);
			if lineno < target {
				window.pre_context.push(ContextLine::new(lineno, content));
			} else if lineno == target {
				window.context = Some(content);
			} else {
				window.post_context.push(ContextLine::new(lineno, content));
			}
		}

		window
	}
}

fn open_regular_file(path: &Path) -> Option<File> {
	let file = File::open(path).ok()?;
	let metadata = file.metadata().ok()?;
	metadata.is_file().then_some(file)
}

/// Strip the line terminator and decode; undecodable lines become empty.
fn decode_line(raw: &[u8]) -> String {
	let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
	let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
	String::from_utf8(raw.to_vec()).unwrap_or_default()
}
