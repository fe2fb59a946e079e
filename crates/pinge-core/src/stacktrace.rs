// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ordered, non-empty frame sequences.

use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::frame::{CallSite, Frame};
use crate::source::SourceContextReader;
use crate::throwable::Throwable;

/// Stack trace of an error. Index 0 is where the error was raised; later
/// frames are its callers, outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stacktrace {
	frames: Vec<Frame>,
}

impl Stacktrace {
	/// Wrap an already-resolved frame list. Fails on an empty list.
	pub fn new(frames: Vec<Frame>) -> Result<Self> {
		if frames.is_empty() {
			return Err(CoreError::EmptyStacktrace);
		}
		Ok(Self { frames })
	}

	/// Resolve every call site into a frame, in order.
	pub fn from_call_sites<'a, I>(sites: I) -> Result<Self>
	where
		I: IntoIterator<Item = &'a CallSite>,
	{
		Self::from_call_sites_with(sites, &SourceContextReader::default())
	}

	pub fn from_call_sites_with<'a, I>(sites: I, reader: &SourceContextReader) -> Result<Self>
	where
		I: IntoIterator<Item = &'a CallSite>,
	{
		let frames = sites
			.into_iter()
			.map(|site| Frame::resolve_with(site, reader))
			.collect::<Result<Vec<_>>>()?;
		Self::new(frames)
	}

	/// Build the stacktrace of a captured error: the throw site first, then
	/// every entry of its call chain.
	pub fn from_error<E: Throwable + ?Sized>(error: &E) -> Result<Self> {
		Self::from_error_with(error, &SourceContextReader::default())
	}

	pub fn from_error_with<E: Throwable + ?Sized>(
		error: &E,
		reader: &SourceContextReader,
	) -> Result<Self> {
		let throw_site = error.throw_site();
		Self::from_call_sites_with(
			std::iter::once(&throw_site).chain(error.call_chain()),
			reader,
		)
	}

	pub fn frames(&self) -> &[Frame] {
		&self.frames
	}

	/// The frame where the error was raised.
	pub fn origin(&self) -> &Frame {
		&self.frames[0]
	}
}

impl<'a> IntoIterator for &'a Stacktrace {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

/// Renders the frames as a JSON array.
impl fmt::Display for Stacktrace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let json = serde_json::to_string(&self.frames).map_err(|_| fmt::Error)?;
		f.write_str(&json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::throwable::testing::TestError;

	#[test]
	fn empty_frame_list_is_rejected() {
		assert_eq!(Stacktrace::new(Vec::new()), Err(CoreError::EmptyStacktrace));
	}

	#[test]
	fn empty_call_site_list_is_rejected() {
		let sites: Vec<CallSite> = Vec::new();
		let result = Stacktrace::from_call_sites(&sites);
		assert_eq!(result, Err(CoreError::EmptyStacktrace));
	}

	#[test]
	fn malformed_call_site_is_rejected() {
		let sites = vec![
			CallSite::new("/app/a.src", 3, "a"),
			CallSite::new("/app/b.src", 0, "b"),
		];
		let err = Stacktrace::from_call_sites(&sites).unwrap_err();
		assert_eq!(
			err,
			CoreError::InvalidFrame {
				file: "/app/b.src".to_string(),
				line: 0,
				reason: "line numbers start at 1",
			}
		);
	}

	#[test]
	fn error_without_call_chain_has_only_throw_site() {
		let error = TestError::new("boom", "/app/a.src", 10);
		let trace = Stacktrace::from_error(&error).unwrap();

		assert_eq!(trace.frames().len(), 1);
		assert_eq!(trace.origin().file(), "/app/a.src");
		assert_eq!(trace.origin().line(), 10);
		assert_eq!(trace.origin().function(), "");
	}

	#[test]
	fn throw_site_comes_before_call_chain() {
		let error = TestError::new("boom", "/app/a.src", 10)
			.called_from("/app/b.src", 20, "inner")
			.called_from("/app/c.src", 30, "outer");
		let trace = Stacktrace::from_error(&error).unwrap();

		let summary: Vec<_> = trace
			.into_iter()
			.map(|f| (f.file(), f.line(), f.function()))
			.collect();
		assert_eq!(
			summary,
			vec![
				("/app/a.src", 10, ""),
				("/app/b.src", 20, "inner"),
				("/app/c.src", 30, "outer"),
			]
		);
	}

	#[test]
	fn display_is_json_array_of_frames() {
		let error = TestError::new("boom", "/app/a.src", 10);
		let trace = Stacktrace::from_error(&error).unwrap();

		let parsed: serde_json::Value = serde_json::from_str(&trace.to_string()).unwrap();
		assert!(parsed.is_array());
		assert_eq!(parsed[0]["file"], "/app/a.src");
	}
}
