// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for event assembly.

use thiserror::Error;

/// Errors raised while assembling an event from caller-supplied data.
///
/// A genuine captured error never produces these: the synthetic throw-site
/// frame keeps every stacktrace non-empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
	#[error("frame list must not be empty")]
	EmptyStacktrace,

	#[error("invalid frame {file}:{line}: {reason}")]
	InvalidFrame {
		file: String,
		line: u32,
		reason: &'static str,
	},
}

/// Result type for event assembly.
pub type Result<T> = std::result::Result<T, CoreError>;
