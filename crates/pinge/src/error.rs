// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Pinge SDK.

use pinge_core::CoreError;
use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors that can occur in the SDK.
#[derive(Debug, Error)]
pub enum SdkError {
	/// The DSN string could not be parsed or failed validation.
	#[error("{0}")]
	InvalidDsn(String),

	/// The client was built without a DSN.
	#[error("a DSN is required")]
	MissingDsn,

	/// The HTTP client could not be constructed.
	#[error("HTTP client error: {0}")]
	Http(#[from] reqwest::Error),

	/// The event could not be assembled from the captured error.
	#[error("event assembly failed: {0}")]
	Event(#[from] CoreError),
}
