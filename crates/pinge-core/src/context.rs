// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host and runtime metadata attached to events.

use serde::{Deserialize, Serialize};

/// Environment reported when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Operating system the process runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsContext {
	/// "linux", "macos", "windows"
	pub name: String,
	/// "x86_64", "aarch64"
	pub arch: String,
}

/// Runtime information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runtime {
	/// "rustc"
	pub name: String,
	pub version: String,
}

/// Ambient metadata snapshot taken once per capture.
///
/// Gathered at the process boundary and handed to event construction so the
/// builder itself never reads global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureContext {
	pub environment: String,
	pub os: OsContext,
	pub runtime: Runtime,
	pub server_name: Option<String>,
	/// Only set while handling a request.
	pub url: Option<String>,
}

impl CaptureContext {
	pub fn new(os: OsContext, runtime: Runtime) -> Self {
		Self {
			environment: DEFAULT_ENVIRONMENT.to_string(),
			os,
			runtime,
			server_name: None,
			url: None,
		}
	}

	pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
		self.environment = environment.into();
		self
	}

	pub fn with_server_name(mut self, server_name: impl Into<String>) -> Self {
		self.server_name = Some(server_name.into());
		self
	}

	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = Some(url.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn context() -> CaptureContext {
		CaptureContext::new(
			OsContext {
				name: "linux".to_string(),
				arch: "x86_64".to_string(),
			},
			Runtime {
				name: "rustc".to_string(),
				version: "1.82.0".to_string(),
			},
		)
	}

	#[test]
	fn defaults_to_production_without_server_or_url() {
		let ctx = context();
		assert_eq!(ctx.environment, "production");
		assert!(ctx.server_name.is_none());
		assert!(ctx.url.is_none());
	}

	#[test]
	fn builder_methods_set_optional_fields() {
		let ctx = context()
			.with_environment("staging")
			.with_server_name("web-01")
			.with_url("https://example.com/checkout");

		assert_eq!(ctx.environment, "staging");
		assert_eq!(ctx.server_name.as_deref(), Some("web-01"));
		assert_eq!(ctx.url.as_deref(), Some("https://example.com/checkout"));
	}
}
