// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Build and version information for the Pinge SDK.
//!
//! The SDK version is reported with every event (`sdk_version`), and the
//! compiler version doubles as the runtime version of a Rust process.

shadow_rs::shadow!(build);

#[cfg(feature = "serde")]
use serde::Serialize;

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
///
/// Derived at compile time from target configuration.
pub const PLATFORM: &str = env!("PINGE_PLATFORM");

/// Name reported as the runtime of a Rust process.
pub const RUNTIME_NAME: &str = "rustc";

/// Compile-time build information.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
	pub version: &'static str,
	pub rustc_version: &'static str,
	pub platform: &'static str,
}

impl BuildInfo {
	/// Get the current build information (compile-time constants).
	pub fn current() -> Self {
		Self {
			version: build::PKG_VERSION,
			rustc_version: parse_rustc_version(build::RUST_VERSION),
			platform: PLATFORM,
		}
	}
}

/// Version of the SDK as published, e.g. "0.1.0".
pub const fn sdk_version() -> &'static str {
	build::PKG_VERSION
}

/// Extracts the bare semver from `rustc --version` output.
///
/// `"rustc 1.82.0 (f6e511eec 2024-10-15)"` becomes `"1.82.0"`. Anything that
/// does not look like that output is returned as-is, and an empty string
/// becomes `"unknown"`.
fn parse_rustc_version(raw: &'static str) -> &'static str {
	let raw = raw.trim();
	if raw.is_empty() {
		return "unknown";
	}
	match raw.strip_prefix("rustc ") {
		Some(rest) => rest.split_whitespace().next().unwrap_or("unknown"),
		None => raw,
	}
}
