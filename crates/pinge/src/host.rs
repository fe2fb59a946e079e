// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ambient host metadata, gathered once per capture.

use pinge_common_version::{BuildInfo, RUNTIME_NAME};
use pinge_core::{CaptureContext, OsContext, Runtime};

/// Operating system of the current process.
pub fn os() -> OsContext {
	OsContext {
		name: std::env::consts::OS.to_string(),
		arch: std::env::consts::ARCH.to_string(),
	}
}

/// The Rust toolchain this binary was built with.
pub fn runtime() -> Runtime {
	Runtime {
		name: RUNTIME_NAME.to_string(),
		version: BuildInfo::current().rustc_version.to_string(),
	}
}

/// Machine hostname, if the platform reports one.
pub fn hostname() -> Option<String> {
	hostname::get()
		.ok()
		.map(|h| h.to_string_lossy().into_owned())
		.filter(|h| !h.is_empty())
}

/// Snapshot the host for one capture.
///
/// `server_name` overrides the machine hostname; `url` is the request being
/// handled, if any.
pub fn snapshot(
	environment: &str,
	server_name: Option<&str>,
	url: Option<&str>,
) -> CaptureContext {
	let mut context = CaptureContext::new(os(), runtime()).with_environment(environment);
	context.server_name = server_name.map(str::to_string).or_else(hostname);
	context.url = url.map(str::to_string);
	context
}
