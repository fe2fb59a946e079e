// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Backtrace capture and parsing into call chains.

use std::backtrace::Backtrace;
use std::path::{Component, Path, PathBuf};

use pinge_core::CallSite;
use rustc_demangle::demangle;

/// Capture the current call chain, application frames only.
pub fn capture_call_chain() -> Vec<CallSite> {
	let backtrace = Backtrace::force_capture();
	parse_backtrace(&backtrace.to_string())
}

/// Parse the `Display` output of a [`Backtrace`] into call sites.
///
/// The output alternates symbol lines (`  3: my_app::handler`) with location
/// lines (`at ./src/main.rs:10:5`). Symbols without a location are dropped, as
/// are runtime and SDK-internal frames.
pub fn parse_backtrace(bt_string: &str) -> Vec<CallSite> {
	let mut sites = Vec::new();
	let mut pending: Option<String> = None;

	for line in bt_string.lines() {
		let line = line.trim();
		if line.is_empty() {
			continue;
		}

		if let Some(location) = line.strip_prefix("at ") {
			let Some(function) = pending.take() else {
				continue;
			};
			if !is_in_app_frame(&function) {
				continue;
			}
			if let Some((file, lineno)) = parse_location(location) {
				if !is_std_source(&file) {
					sites.push(CallSite::new(absolutize(&file), lineno, function));
				}
			}
			continue;
		}

		pending = parse_symbol_line(line);
	}

	sites
}

/// Extract the demangled function name from a symbol line.
///
/// The frame number prefix is only present on the first symbol of a frame;
/// inlined symbols follow without one.
fn parse_symbol_line(line: &str) -> Option<String> {
	let symbol = match line.split_once(':') {
		Some((prefix, rest)) if prefix.trim().parse::<u32>().is_ok() => rest.trim(),
		_ => line,
	};

	if symbol.is_empty() {
		return None;
	}

	// `{:#}` drops the trailing hash of legacy mangled names.
	Some(format!("{:#}", demangle(symbol)))
}

/// Split `path:line[:column]` into the path and line number.
fn parse_location(location: &str) -> Option<(String, u32)> {
	let (rest, last) = location.rsplit_once(':')?;
	let last: u32 = last.parse().ok()?;

	match rest.rsplit_once(':') {
		Some((file, line)) => match line.parse::<u32>() {
			Ok(line) if !file.is_empty() => Some((file.to_string(), line)),
			_ => Some((rest.to_string(), last)),
		},
		None => Some((rest.to_string(), last)),
	}
	.filter(|(file, line)| !file.is_empty() && *line > 0)
}

/// Resolve a relative source path against the working directory.
pub(crate) fn absolutize(file: &str) -> String {
	if Path::new(file).is_absolute() {
		return file.to_string();
	}

	match std::env::current_dir() {
		Ok(cwd) => resolve_from(&cwd, file),
		Err(_) => file.to_string(),
	}
}

/// Join a relative `file` onto `base`, or onto the nearest ancestor of `base`
/// where it exists.
///
/// `Location::caller()` paths are relative to the workspace root while the
/// process often runs from a member package directory.
fn resolve_from(base: &Path, file: &str) -> String {
	let relative = Path::new(file);
	let found = base
		.ancestors()
		.map(|dir| normalize(&dir.join(relative)))
		.find(|candidate| candidate.is_file());

	found
		.unwrap_or_else(|| normalize(&base.join(relative)))
		.to_string_lossy()
		.into_owned()
}

fn normalize(path: &Path) -> PathBuf {
	path.components()
		.filter(|c| !matches!(c, Component::CurDir))
		.collect()
}

/// Standard library sources are reported under a remapped `/rustc/<hash>/`
/// prefix, whatever the symbol looks like.
fn is_std_source(file: &str) -> bool {
	file.starts_with("/rustc/")
}

/// Determine if a frame is from application code rather than the standard
/// library, the async runtime, the test harness or this SDK.
fn is_in_app_frame(function: &str) -> bool {
	const SYSTEM_PREFIXES: &[&str] = &[
		"std::",
		"core::",
		"alloc::",
		"<std::",
		"<core::",
		"<alloc::",
		"tokio::",
		"<tokio::",
		"futures::",
		"<futures::",
		"async_trait::",
		"backtrace::",
		"<backtrace::",
		"test::",
		"<test::",
		"panic_unwind::",
		"rust_begin_unwind",
		"rust_panic",
		"__rust_",
		"_rust_",
		"__libc_start",
	];

	// Process entry points emitted by the platform.
	const SYSTEM_SYMBOLS: &[&str] = &["main", "_start", "start_thread", "clone", "clone3"];

	const SYSTEM_CONTAINS: &[&str] = &["::panicking::", "::rt::", "::sys_common::"];

	if SYSTEM_PREFIXES.iter().any(|prefix| function.starts_with(prefix))
		|| SYSTEM_SYMBOLS.contains(&function)
		|| SYSTEM_CONTAINS.iter().any(|needle| function.contains(needle))
	{
		return false;
	}

	// The SDK's own capture path, but not its tests.
	if (function.starts_with("pinge::") || function.starts_with("<pinge::"))
		&& !function.contains("::tests::")
	{
		return false;
	}

	true
}
