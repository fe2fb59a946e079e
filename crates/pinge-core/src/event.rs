// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Captured error events.

use crate::clock::Clock;
use crate::context::{CaptureContext, OsContext, Runtime};
use crate::error::Result;
use crate::event_id::EventId;
use crate::source::SourceContextReader;
use crate::stacktrace::Stacktrace;
use crate::throwable::Throwable;

/// One captured error, ready for delivery.
///
/// Built once per capture and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
	id: EventId,
	/// Unix seconds, fractional
	timestamp: f64,
	environment: String,
	exception_type: String,
	message: String,
	/// Absent when the platform reported no call chain.
	stacktrace: Option<Stacktrace>,
	os: OsContext,
	runtime: Runtime,
	server_name: Option<String>,
	url: Option<String>,
}

impl Event {
	/// Build the event for `error`.
	///
	/// Reads source context for each frame from disk; performs no other I/O.
	pub fn capture<E: Throwable + ?Sized>(
		error: &E,
		context: &CaptureContext,
		clock: &dyn Clock,
	) -> Result<Self> {
		Self::capture_with(error, context, clock, &SourceContextReader::default())
	}

	pub fn capture_with<E: Throwable + ?Sized>(
		error: &E,
		context: &CaptureContext,
		clock: &dyn Clock,
		reader: &SourceContextReader,
	) -> Result<Self> {
		let stacktrace = if error.call_chain().is_empty() {
			None
		} else {
			Some(Stacktrace::from_error_with(error, reader)?)
		};

		Ok(Self {
			id: EventId::from_error(error),
			timestamp: clock.now(),
			environment: context.environment.clone(),
			exception_type: error.exception_type().to_string(),
			message: error.message().to_string(),
			stacktrace,
			os: context.os.clone(),
			runtime: context.runtime.clone(),
			server_name: context.server_name.clone(),
			url: context.url.clone(),
		})
	}

	pub fn id(&self) -> &EventId {
		&self.id
	}

	pub fn timestamp(&self) -> f64 {
		self.timestamp
	}

	pub fn environment(&self) -> &str {
		&self.environment
	}

	pub fn exception_type(&self) -> &str {
		&self.exception_type
	}

	pub fn message(&self) -> &str {
		&self.message
	}

	pub fn stacktrace(&self) -> Option<&Stacktrace> {
		self.stacktrace.as_ref()
	}

	pub fn os(&self) -> &OsContext {
		&self.os
	}

	pub fn runtime(&self) -> &Runtime {
		&self.runtime
	}

	pub fn server_name(&self) -> Option<&str> {
		self.server_name.as_deref()
	}

	pub fn url(&self) -> Option<&str> {
		self.url.as_deref()
	}
}
