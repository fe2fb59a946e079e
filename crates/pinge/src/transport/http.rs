// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use async_trait::async_trait;
use pinge_core::{Event, OsContext, Runtime, Stacktrace};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

use super::Transport;
use crate::dsn::Dsn;
use crate::error::Result;

/// Default timeout for a single delivery attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Collector responses that count as delivered.
pub const ACCEPTED_STATUSES: [StatusCode; 3] =
	[StatusCode::OK, StatusCode::CREATED, StatusCode::NO_CONTENT];

/// POSTs events as JSON to the collector named by a DSN.
///
/// The DSN credential is sent as HTTP basic auth user.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
	endpoint: String,
	credential: String,
}

impl HttpTransport {
	pub fn new(dsn: &Dsn) -> Result<Self> {
		Self::with_timeout(dsn, DEFAULT_TIMEOUT)
	}

	pub fn with_timeout(dsn: &Dsn, timeout: Duration) -> Result<Self> {
		let client = pinge_common_http::builder().timeout(timeout).build()?;
		Ok(Self::with_client(dsn, client))
	}

	/// Use a preconfigured HTTP client.
	pub fn with_client(dsn: &Dsn, client: Client) -> Self {
		Self {
			client,
			endpoint: dsn.endpoint(),
			credential: dsn.credential().to_string(),
		}
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, event: &Event) -> bool {
		let payload = EventPayload::from_event(event);

		debug!(endpoint = %self.endpoint, event_id = %event.id(), "Sending event");

		let response = match self
			.client
			.post(&self.endpoint)
			.basic_auth(&self.credential, None::<&str>)
			.header(ACCEPT, "application/json")
			.json(&payload)
			.send()
			.await
		{
			Ok(response) => response,
			Err(e) => {
				warn!(
					endpoint = %self.endpoint,
					event_id = %event.id(),
					error = %e,
					"Failed to deliver event"
				);
				return false;
			}
		};

		let status = response.status();
		if ACCEPTED_STATUSES.contains(&status) {
			debug!(event_id = %event.id(), status = status.as_u16(), "Event accepted");
			true
		} else {
			warn!(
				endpoint = %self.endpoint,
				event_id = %event.id(),
				status = status.as_u16(),
				"Collector rejected event"
			);
			false
		}
	}
}

/// Wire format of an event.
#[derive(Debug, Serialize)]
struct EventPayload<'a> {
	event_id: &'a str,
	message: &'a str,
	exception: &'a str,
	stacktrace: Option<&'a Stacktrace>,
	environment: &'a str,
	timestamp: f64,
	sdk_version: &'static str,
	os: &'a OsContext,
	runtime: &'a Runtime,
	server: Option<&'a str>,
	url: Option<&'a str>,
}

impl<'a> EventPayload<'a> {
	fn from_event(event: &'a Event) -> Self {
		Self {
			event_id: event.id().as_str(),
			message: event.message(),
			exception: event.exception_type(),
			stacktrace: event.stacktrace(),
			environment: event.environment(),
			timestamp: event.timestamp(),
			sdk_version: pinge_common_version::sdk_version(),
			os: event.os(),
			runtime: event.runtime(),
			server: event.server_name(),
			url: event.url(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::capture::CapturedError;
	use pinge_core::{CallSite, CaptureContext, FixedClock};

	fn event(call_chain: Vec<CallSite>) -> Event {
		let error = CapturedError::new("TypeError", "Something broke!", "/app/index.src", 14)
			.with_call_chain(call_chain);
		let context = CaptureContext::new(
			OsContext {
				name: "linux".to_string(),
				arch: "x86_64".to_string(),
			},
			Runtime {
				name: "rustc".to_string(),
				version: "1.82.0".to_string(),
			},
		)
		.with_server_name("web-01");
		Event::capture(&error, &context, &FixedClock(1_700_000_000.5)).unwrap()
	}

	#[test]
	fn payload_has_exactly_the_wire_fields() {
		let event = event(vec![CallSite::new("/app/index.src", 20, "ohoh")]);
		let json = serde_json::to_value(EventPayload::from_event(&event)).unwrap();

		let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
		keys.sort();
		assert_eq!(
			keys,
			vec![
				"environment",
				"event_id",
				"exception",
				"message",
				"os",
				"runtime",
				"sdk_version",
				"server",
				"stacktrace",
				"timestamp",
				"url",
			]
		);
	}

	#[test]
	fn payload_values_come_from_the_event() {
		let event = event(vec![CallSite::new("/app/index.src", 20, "ohoh")]);
		let json = serde_json::to_value(EventPayload::from_event(&event)).unwrap();

		assert_eq!(json["event_id"], event.id().as_str());
		assert_eq!(json["message"], "Something broke!");
		assert_eq!(json["exception"], "TypeError");
		assert_eq!(json["environment"], "production");
		assert_eq!(json["timestamp"], 1_700_000_000.5);
		assert_eq!(json["sdk_version"], pinge_common_version::sdk_version());
		assert_eq!(json["os"]["name"], "linux");
		assert_eq!(json["runtime"]["version"], "1.82.0");
		assert_eq!(json["server"], "web-01");
		assert!(json["url"].is_null());
		assert_eq!(json["stacktrace"]["frames"][1]["function"], "ohoh");
		assert_eq!(json["stacktrace"]["frames"][0]["line"], 14);
	}

	#[test]
	fn payload_stacktrace_is_null_without_call_chain() {
		let event = event(Vec::new());
		let json = serde_json::to_value(EventPayload::from_event(&event)).unwrap();
		assert!(json["stacktrace"].is_null());
	}

	#[test]
	fn endpoint_comes_from_dsn_without_credential() {
		let dsn: Dsn = "https://secret@collector.example.com/9".parse().unwrap();
		let transport = HttpTransport::new(&dsn).unwrap();
		assert_eq!(transport.endpoint(), "https://collector.example.com/9");
	}
}
