// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client for capturing errors and reporting them to the collector.

use std::error::Error;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use pinge_core::{Clock, Event, SystemClock, Throwable, DEFAULT_ENVIRONMENT};
use tracing::{info, warn};

use crate::capture::CapturedError;
use crate::dsn::Dsn;
use crate::error::{Result, SdkError};
use crate::host;
use crate::transport::{HttpTransport, Transport};

/// Configuration for the HTTP transport the builder creates.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Timeout for a delivery request.
	pub request_timeout: Duration,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			request_timeout: crate::transport::DEFAULT_TIMEOUT,
		}
	}
}

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
	dsn: Option<String>,
	environment: Option<String>,
	server_name: Option<String>,
	transport: Option<Arc<dyn Transport>>,
	clock: Option<Arc<dyn Clock>>,
	config: ClientConfig,
}

impl ClientBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self {
			dsn: None,
			environment: None,
			server_name: None,
			transport: None,
			clock: None,
			config: ClientConfig::default(),
		}
	}

	/// Sets the DSN of the collector.
	///
	/// Example: `https://<token>@collector.example.com/42`
	pub fn dsn(mut self, dsn: impl Into<String>) -> Self {
		self.dsn = Some(dsn.into());
		self
	}

	/// Sets the environment name. Defaults to `production`.
	pub fn environment(mut self, env: impl Into<String>) -> Self {
		self.environment = Some(env.into());
		self
	}

	/// Sets the server name reported with events instead of the hostname.
	pub fn server_name(mut self, name: impl Into<String>) -> Self {
		self.server_name = Some(name.into());
		self
	}

	/// Sets the HTTP request timeout. Ignored when a custom transport is set.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.config.request_timeout = timeout;
		self
	}

	/// Delivers through `transport` instead of HTTP.
	pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
		self.transport = Some(Arc::new(transport));
		self
	}

	/// Takes event timestamps from `clock` instead of the system clock.
	pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
		self.clock = Some(Arc::new(clock));
		self
	}

	/// Builds the Client.
	pub fn build(self) -> Result<Client> {
		let dsn: Dsn = self.dsn.ok_or(SdkError::MissingDsn)?.parse()?;

		let transport = match self.transport {
			Some(transport) => transport,
			None => Arc::new(HttpTransport::with_timeout(
				&dsn,
				self.config.request_timeout,
			)?),
		};

		let environment = self
			.environment
			.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

		info!(
			host = %dsn.host(),
			project_id = ?dsn.project_id(),
			environment = %environment,
			"Pinge client initialized"
		);

		Ok(Client {
			inner: Arc::new(ClientInner {
				dsn,
				environment,
				server_name: self.server_name,
				transport,
				clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
			}),
		})
	}
}

impl Default for ClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

struct ClientInner {
	dsn: Dsn,
	environment: String,
	server_name: Option<String>,
	transport: Arc<dyn Transport>,
	clock: Arc<dyn Clock>,
}

/// Captures errors, builds events and hands them to a transport.
///
/// # Example
///
/// ```ignore
/// use pinge::Client;
///
/// let client = Client::builder()
///     .dsn("https://<token>@collector.example.com/1")
///     .environment("staging")
///     .build()?;
///
/// if let Err(e) = load_config() {
///     if let Some(event) = client.capture_error(&e).await {
///         tracing::info!(event_id = %event.id(), "reported");
///     }
/// }
/// ```
#[derive(Clone)]
pub struct Client {
	inner: Arc<ClientInner>,
}

impl Client {
	/// Client delivering to `dsn` through `transport`, with defaults otherwise.
	pub fn new(dsn: Dsn, transport: impl Transport + 'static) -> Self {
		Self {
			inner: Arc::new(ClientInner {
				dsn,
				environment: DEFAULT_ENVIRONMENT.to_string(),
				server_name: None,
				transport: Arc::new(transport),
				clock: Arc::new(SystemClock),
			}),
		}
	}

	/// Creates a new builder for constructing a Client.
	pub fn builder() -> ClientBuilder {
		ClientBuilder::new()
	}

	pub fn dsn(&self) -> &Dsn {
		&self.inner.dsn
	}

	pub fn environment(&self) -> &str {
		&self.inner.environment
	}

	/// Builds the event for `error` without sending it.
	pub fn build_event<E: Throwable + ?Sized>(&self, error: &E, url: Option<&str>) -> Result<Event> {
		let context = host::snapshot(
			&self.inner.environment,
			self.inner.server_name.as_deref(),
			url,
		);
		Ok(Event::capture(error, &context, self.inner.clock.as_ref())?)
	}

	/// Captures `error` and sends it. Returns the event if the collector
	/// accepted it.
	pub async fn capture<E: Throwable + ?Sized>(&self, error: &E) -> Option<Event> {
		self.deliver(error, None).await
	}

	/// Like [`Client::capture`], for an error raised while handling `url`.
	pub async fn capture_in_request<E: Throwable + ?Sized>(
		&self,
		error: &E,
		url: &str,
	) -> Option<Event> {
		self.deliver(error, Some(url)).await
	}

	/// Captures a Rust error at the caller's location with the current
	/// backtrace, then sends it.
	#[track_caller]
	pub fn capture_error<E: Error + 'static>(
		&self,
		error: &E,
	) -> impl Future<Output = Option<Event>> + '_ {
		let captured = CapturedError::from_error(error);
		async move { self.capture(&captured).await }
	}

	async fn deliver<E: Throwable + ?Sized>(&self, error: &E, url: Option<&str>) -> Option<Event> {
		let event = match self.build_event(error, url) {
			Ok(event) => event,
			Err(e) => {
				warn!(error = %e, "Failed to build event");
				return None;
			}
		};

		if self.inner.transport.send(&event).await {
			info!(event_id = %event.id(), exception = %event.exception_type(), "Event captured");
			Some(event)
		} else {
			warn!(event_id = %event.id(), "Event delivery failed");
			None
		}
	}
}
