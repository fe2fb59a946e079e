// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Connection descriptor for the remote collector.
//!
//! A DSN looks like `https://<credential>@collector.example.com/<project>`.
//! The credential travels as the URL user; the optional numeric path segment
//! selects the project.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::SdkError;

/// Path used when the DSN names no project.
pub const BEACON_PATH: &str = "beacon";

/// Protocol used to reach the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
	Http,
	Https,
}

impl Scheme {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Http => "http",
			Self::Https => "https",
		}
	}

	pub fn default_port(&self) -> u16 {
		match self {
			Self::Http => 80,
			Self::Https => 443,
		}
	}
}

impl fmt::Display for Scheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A validated DSN.
#[derive(Clone, PartialEq, Eq)]
pub struct Dsn {
	scheme: Scheme,
	host: String,
	port: u16,
	credential: String,
	project_id: Option<u64>,
}

impl Dsn {
	pub fn new(
		scheme: Scheme,
		host: impl Into<String>,
		port: u16,
		credential: impl Into<String>,
		project_id: Option<u64>,
	) -> Self {
		Self {
			scheme,
			host: host.into(),
			port,
			credential: credential.into(),
			project_id,
		}
	}

	pub fn scheme(&self) -> Scheme {
		self.scheme
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn port(&self) -> u16 {
		self.port
	}

	pub fn credential(&self) -> &str {
		&self.credential
	}

	pub fn project_id(&self) -> Option<u64> {
		self.project_id
	}

	/// Collector URL without the credential, e.g. `https://host/42`.
	pub fn endpoint(&self) -> String {
		format!("{}://{}{}", self.scheme, self.authority(), self.path())
	}

	fn authority(&self) -> String {
		if self.port == self.scheme.default_port() {
			self.host.clone()
		} else {
			format!("{}:{}", self.host, self.port)
		}
	}

	fn path(&self) -> String {
		match self.project_id {
			Some(id) => format!("/{id}"),
			None => format!("/{BEACON_PATH}"),
		}
	}
}

/// Canonical form, including the credential:
/// `scheme://credential@host[:port]/<project or beacon>`.
impl fmt::Display for Dsn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}://{}@{}{}",
			self.scheme,
			self.credential,
			self.authority(),
			self.path()
		)
	}
}

impl fmt::Debug for Dsn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Dsn")
			.field("scheme", &self.scheme)
			.field("host", &self.host)
			.field("port", &self.port)
			.field("credential", &"[REDACTED]")
			.field("project_id", &self.project_id)
			.finish()
	}
}

impl FromStr for Dsn {
	type Err = SdkError;

	fn from_str(dsn: &str) -> Result<Self, Self::Err> {
		let url = Url::parse(dsn)
			.map_err(|_| SdkError::InvalidDsn(format!("The DSN is invalid ({dsn}).")))?;

		let host = url.host_str().unwrap_or_default();
		if host.is_empty() || url.username().is_empty() {
			return Err(SdkError::InvalidDsn(format!(
				"The DSN ({dsn}) must contain a scheme, host and user."
			)));
		}

		let scheme = match url.scheme() {
			"http" => Scheme::Http,
			"https" => Scheme::Https,
			_ => {
				return Err(SdkError::InvalidDsn(format!(
					"The scheme of the DSN ({dsn}) must be either http or https."
				)))
			}
		};

		let project_id = match url.path().trim_matches('/') {
			"" => None,
			segment => Some(segment.parse::<u64>().map_err(|_| {
				SdkError::InvalidDsn(format!(
					"The project of the DSN ({dsn}) must be a numeric identifier."
				))
			})?),
		};

		Ok(Self {
			scheme,
			host: host.to_string(),
			port: url.port().unwrap_or(scheme.default_port()),
			credential: url.username().to_string(),
			project_id,
		})
	}
}
