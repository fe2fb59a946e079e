// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error-capture SDK for Rust applications.
//!
//! Captures an error together with the call chain that led to it, attaches
//! the surrounding source lines of every frame, and delivers the resulting
//! event to a collector identified by a DSN.
//!
//! # Quick Start
//!
//! ```ignore
//! use pinge::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .dsn("https://<token>@collector.example.com/42")
//!         .environment("staging")
//!         .build()?;
//!
//!     if let Err(e) = std::fs::read_to_string("settings.toml") {
//!         match client.capture_error(&e).await {
//!             Some(event) => println!("reported as {}", event.id()),
//!             None => println!("not reported"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Capturing never fails loudly: when an event cannot be built or the
//! collector rejects it, the failure is logged through `tracing` and the
//! capture returns `None`.

mod backtrace;
pub mod capture;
pub mod client;
pub mod dsn;
pub mod error;
pub mod host;
pub mod transport;

pub use capture::CapturedError;
pub use client::{Client, ClientBuilder, ClientConfig};
pub use dsn::{Dsn, Scheme};
pub use error::{Result, SdkError};
pub use transport::{HttpTransport, NullTransport, Transport};

pub use pinge_core::{
	CallSite, CaptureContext, Clock, ContextLine, CoreError, Event, EventId, FixedClock, Frame,
	OsContext, Runtime, SourceContext, SourceContextReader, Stacktrace, SystemClock, Throwable,
};
