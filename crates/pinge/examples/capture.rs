// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: Capture an error and report it with the pinge SDK.
//!
//! Run with:
//!   PINGE_DSN=http://<token>@localhost:3000/1 cargo run --example capture -p pinge

use std::fmt;

use pinge::Client;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct CheckoutError {
	order: u32,
}

impl fmt::Display for CheckoutError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Something broke while checking out order {}!", self.order)
	}
}

impl std::error::Error for CheckoutError {}

fn ohoh(order: u32) -> Result<(), CheckoutError> {
	Err(CheckoutError { order })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pinge=debug")),
		)
		.init();

	let dsn = std::env::var("PINGE_DSN").map_err(|_| "PINGE_DSN environment variable required")?;

	let client = Client::builder()
		.dsn(dsn)
		.environment("development")
		.server_name("example-server")
		.build()?;

	println!("Reporting to {}", client.dsn().endpoint());

	if let Err(e) = ohoh(42) {
		match client.capture_error(&e).await {
			Some(event) => {
				println!("Captured event {}", event.id());
				if let Some(trace) = event.stacktrace() {
					for frame in trace {
						println!("  {} at {}:{}", frame.function(), frame.file(), frame.line());
					}
				}
			}
			None => println!("Event was not delivered"),
		}
	}

	Ok(())
}
