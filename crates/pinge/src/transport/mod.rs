// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event delivery.

mod http;
mod null;

pub use http::{HttpTransport, ACCEPTED_STATUSES, DEFAULT_TIMEOUT};
pub use null::NullTransport;

use async_trait::async_trait;
use pinge_core::Event;

/// Delivers a built event to the collector.
///
/// Delivery is all-or-nothing: `true` when the collector accepted the event,
/// `false` for any rejection or transport failure. Implementations never
/// retry.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, event: &Event) -> bool;
}
