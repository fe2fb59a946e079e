// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use pinge_core::Event;
use tracing::debug;

use super::Transport;

/// Accepts every event without any I/O. For tests and offline mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

#[async_trait]
impl Transport for NullTransport {
	async fn send(&self, event: &Event) -> bool {
		debug!(event_id = %event.id(), "Discarding event (null transport)");
		true
	}
}
