// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction for the Pinge SDK.
//!
//! Every request the SDK makes carries the same User-Agent so the collector
//! can tell SDK builds apart.

mod client;

pub use client::{builder, builder_with_user_agent, user_agent};
