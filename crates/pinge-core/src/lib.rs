// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Pinge error-capture SDK.
//!
//! This crate turns a raised error into an immutable [`Event`]: a
//! deterministic [`EventId`], host metadata, and a [`Stacktrace`] whose frames
//! carry the source lines around each call. Delivery lives in the `pinge`
//! crate.
//!
//! # Overview
//!
//! - [`SourceContextReader`] reads up to five lines either side of a frame
//!   and degrades to an empty window when the file is unreadable
//! - [`Stacktrace`] puts the throw site first, followed by the recorded call
//!   chain
//! - [`EventId`] is a CRC-32 of `message|file|line`, stable across runs
//! - [`Event`] takes ambient metadata as an explicit [`CaptureContext`] and
//!   time from a [`Clock`], so construction is deterministic under test

pub mod clock;
pub mod context;
pub mod error;
pub mod event;
pub mod event_id;
pub mod frame;
pub mod source;
pub mod stacktrace;
pub mod throwable;

pub use clock::{Clock, FixedClock, SystemClock};
pub use context::{CaptureContext, OsContext, Runtime, DEFAULT_ENVIRONMENT};
pub use error::{CoreError, Result};
pub use event::Event;
pub use event_id::{checksum, EventId};
pub use frame::{CallSite, Frame};
pub use source::{ContextLine, SourceContext, SourceContextReader, CONTEXT_LINES};
pub use stacktrace::Stacktrace;
pub use throwable::Throwable;
