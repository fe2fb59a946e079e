// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wall-clock source for event timestamps.

use chrono::Utc;

/// Supplies capture time as fractional Unix seconds.
pub trait Clock: Send + Sync {
	fn now(&self) -> f64;
}

/// Reads the system wall clock with microsecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> f64 {
		Utc::now().timestamp_micros() as f64 / 1_000_000.0
	}
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
	fn now(&self) -> f64 {
		self.0
	}
}
