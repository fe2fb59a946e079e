// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content-derived event identity for grouping repeated errors client-side.

use std::fmt;

use crc::{Crc, CRC_32_BZIP2};
use serde::Serialize;

use crate::throwable::Throwable;

const CHECKSUM: Crc<u32> = Crc::<u32>::new(&CRC_32_BZIP2);

/// Fingerprint of an event: a CRC-32 over `message|file|line`.
///
/// The same error raised at the same place always yields the same id. This is
/// a correlation hint, not a unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
	pub fn compute(message: &str, file: &str, line: u32) -> Self {
		Self(checksum(&format!("{message}|{file}|{line}")))
	}

	pub fn from_error<E: Throwable + ?Sized>(error: &E) -> Self {
		Self::compute(error.message(), error.file(), error.line())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EventId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for EventId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

/// CRC-32/BZIP2 of `input`, as 8 lowercase hex digits in little-endian byte
/// order.
pub fn checksum(input: &str) -> String {
	format!("{:08x}", CHECKSUM.checksum(input.as_bytes()).swap_bytes())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use std::collections::HashSet;

	#[test]
	fn checksum_matches_reference_values() {
		assert_eq!(checksum("a"), "6b9b9319");
		assert_eq!(checksum("abc"), "73bb8c64");
		assert_eq!(checksum("123456789"), "181989fc");
	}

	#[test]
	fn id_of_known_error() {
		let id = EventId::compute("Something broke!", "/app/index.src", 14);
		assert_eq!(id.as_str(), "26ba910e");
	}

	#[test]
	fn checksum_is_eight_hex_digits() {
		let id = checksum("");
		assert_eq!(id.len(), 8);
		assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
	}

	#[test]
	fn same_input_same_id() {
		let first = EventId::compute("boom", "/a.src", 10);
		let second = EventId::compute("boom", "/a.src", 10);
		assert_eq!(first, second);
		assert_eq!(first.as_str(), checksum("boom|/a.src|10"));
	}

	#[test]
	fn each_component_changes_the_id() {
		let base = EventId::compute("boom", "/a.src", 10);
		assert_ne!(base, EventId::compute("bang", "/a.src", 10));
		assert_ne!(base, EventId::compute("boom", "/b.src", 10));
		assert_ne!(base, EventId::compute("boom", "/a.src", 11));
	}

	#[test]
	fn distinct_triples_do_not_collide() {
		let messages = ["boom", "Something broke!", "index out of range", "timeout", "denied"];
		let files = ["/a.src", "/app/index.src", "/srv/lib/db.rs"];
		let lines = [1, 14, 20, 512];

		let mut seen = HashSet::new();
		let mut count = 0;
		for message in messages {
			for file in files {
				for line in lines {
					count += 1;
					seen.insert(EventId::compute(message, file, line));
				}
			}
		}

		assert_eq!(count, 60);
		assert_eq!(seen.len(), count);
	}

	proptest! {
		#[test]
		fn compute_is_deterministic(message in ".*", file in "/[a-z/]{1,20}", line in 1u32..100_000) {
			prop_assert_eq!(
				EventId::compute(&message, &file, line),
				EventId::compute(&message, &file, line)
			);
		}
	}
}
