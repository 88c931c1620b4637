// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bounded epoch-millisecond instant.
//!
//! [`EpochMillis`] is a signed 64-bit count of milliseconds since
//! 1970-01-01T00:00:00Z, constrained at construction to the window
//! `[EpochMillis::MIN, EpochMillis::MAX]` (2000-01-01 .. 2100-01-01, both
//! UTC midnight, inclusive). The window catches unit-confusion bugs
//! (seconds vs millis) and garbage or overflowed values before they reach
//! storage.
//!
//! On the wire the value travels as a decimal digit string of length
//! 10–16 ([`EpochMillis::to_api_string`] / [`EpochMillis::from_api_string`]),
//! so transports with limited integer precision cannot corrupt it.

use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated instant in epoch milliseconds.
///
/// Every value of this type is inside the supported window; the only
/// constructors are the range-checked [`EpochMillis::try_new`] and
/// [`EpochMillis::from_api_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpochMillis(i64);

impl EpochMillis {
    /// Lower bound: 2000-01-01T00:00:00Z.
    pub const MIN: Self = Self(946_684_800_000);

    /// Upper bound: 2100-01-01T00:00:00Z.
    pub const MAX: Self = Self(4_102_444_800_000);

    /// Range-checked constructor.
    ///
    /// Fails with [`Error::Range`] when `ms` lies outside
    /// `[Self::MIN, Self::MAX]`.
    pub fn try_new(ms: i64) -> Result<Self> {
        if ms < Self::MIN.0 || ms > Self::MAX.0 {
            return Err(Error::Range(ms));
        }
        Ok(Self(ms))
    }

    /// The underlying millisecond count.
    #[inline]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Wire form: the value as a decimal string.
    pub fn to_api_string(&self) -> String {
        self.0.to_string()
    }

    /// Parse the wire form: 10–16 ASCII digits, nothing else, then the
    /// same range check as [`EpochMillis::try_new`].
    ///
    /// Fails with [`Error::Format`] on any grammar violation and with
    /// [`Error::Range`] when the parsed value is outside the window.
    pub fn from_api_string(raw: &str) -> Result<Self> {
        let ok_shape =
            (10..=16).contains(&raw.len()) && raw.bytes().all(|b| b.is_ascii_digit());
        if !ok_shape {
            return Err(Error::Format(raw.to_owned()));
        }
        // 16 decimal digits always fit in an i64.
        let ms: i64 = raw.parse().map_err(|_| Error::Format(raw.to_owned()))?;
        Self::try_new(ms)
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// Serialized in wire form (decimal string), not as a JSON number, so the
// value survives transports without native 64-bit integers.

#[cfg(feature = "serde")]
impl Serialize for EpochMillis {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_api_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for EpochMillis {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_api_string(&raw).map_err(serde::de::Error::custom)
    }
}
