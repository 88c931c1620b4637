// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated wall-clock time.
//!
//! [`WallTimeLocal`] is a calendar date-time with no offset and no zone, in
//! the canonical grammar `YYYY-MM-DDTHH:mm:ss` (zero-padded, second
//! precision, literal `T` separator). The only constructor is
//! [`WallTimeLocal::parse`], which enforces two independent layers:
//!
//! 1. **Format** — the literal must match the grammar byte for byte
//!    ([`Error::Format`] otherwise): no fractional seconds, no offset
//!    suffix, no zone name, no alternative separators.
//! 2. **Calendar** — the components must form a real civil date-time
//!    ([`Error::CalendarValue`] for month 13, Feb 30, hour 24, ...),
//!    independent of any time zone.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Fixed separator positions in the 19-byte canonical grammar; every other
/// position must hold an ASCII digit.
const SEPARATORS: [(usize, u8); 5] = [(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':')];

/// Expected literal length in bytes.
const LITERAL_LEN: usize = 19;

/// A validated local calendar date-time, detached from any zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WallTimeLocal(NaiveDateTime);

impl WallTimeLocal {
    /// Validate `local` against the canonical grammar and the civil
    /// calendar, in that order.
    pub fn parse(local: &str) -> Result<Self> {
        let bytes = local.as_bytes();
        if bytes.len() != LITERAL_LEN {
            return Err(Error::Format(local.to_owned()));
        }
        for (i, b) in bytes.iter().enumerate() {
            match SEPARATORS.iter().find(|(pos, _)| *pos == i) {
                Some((_, sep)) if b == sep => {}
                None if b.is_ascii_digit() => {}
                _ => return Err(Error::Format(local.to_owned())),
            }
        }

        let date = NaiveDate::from_ymd_opt(
            digits(&bytes[0..4]) as i32,
            digits(&bytes[5..7]),
            digits(&bytes[8..10]),
        )
        .ok_or_else(|| Error::CalendarValue(local.to_owned()))?;
        let time = NaiveTime::from_hms_opt(
            digits(&bytes[11..13]),
            digits(&bytes[14..16]),
            digits(&bytes[17..19]),
        )
        .ok_or_else(|| Error::CalendarValue(local.to_owned()))?;

        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// The validated civil date-time.
    #[inline]
    pub(crate) fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for WallTimeLocal {
    /// Re-emits the canonical grammar the value was parsed from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// Fold a run of already-verified ASCII digits into a number.
fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
