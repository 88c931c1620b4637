// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversion failure taxonomy.
//!
//! Every failure is synchronous and non-retryable: each variant signals a
//! deterministic defect in the input or in the runtime environment, never a
//! transient condition. Only [`Error::Unavailable`] is fatal — it means the
//! zone catalog cannot back any conversion and the process must not serve
//! them. All other variants are scoped to the single call that raised them.

use thiserror::Error;

/// Everything that can go wrong between a wall-clock string and a bounded
/// epoch-millisecond instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The literal string does not match the expected grammar.
    #[error("invalid literal format: {0:?}")]
    Format(String),

    /// Well-formed literal, but the components are not a real civil
    /// date-time (month 13, Feb 30, hour 24, ...).
    #[error("invalid calendar date-time: {0:?}")]
    CalendarValue(String),

    /// Zone identifier absent from the loaded catalog.
    #[error("unknown IANA time zone: {0:?}")]
    UnknownZone(String),

    /// The zone catalog is missing, incomplete, or returns corrupt data.
    #[error("time zone catalog unavailable: {0}")]
    Unavailable(String),

    /// The wall time falls inside a spring-forward gap and never occurred
    /// in the given zone.
    #[error("nonexistent wall time: {local} @ {zone}")]
    NonexistentTime { local: String, zone: String },

    /// Epoch-millisecond value outside the supported 2000–2100 window.
    #[error("epoch_ms out of range: {0}")]
    Range(i64),
}

impl Error {
    /// `true` only for [`Error::Unavailable`]: the process must stop
    /// serving conversions. Every other variant is per-call.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Unavailable(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
