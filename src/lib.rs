// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-Clock → Epoch Policy Module
//!
//! This crate converts ambiguous human-entered wall-clock time plus an IANA
//! zone identifier into a validated, bounded epoch-millisecond instant,
//! under a fixed, auditable policy for DST edge cases. It is meant to be
//! the single choke point for civil-time-to-instant conversion, so nothing
//! else in a system has to do ad-hoc, timezone-unsafe time arithmetic.
//!
//! # Core types
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`WallTimeLocal`] | validated `YYYY-MM-DDTHH:mm:ss` local time, no zone |
//! | [`IanaZoneId`] | zone identifier validated against a [`ZoneCatalog`] |
//! | [`EpochMillis`] | bounded epoch-millisecond instant (2000–2100) |
//! | [`Disambiguation`] | which interpretation of an ambiguous time to take |
//! | [`Error`] | the full failure taxonomy, with [`Error::is_fatal`] |
//!
//! # Conversion policy
//!
//! * A wall time inside a **spring-forward gap** never happened; conversion
//!   fails with [`Error::NonexistentTime`] instead of silently shifting the
//!   value past the gap.
//! * A wall time inside a **fall-back fold** happened twice; conversion
//!   deterministically takes the **earlier** instant
//!   ([`DEFAULT_DISAMBIGUATION`]).
//! * Every produced instant is bounds-checked into
//!   `[EpochMillis::MIN, EpochMillis::MAX]` before it is returned.
//!
//! # Example
//!
//! ```
//! use zonepoch::{tzdb, wall_time_to_epoch_ms, Error};
//!
//! // An ordinary conversion.
//! let ms = wall_time_to_epoch_ms(tzdb(), "2026-02-08T12:00:00", "Asia/Shanghai").unwrap();
//! assert_eq!(ms.to_api_string(), "1770523200000");
//!
//! // 02:30 never happened in New York on 2026-03-08 (spring forward).
//! let err = wall_time_to_epoch_ms(tzdb(), "2026-03-08T02:30:00", "America/New_York");
//! assert!(matches!(err, Err(Error::NonexistentTime { .. })));
//! ```
//!
//! # Startup gating
//!
//! Call [`assert_ready`] once at process start; it verifies the zone
//! catalog is present, contains [`REQUIRED_ZONES`], and returns sane
//! offsets for two probe conversions. A process failing that check must
//! not serve conversions.
//!
//! # Concurrency
//!
//! All operations are synchronous and side-effect-free over an immutable,
//! compiled-in zone database, so everything here can be called from any
//! number of threads without locking.

mod catalog;
mod clock;
mod epoch;
mod error;
mod resolve;
mod runtime;
mod wall;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use catalog::{tzdb, IanaZoneId, TzdbCatalog, ZoneCatalog};
pub use clock::now_epoch_ms;
pub use epoch::EpochMillis;
pub use error::{Error, Result};
pub use resolve::{resolve_wall_time, Disambiguation, ZonedInstant, DEFAULT_DISAMBIGUATION};
pub use runtime::{assert_ready, REQUIRED_ZONES};
pub use wall::WallTimeLocal;

/// Convert a wall-clock literal and a zone identifier to a bounded instant.
///
/// Validation order: literal format and calendar value
/// ([`WallTimeLocal::parse`]) → catalog membership ([`IanaZoneId::parse`])
/// → DST disambiguation under the fixed earlier-instant policy
/// ([`resolve_wall_time`]) → range check. The first failing stage reports;
/// nothing is defaulted or silently repaired.
pub fn wall_time_to_epoch_ms<C: ZoneCatalog + ?Sized>(
    catalog: &C,
    local: &str,
    tz: &str,
) -> Result<EpochMillis> {
    let wall = WallTimeLocal::parse(local)?;
    let zone = IanaZoneId::parse(catalog, tz)?;
    resolve_wall_time(wall, zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_reports_the_first_failing_stage() {
        // Format before zone: a bad literal wins even with a bad zone.
        assert!(matches!(
            wall_time_to_epoch_ms(tzdb(), "not-a-time", "Not/A_Zone"),
            Err(Error::Format(_))
        ));
        // Calendar before zone.
        assert!(matches!(
            wall_time_to_epoch_ms(tzdb(), "2026-13-01T00:00:00", "Not/A_Zone"),
            Err(Error::CalendarValue(_))
        ));
        // Zone before resolution: gap input with a bad zone reports the zone.
        assert!(matches!(
            wall_time_to_epoch_ms(tzdb(), "2026-03-08T02:30:00", "Not/A_Zone"),
            Err(Error::UnknownZone(_))
        ));
    }

    #[test]
    fn successful_pipeline_produces_a_bounded_instant() {
        let ms = wall_time_to_epoch_ms(tzdb(), "2026-06-15T09:30:00", "Europe/Berlin").unwrap();
        assert!(ms >= EpochMillis::MIN && ms <= EpochMillis::MAX);
    }
}
