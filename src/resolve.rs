// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! DST disambiguation — the algorithmic core.
//!
//! A wall-clock time interpreted in a zone has one of three relationships
//! to the zone's offset-transition history:
//!
//! * **unambiguous** — exactly one instant carries that local time;
//! * **ambiguous** — the local time occurred twice because the clock fell
//!   back across it (the two candidate instants differ by the transition's
//!   standard/daylight offset delta, commonly one hour);
//! * **nonexistent** — the local time never occurred because the clock
//!   sprang forward over it.
//!
//! The conversion policy is fixed: ambiguous times resolve to the
//! **earlier** instant ([`DEFAULT_DISAMBIGUATION`]), chosen for determinism
//! and auditability, and nonexistent times are rejected with
//! [`Error::NonexistentTime`] — never silently shifted past the gap. The
//! policy is a compiled-in constant, not derived from request context.

use crate::catalog::IanaZoneId;
use crate::epoch::EpochMillis;
use crate::error::{Error, Result};
use crate::wall::WallTimeLocal;
use chrono::{LocalResult, TimeZone};

/// Which of two valid interpretations of an ambiguous wall time to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguation {
    /// The instant before the fall-back transition.
    Earlier,
    /// The instant after the fall-back transition.
    Later,
}

/// The fixed crate-wide policy for ambiguous wall times.
///
/// [`resolve_wall_time`] applies this unconditionally; the explicit
/// [`Disambiguation::Later`] path exists for the startup capability probe
/// and for tests asserting the fold delta, not as a caller override.
pub const DEFAULT_DISAMBIGUATION: Disambiguation = Disambiguation::Earlier;

/// Transient pairing of a validated wall time, a validated zone, and a
/// disambiguation choice. Built per call, resolved, and discarded — never
/// persisted.
#[derive(Debug, Clone, Copy)]
pub struct ZonedInstant {
    wall: WallTimeLocal,
    zone: IanaZoneId,
    disambiguation: Disambiguation,
}

impl ZonedInstant {
    pub fn new(wall: WallTimeLocal, zone: IanaZoneId, disambiguation: Disambiguation) -> Self {
        Self {
            wall,
            zone,
            disambiguation,
        }
    }

    /// Resolve to exactly one bounded instant, or fail.
    ///
    /// The result is range-checked before it leaves the resolver, so a
    /// corrupt catalog cannot hand an out-of-window instant to storage.
    pub fn resolve(&self) -> Result<EpochMillis> {
        let instant = match self.zone.tz().from_local_datetime(&self.wall.naive()) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earlier, later) => match self.disambiguation {
                Disambiguation::Earlier => earlier,
                Disambiguation::Later => later,
            },
            // Spring-forward gap: reject, never shift.
            LocalResult::None => {
                return Err(Error::NonexistentTime {
                    local: self.wall.to_string(),
                    zone: self.zone.name().to_owned(),
                })
            }
        };
        EpochMillis::try_new(instant.timestamp_millis())
    }
}

/// Resolve `wall` in `zone` under the fixed policy
/// ([`DEFAULT_DISAMBIGUATION`]).
pub fn resolve_wall_time(wall: WallTimeLocal, zone: IanaZoneId) -> Result<EpochMillis> {
    ZonedInstant::new(wall, zone, DEFAULT_DISAMBIGUATION).resolve()
}
