// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The single sanctioned accessor for "current instant".
//!
//! Every call site in the wider system that needs the current time must go
//! through [`now_epoch_ms`] so the value is bounds-checked like any other
//! instant. That routing is a boundary contract enforced at call sites;
//! this module only guarantees the value it hands out.

use crate::epoch::EpochMillis;
use crate::error::Result;
use chrono::Utc;

/// Current instant from the host clock, range-validated.
///
/// Fails with [`crate::Error::Range`] if the host clock reads outside the
/// supported 2000–2100 window — an environment defect that must surface,
/// never be defaulted.
pub fn now_epoch_ms() -> Result<EpochMillis> {
    EpochMillis::try_new(Utc::now().timestamp_millis())
}
