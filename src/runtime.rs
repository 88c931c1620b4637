// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Startup capability check.
//!
//! [`assert_ready`] verifies, once at process start, that the zone catalog
//! can actually back conversions: it must be loaded, contain the
//! [`REQUIRED_ZONES`], and produce numerically sane results for two known
//! probe conversions. Any defect surfaces as the fatal
//! [`Error::Unavailable`] — a process failing this check must not serve
//! any conversion.

use crate::catalog::{IanaZoneId, ZoneCatalog};
use crate::error::{Error, Result};
use crate::resolve::{Disambiguation, ZonedInstant};
use crate::wall::WallTimeLocal;

/// Zones every deployment must resolve: one without a DST regime and one
/// with spring-forward/fall-back transitions. A documented constant, not a
/// hidden literal.
pub const REQUIRED_ZONES: [&str; 2] = ["Asia/Shanghai", "America/New_York"];

/// Fixed-offset probe: local noon in Shanghai (+08:00, no DST) and the
/// instant it must map to.
const ORDINARY_PROBE: (&str, &str, i64) =
    ("2026-02-08T12:00:00", "Asia/Shanghai", 1_770_523_200_000);

/// Fold probe: a wall time inside New York's 2026 fall-back hour.
const AMBIGUOUS_PROBE: (&str, &str) = ("2026-11-01T01:30:00", "America/New_York");

/// Gate the process on a present, complete, and numerically sane catalog.
pub fn assert_ready<C: ZoneCatalog + ?Sized>(catalog: &C) -> Result<()> {
    if !catalog.is_available() {
        return Err(Error::Unavailable(
            "IANA zone catalog failed to load".to_owned(),
        ));
    }
    for id in REQUIRED_ZONES {
        if catalog.lookup(id).is_none() {
            return Err(Error::Unavailable(format!(
                "required time zone not supported: {id}"
            )));
        }
    }

    // Probe 1: a fixed-offset conversion must reproduce a known instant.
    let (local, zone, expected) = ORDINARY_PROBE;
    let ms = probe(catalog, local, zone, Disambiguation::Earlier)?;
    if ms != expected {
        return Err(Error::Unavailable(format!(
            "catalog returned corrupt offset data: {local} @ {zone} -> {ms}, expected {expected}"
        )));
    }

    // Probe 2: a fall-back fold must yield two instants in the right order.
    let (local, zone) = AMBIGUOUS_PROBE;
    let earlier = probe(catalog, local, zone, Disambiguation::Earlier)?;
    let later = probe(catalog, local, zone, Disambiguation::Later)?;
    if later <= earlier {
        return Err(Error::Unavailable(format!(
            "catalog returned corrupt transition data: {local} @ {zone} fold is not ordered"
        )));
    }

    Ok(())
}

/// Run one probe conversion; any failure is a fatal environment defect.
fn probe<C: ZoneCatalog + ?Sized>(
    catalog: &C,
    local: &str,
    zone: &str,
    disambiguation: Disambiguation,
) -> Result<i64> {
    let wall = WallTimeLocal::parse(local)
        .map_err(|e| Error::Unavailable(format!("capability probe failed: {e}")))?;
    let zone = IanaZoneId::parse(catalog, zone)
        .map_err(|e| Error::Unavailable(format!("capability probe failed: {e}")))?;
    let ms = ZonedInstant::new(wall, zone, disambiguation)
        .resolve()
        .map_err(|e| Error::Unavailable(format!("capability probe failed: {e}")))?;
    Ok(ms.as_i64())
}
