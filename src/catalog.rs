// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! IANA zone catalog and zone-identifier validation.
//!
//! The catalog is modeled as an explicitly injected, read-only service
//! ([`ZoneCatalog`]) instead of a hidden global lookup, so tests can supply
//! restricted or faulty catalogs. Production code uses [`TzdbCatalog`],
//! backed by chrono-tz's compiled-in copy of the IANA Time Zone Database:
//! the data is linked into the binary, loaded once, and immutable for the
//! life of the process.

use crate::error::{Error, Result};
use chrono_tz::{Tz, TZ_VARIANTS};
use std::fmt;

/// Read-only, process-wide view of the IANA zone database.
///
/// Implementations must be cheap to query and free of interior mutability;
/// every validator queries the catalog per call, never caching membership
/// per value (the catalog may only change across process boundaries).
pub trait ZoneCatalog {
    /// Whether the backing zone database loaded at all. A `false` here is
    /// fatal for the process ([`Error::Unavailable`]).
    fn is_available(&self) -> bool;

    /// Resolve an identifier to its zone, or `None` when absent.
    fn lookup(&self, id: &str) -> Option<Tz>;

    /// Number of identifiers in the catalog.
    fn zone_count(&self) -> usize;
}

/// The production catalog: chrono-tz's compiled-in tzdb.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzdbCatalog;

impl ZoneCatalog for TzdbCatalog {
    fn is_available(&self) -> bool {
        true
    }

    fn lookup(&self, id: &str) -> Option<Tz> {
        id.parse::<Tz>().ok()
    }

    fn zone_count(&self) -> usize {
        TZ_VARIANTS.len()
    }
}

/// The process-wide production catalog instance.
pub fn tzdb() -> &'static TzdbCatalog {
    static CATALOG: TzdbCatalog = TzdbCatalog;
    &CATALOG
}

/// A zone identifier that existed in the catalog when it was parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IanaZoneId(Tz);

impl IanaZoneId {
    /// Validate `id` against `catalog`.
    ///
    /// Fails with [`Error::Unavailable`] when the catalog itself is gone
    /// and with [`Error::UnknownZone`] when `id` is syntactically plausible
    /// but absent from it.
    pub fn parse<C: ZoneCatalog + ?Sized>(catalog: &C, id: &str) -> Result<Self> {
        if !catalog.is_available() {
            return Err(Error::Unavailable(
                "IANA zone catalog failed to load".to_owned(),
            ));
        }
        catalog
            .lookup(id)
            .map(Self)
            .ok_or_else(|| Error::UnknownZone(id.to_owned()))
    }

    /// Canonical identifier, e.g. `"America/New_York"`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// The resolved zone with its offset-transition data.
    #[inline]
    pub(crate) fn tz(&self) -> Tz {
        self.0
    }
}

impl fmt::Display for IanaZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
