use chrono::TimeZone;
use chrono_tz::Tz;
use zonepoch::{
    assert_ready, tzdb, wall_time_to_epoch_ms, Disambiguation, EpochMillis, Error, IanaZoneId,
    WallTimeLocal, ZoneCatalog, ZonedInstant,
};

/// Catalog double restricted to an explicit identifier list.
struct RestrictedCatalog(&'static [&'static str]);

impl ZoneCatalog for RestrictedCatalog {
    fn is_available(&self) -> bool {
        true
    }
    fn lookup(&self, id: &str) -> Option<Tz> {
        if self.0.contains(&id) {
            id.parse::<Tz>().ok()
        } else {
            None
        }
    }
    fn zone_count(&self) -> usize {
        self.0.len()
    }
}

/// Render an instant back to wall-clock form in `zone`, second precision.
fn format_back(ms: EpochMillis, zone: &str) -> String {
    let tz: Tz = zone.parse().unwrap();
    tz.timestamp_millis_opt(ms.as_i64())
        .single()
        .unwrap()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

#[test]
fn existing_unambiguous_times_roundtrip_exactly() {
    for (local, zone) in [
        ("2026-02-08T12:00:00", "Asia/Shanghai"),
        ("2026-06-15T09:30:00", "America/New_York"),
        ("2026-12-24T18:00:00", "Europe/Berlin"),
        ("2031-07-01T00:00:00", "UTC"),
        ("2026-03-08T03:00:00", "America/New_York"), // first post-gap second
    ] {
        let ms = wall_time_to_epoch_ms(tzdb(), local, zone).unwrap();
        assert_eq!(format_back(ms, zone), local, "roundtrip broke for {local} @ {zone}");

        // Converting again from the round-tripped string is idempotent.
        let again = wall_time_to_epoch_ms(tzdb(), &format_back(ms, zone), zone).unwrap();
        assert_eq!(again, ms);
    }
}

#[test]
fn spring_forward_gap_is_rejected_end_to_end() {
    let err = wall_time_to_epoch_ms(tzdb(), "2026-03-08T02:30:00", "America/New_York")
        .unwrap_err();
    assert_eq!(
        err,
        Error::NonexistentTime {
            local: "2026-03-08T02:30:00".into(),
            zone: "America/New_York".into()
        }
    );
}

#[test]
fn fall_back_fold_resolves_to_the_earlier_instant() {
    let earlier = wall_time_to_epoch_ms(tzdb(), "2026-11-01T01:30:00", "America/New_York")
        .unwrap();
    assert_eq!(earlier.as_i64(), 1_793_511_000_000); // 2026-11-01T05:30:00Z (EDT)

    let wall = WallTimeLocal::parse("2026-11-01T01:30:00").unwrap();
    let zone = IanaZoneId::parse(tzdb(), "America/New_York").unwrap();
    let later = ZonedInstant::new(wall, zone, Disambiguation::Later)
        .resolve()
        .unwrap();
    assert_eq!(later.as_i64() - earlier.as_i64(), 3_600_000);
}

#[test]
fn epoch_window_boundaries() {
    assert!(EpochMillis::try_new(EpochMillis::MIN.as_i64() - 1).is_err());
    assert!(EpochMillis::try_new(EpochMillis::MIN.as_i64()).is_ok());
    assert!(EpochMillis::try_new(EpochMillis::MAX.as_i64()).is_ok());
    assert!(EpochMillis::try_new(EpochMillis::MAX.as_i64() + 1).is_err());
}

#[test]
fn wire_format_scenarios() {
    let ms = EpochMillis::from_api_string("1770508800000").unwrap();
    assert_eq!(ms.as_i64(), 1_770_508_800_000);
    assert_eq!(ms.to_api_string(), "1770508800000");

    assert!(matches!(
        EpochMillis::from_api_string("123"),
        Err(Error::Format(_))
    ));
}

#[test]
fn literal_format_boundaries() {
    assert!(wall_time_to_epoch_ms(tzdb(), "2024-04-11T15:24:53", "UTC").is_ok());
    assert!(matches!(
        wall_time_to_epoch_ms(tzdb(), "2024-04-11 15:24:53", "UTC"),
        Err(Error::Format(_))
    ));
    assert!(matches!(
        wall_time_to_epoch_ms(tzdb(), "2024-13-01T00:00:00", "UTC"),
        Err(Error::CalendarValue(_))
    ));
}

#[test]
fn restricted_catalog_rejects_zones_outside_it() {
    let catalog = RestrictedCatalog(&["Asia/Shanghai"]);
    // In the restricted catalog: fine.
    assert!(wall_time_to_epoch_ms(&catalog, "2026-02-08T12:00:00", "Asia/Shanghai").is_ok());
    // Real zone, but outside this catalog's view: unknown, per call.
    let err = wall_time_to_epoch_ms(&catalog, "2026-02-08T12:00:00", "Europe/Berlin")
        .unwrap_err();
    assert_eq!(err, Error::UnknownZone("Europe/Berlin".into()));
    assert!(!err.is_fatal());
}

#[test]
fn startup_gate_against_catalog_doubles() {
    assert_ready(tzdb()).unwrap();

    let incomplete = RestrictedCatalog(&["Asia/Shanghai"]);
    let err = assert_ready(&incomplete).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn zone_membership_is_checked_per_call() {
    // The same identifier can succeed or fail depending on the catalog in
    // hand at that call; nothing is cached across catalogs.
    let open = RestrictedCatalog(&["Europe/Berlin"]);
    let closed = RestrictedCatalog(&[]);
    assert!(IanaZoneId::parse(&open, "Europe/Berlin").is_ok());
    assert!(IanaZoneId::parse(&closed, "Europe/Berlin").is_err());
    assert!(IanaZoneId::parse(&open, "Europe/Berlin").is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_the_wire_string_form() {
    let ms = EpochMillis::from_api_string("1770523200000").unwrap();
    let json = serde_json::to_string(&ms).unwrap();
    assert_eq!(json, "\"1770523200000\"");

    let back: EpochMillis = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ms);

    // Out-of-grammar wire strings fail to deserialize.
    assert!(serde_json::from_str::<EpochMillis>("\"123\"").is_err());
    // Numbers are not the wire form.
    assert!(serde_json::from_str::<EpochMillis>("1770523200000").is_err());
}
