#![no_main]

// Harness: embargo_overlay
// Focus: release dates with arbitrary offsets and sub-second parts always
// come out as whole-second UTC; released embargoes never attach.

use libfuzzer_sys::fuzz_target;
use arbitrary::Arbitrary;
use chrono::{DateTime, FixedOffset, Timelike};
use access_rights_core::{overlay_embargo, AccessDescriptor, Embargo, EmbargoStatus, RightsRepresentation};

#[derive(Arbitrary, Debug, Clone)]
struct EmbargoFrame {
    released: bool,
    secs: i32,
    nanos: u32,
    offset_minutes: i16,
    world: bool,
}

fuzz_target!(|frame: EmbargoFrame| {
    let Some(offset) = FixedOffset::east_opt(i32::from(frame.offset_minutes % (24 * 60)) * 60) else { return };
    let Some(utc) = DateTime::from_timestamp(i64::from(frame.secs), frame.nanos % 1_000_000_000) else { return };

    let embargo = Embargo {
        status: if frame.released { EmbargoStatus::Released } else { EmbargoStatus::Embargoed },
        release_date: utc.with_timezone(&offset),
        release_rights: if frame.world { RightsRepresentation::world() } else { RightsRepresentation::dark() },
        use_and_reproduction_statement: None,
    };
    let base = AccessDescriptor::dark();
    let result = overlay_embargo(&embargo, &base).unwrap();

    match result.embargo {
        Some(overlay) => {
            assert!(!frame.released);
            assert_eq!(overlay.release_date.nanosecond(), 0);
            assert_eq!(overlay.release_date.timestamp(), utc.timestamp());
        }
        None => assert!(frame.released),
    }
});
