//! Fuzz target: `Mode::from_raw` (raw register decoder)
//!
//! Feeds arbitrary i64 register values through the mode decoder and checks:
//! - No panics for any input
//! - `Ok` is returned exactly for the SG Ready range 1..=3
//! - Every decoded mode round-trips through `as_raw`
//!
//! cargo fuzz run fuzz_mode_decode

#![no_main]

use libfuzzer_sys::fuzz_target;
use sgready::Mode;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let raw = i64::from_le_bytes(data[..8].try_into().unwrap());

    match Mode::from_raw(raw) {
        Ok(mode) => {
            assert!((1..=3).contains(&raw), "accepted out-of-range raw {raw}");
            assert_eq!(mode.as_raw(), raw);
        }
        Err(_) => {
            assert!(!(1..=3).contains(&raw), "rejected in-range raw {raw}");
        }
    }
});
