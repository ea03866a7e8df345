//! Fuzz target: `DeviceConfig::from_json` (provisioning parser)
//!
//! Drives arbitrary byte sequences through the JSON config parser and
//! checks:
//! - No panics for any input
//! - Every accepted config passes its own validation
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use sgready::DeviceConfig;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = DeviceConfig::from_json(text) {
        assert!(config.validate().is_ok());
        // Accepted configs serialize back to parseable JSON.
        let json = config.to_json();
        assert!(DeviceConfig::from_json(&json).is_ok());
    }
});
