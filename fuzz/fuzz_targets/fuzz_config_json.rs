#![no_main]

use libfuzzer_sys::fuzz_target;
use omen_rgb::config::AppConfig;

fuzz_target!(|data: &[u8]| {
    // Config parsing must never panic, whatever is on disk
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<AppConfig>(s);
    }
});
