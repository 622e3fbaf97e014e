#![no_main]

use libfuzzer_sys::fuzz_target;
use omen_rgb::backlight::ColorCommand;

fuzz_target!(|data: &[u8]| {
    // Split the input into the helper's two argv tokens
    if let Ok(s) = std::str::from_utf8(data) {
        let (zone, color) = s.split_once('\0').unwrap_or((s, ""));

        if let Ok(command) = ColorCommand::parse(zone, color) {
            // Anything accepted must be exactly what the helper contract allows
            assert!(matches!(zone, "0" | "1" | "2" | "3" | "all"));
            assert_eq!(color.len(), 6);
            assert!(color.bytes().all(|b| b.is_ascii_hexdigit()));
            assert_eq!(command.to_args()[1], color.to_uppercase());
        }
    }
});
