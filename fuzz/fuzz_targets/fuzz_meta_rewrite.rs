#![no_main]

use libfuzzer_sys::fuzz_target;
use modkit::domain::services::{read_identifier, rewrite_identifier, write_flag};
use modkit::AssetIdentifier;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let id = AssetIdentifier::from_name("fuzz");
        let updated = rewrite_identifier(content, &id);
        assert_eq!(read_identifier(&updated), Some(id));
        let _ = write_flag(content, "compatibleWithEditor", true);
    }
});
