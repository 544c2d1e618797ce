#![no_main]
use block_vfp::{LineFilter, LineFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary declarations must parse or fail cleanly
    let _ = LineFormat::from_toml_str(text);
    let _ = LineFormat::from_json_str(text);

    let filter = match LineFilter::new(LineFormat::vcf()) {
        Ok(f) => f,
        Err(_) => return,
    };
    let records: Vec<&str> = filter.skip_header(text.lines()).collect();
    if let Some(first) = records.first() {
        assert!(!filter.is_skippable(first));
    }
});
