#![no_main]
use libfuzzer_sys::fuzz_target;
use zenlsb::{Engine, ScanOrder, pam};

fuzz_target!(|data: &[u8]| {
    // Arbitrary PAM bytes: parsing and extraction must never panic
    let _ = Engine::new(pam::PamSource::new(data)).decode(enough::Unstoppable);
    let _ = Engine::new(pam::PamSource::new(data))
        .with_scan_order(ScanOrder::ColumnMajor)
        .decode(enough::Unstoppable);
});
