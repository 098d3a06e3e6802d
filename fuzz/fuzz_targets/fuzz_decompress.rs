#![no_main]

use gzinflate::{decompress_all, GunzipConfig};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, not necessarily valid gzip: decompression may fail,
    // but it must never panic.
    let mut output = Vec::new();
    let _ = decompress_all(Cursor::new(data), &mut output, &GunzipConfig::default());
});
