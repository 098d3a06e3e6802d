#![no_main]

use flate2::write::GzEncoder;
use flate2::Compression;
use gzinflate::{decompress_all, GunzipConfig};
use libfuzzer_sys::fuzz_target;
use std::io::{Cursor, Write};

fuzz_target!(|data: &[u8]| {
    // Compress arbitrary data with an independent encoder, then require the
    // decompressor to recover it exactly. Exercises the DEFLATE/Huffman path
    // against varied content rather than hand-picked fixtures.
    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    if encoder.write_all(data).is_err() {
        return;
    }
    let compressed = match encoder.finish() {
        Ok(c) => c,
        Err(_) => return,
    };

    let mut output = Vec::new();
    let result = decompress_all(Cursor::new(compressed), &mut output, &GunzipConfig::default());
    assert!(result.is_ok(), "valid gzip failed to decompress");
    assert_eq!(output, data, "round-trip mismatch");
});
