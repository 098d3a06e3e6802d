pub mod bits;
pub mod deflate;
pub mod error;
pub mod gzip;
pub mod huffman;

pub use bits::BitReader;
pub use deflate::{BlockDecoder, WindowBuffer};
pub use error::{Error, Result};
pub use gzip::{GzipHeader, GzipTrailer, MemberDecoder, RunningCrc32};

use std::io::{BufReader, BufWriter, Read, Write};

/// Configuration for a decompression run.
#[derive(Clone, Debug)]
pub struct GunzipConfig {
    /// Buffer size for I/O operations
    pub buffer_size: usize,
    /// Verify each member's optional FHCRC header checksum (off by default:
    /// most gzip writers never set FHCRC, so the common case never pays for
    /// this check, and RFC 1952 treats the header CRC as purely advisory).
    pub verify_header_crc: bool,
}

impl Default for GunzipConfig {
    fn default() -> Self {
        Self { buffer_size: 128 * 1024, verify_header_crc: false }
    }
}

/// Statistics from a decompression run.
#[derive(Clone, Debug, Default)]
pub struct DecompressStats {
    pub members_decoded: u64,
    pub input_bytes: u64,
    pub output_bytes: u64,
}

/// Decompress every gzip member in `input`, writing decompressed bytes to
/// `output` and stopping cleanly at end of stream.
///
/// Concatenated members (RFC 1952 §2.2) are decoded back to back: each
/// member gets its own 32 KiB sliding window and CRC32, but all of them
/// share one `BlockDecoder`/bit reader so no buffered bytes are lost at a
/// member boundary.
pub fn decompress_all<R: Read, W: Write>(input: R, output: W, config: &GunzipConfig) -> Result<DecompressStats> {
    let reader = BufReader::with_capacity(config.buffer_size, input);
    let mut writer = BufWriter::with_capacity(config.buffer_size, output);

    let mut block_decoder = BlockDecoder::new(reader);
    let member_decoder = MemberDecoder::new(config.verify_header_crc);
    let mut stats = DecompressStats::default();

    loop {
        if block_decoder.bits_mut().at_eof()? {
            break;
        }

        let (_header, decompressed_len) = member_decoder.decode(&mut block_decoder, &mut writer)?;
        stats.members_decoded += 1;
        stats.output_bytes += decompressed_len;
    }

    stats.input_bytes = block_decoder.bytes_read();
    writer.flush()?;
    Ok(stats)
}
