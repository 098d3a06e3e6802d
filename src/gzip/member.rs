use super::crc::RunningCrc32;
use super::header::{GzipHeader, GzipTrailer};
use crate::deflate::{BlockDecoder, WindowBuffer};
use crate::error::{Error, Result};
use std::io::{Read, Write};

/// Decodes a single gzip member: header, DEFLATE block stream, trailer.
///
/// A "member" is everything from the 0x1f8b magic through the 8-byte
/// CRC32/ISIZE trailer; a gzip file is one or more members concatenated
/// back to back (RFC 1952 §2.2). Members share the caller's `BlockDecoder`
/// (and its underlying bit reader) across the whole stream, so back-to-back
/// members never lose buffered-but-unconsumed bytes at the boundary.
pub struct MemberDecoder {
    verify_header_crc: bool,
}

impl MemberDecoder {
    pub fn new(verify_header_crc: bool) -> Self {
        Self { verify_header_crc }
    }

    /// Decode one member, writing decompressed bytes to `out`.
    ///
    /// Returns the parsed header and the number of decompressed bytes
    /// written. `block_decoder` must be positioned at the start of a gzip
    /// member (use `BitReader::at_eof` via the driver to detect a clean
    /// end of stream before calling this).
    pub fn decode<R: Read, W: Write>(
        &self,
        block_decoder: &mut BlockDecoder<R>,
        out: &mut W,
    ) -> Result<(GzipHeader, u64)> {
        let header = GzipHeader::parse(block_decoder.bits_mut(), self.verify_header_crc)?;

        let mut window = WindowBuffer::new();
        let mut crc = RunningCrc32::new();

        loop {
            let is_final = block_decoder.decode_block(&mut window, &mut crc, out)?;
            if is_final {
                break;
            }
        }

        let trailer = GzipTrailer::parse(block_decoder.bits_mut())?;

        let decompressed_len = window.total_length();
        let computed_crc = crc.finalize();

        if computed_crc != trailer.crc32 {
            return Err(Error::Crc32Mismatch { expected: trailer.crc32, found: computed_crc });
        }

        // ISIZE is the input size modulo 2^32 (RFC 1952 §2.3.1).
        let expected_isize = (decompressed_len & 0xFFFF_FFFF) as u32;
        if expected_isize != trailer.isize {
            return Err(Error::SizeMismatch { expected: trailer.isize, found: expected_isize });
        }

        Ok((header, decompressed_len))
    }
}
