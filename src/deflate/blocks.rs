use super::tables::{decode_distance, decode_length, CODE_LENGTH_ORDER, DISTANCE_TABLE, LENGTH_TABLE};
use super::window::WindowBuffer;
use crate::bits::BitReader;
use crate::error::{Error, Result};
use crate::gzip::crc::RunningCrc32;
use crate::huffman::HuffmanDecoder;
use std::io::{Read, Write};
use std::sync::OnceLock;

fn fixed_literal_length_decoder() -> &'static HuffmanDecoder {
    static DECODER: OnceLock<HuffmanDecoder> = OnceLock::new();
    DECODER.get_or_init(HuffmanDecoder::fixed_literal_length)
}

fn fixed_distance_decoder() -> &'static HuffmanDecoder {
    static DECODER: OnceLock<HuffmanDecoder> = OnceLock::new();
    DECODER.get_or_init(HuffmanDecoder::fixed_distance)
}

/// Decodes DEFLATE blocks (RFC 1951), streaming literal and back-reference
/// bytes directly into a `WindowBuffer`, a running CRC32, and the caller's
/// output sink as they are produced.
///
/// Unlike a design that first materializes a block's tokens into a `Vec` for
/// later re-encoding, there is no such consumer here and no bound on a
/// DEFLATE block's size, so bytes are written through immediately.
pub struct BlockDecoder<R: Read> {
    bits: BitReader<R>,
}

impl<R: Read> BlockDecoder<R> {
    pub fn new(reader: R) -> Self {
        Self { bits: BitReader::new(reader) }
    }

    /// Decode one DEFLATE block, returning its BFINAL flag.
    pub fn decode_block<W: Write>(
        &mut self,
        window: &mut WindowBuffer,
        crc: &mut RunningCrc32,
        out: &mut W,
    ) -> Result<bool> {
        let is_final = self.bits.read_bit()?;
        let block_type = self.bits.read_bits(2)? as u8;

        match block_type {
            0 => self.decode_stored_block(window, crc, out)?,
            1 => self.decode_symbols(
                fixed_literal_length_decoder(),
                fixed_distance_decoder(),
                window,
                crc,
                out,
            )?,
            2 => self.decode_dynamic_block(window, crc, out)?,
            _ => return Err(Error::InvalidBlockType(block_type)),
        }

        Ok(is_final)
    }

    fn decode_stored_block<W: Write>(
        &mut self,
        window: &mut WindowBuffer,
        crc: &mut RunningCrc32,
        out: &mut W,
    ) -> Result<()> {
        self.bits.align_to_byte();

        let len = self.bits.read_u16_le()?;
        let nlen = self.bits.read_u16_le()?;
        if len != !nlen {
            return Err(Error::StoredBlockLengthMismatch { len, nlen });
        }

        let mut buf = vec![0u8; len as usize];
        self.bits.read_bytes(&mut buf)?;
        for &byte in &buf {
            window.append(byte);
        }
        crc.update(&buf);
        out.write_all(&buf)?;
        Ok(())
    }

    fn decode_dynamic_block<W: Write>(
        &mut self,
        window: &mut WindowBuffer,
        crc: &mut RunningCrc32,
        out: &mut W,
    ) -> Result<()> {
        let hlit = self.bits.read_bits(5)? as usize + 257;
        let hdist = self.bits.read_bits(5)? as usize + 1;
        let hclen = self.bits.read_bits(4)? as usize + 4;

        let mut code_length_lengths = [0u8; 19];
        for i in 0..hclen {
            code_length_lengths[CODE_LENGTH_ORDER[i]] = self.bits.read_bits(3)? as u8;
        }
        let code_length_decoder = HuffmanDecoder::from_code_lengths(&code_length_lengths)?;

        let total_codes = hlit + hdist;
        let mut all_lengths = Vec::with_capacity(total_codes);

        while all_lengths.len() < total_codes {
            let sym = code_length_decoder.decode(&mut self.bits)?;
            match sym {
                0..=15 => all_lengths.push(sym as u8),
                16 => {
                    let repeat = self.bits.read_bits(2)? as usize + 3;
                    let prev = *all_lengths.last().ok_or(Error::InvalidCodeLengths(
                        "repeat-previous with no previous length",
                    ))?;
                    if all_lengths.len() + repeat > total_codes {
                        return Err(Error::InvalidCodeLengths(
                            "code length repeat overruns HLIT+HDIST",
                        ));
                    }
                    all_lengths.resize(all_lengths.len() + repeat, prev);
                }
                17 => {
                    let repeat = self.bits.read_bits(3)? as usize + 3;
                    if all_lengths.len() + repeat > total_codes {
                        return Err(Error::InvalidCodeLengths(
                            "code length repeat overruns HLIT+HDIST",
                        ));
                    }
                    all_lengths.resize(all_lengths.len() + repeat, 0);
                }
                18 => {
                    let repeat = self.bits.read_bits(7)? as usize + 11;
                    if all_lengths.len() + repeat > total_codes {
                        return Err(Error::InvalidCodeLengths(
                            "code length repeat overruns HLIT+HDIST",
                        ));
                    }
                    all_lengths.resize(all_lengths.len() + repeat, 0);
                }
                _ => return Err(Error::InvalidHuffmanSymbol(sym)),
            }
        }

        let literal_lengths = &all_lengths[..hlit];
        let distance_lengths = &all_lengths[hlit..];

        let lit_decoder = HuffmanDecoder::from_code_lengths(literal_lengths)?;
        let dist_decoder = if distance_lengths.iter().all(|&l| l == 0) {
            None
        } else {
            Some(HuffmanDecoder::from_code_lengths(distance_lengths)?)
        };

        self.decode_symbols_with_optional_dist(&lit_decoder, dist_decoder.as_ref(), window, crc, out)
    }

    fn decode_symbols<W: Write>(
        &mut self,
        lit_decoder: &HuffmanDecoder,
        dist_decoder: &HuffmanDecoder,
        window: &mut WindowBuffer,
        crc: &mut RunningCrc32,
        out: &mut W,
    ) -> Result<()> {
        self.decode_symbols_with_optional_dist(lit_decoder, Some(dist_decoder), window, crc, out)
    }

    /// The symbol loop shared by fixed and dynamic blocks (RFC 1951 §3.2.5).
    fn decode_symbols_with_optional_dist<W: Write>(
        &mut self,
        lit_decoder: &HuffmanDecoder,
        dist_decoder: Option<&HuffmanDecoder>,
        window: &mut WindowBuffer,
        crc: &mut RunningCrc32,
        out: &mut W,
    ) -> Result<()> {
        loop {
            let sym = lit_decoder.decode(&mut self.bits)?;

            match sym {
                0..=255 => {
                    let byte = sym as u8;
                    window.append(byte);
                    crc.update(&[byte]);
                    out.write_all(&[byte])?;
                }
                256 => break,
                257..=285 => {
                    let len_idx = (sym - 257) as usize;
                    let (_, extra_bits) = LENGTH_TABLE[len_idx];
                    let extra = if extra_bits > 0 { self.bits.read_bits(extra_bits)? } else { 0 };
                    let length = decode_length(sym, extra).expect("sym validated to be 257..=285");

                    let dist_decoder = dist_decoder.ok_or(Error::MissingDistanceCode)?;
                    let dist_sym = dist_decoder.decode(&mut self.bits)?;
                    if dist_sym > 29 {
                        return Err(Error::InvalidDistanceCode(dist_sym));
                    }
                    let (_, dist_extra_bits) = DISTANCE_TABLE[dist_sym as usize];
                    let dist_extra =
                        if dist_extra_bits > 0 { self.bits.read_bits(dist_extra_bits)? } else { 0 };
                    let distance =
                        decode_distance(dist_sym, dist_extra).expect("dist_sym validated to be 0..=29");

                    let bytes = window.copy_back(distance, length)?;
                    crc.update(&bytes);
                    out.write_all(&bytes)?;
                }
                _ => return Err(Error::InvalidHuffmanSymbol(sym)),
            }
        }
        Ok(())
    }

    pub fn bytes_read(&self) -> u64 {
        self.bits.bytes_read()
    }

    pub fn into_inner(self) -> BitReader<R> {
        self.bits
    }

    /// Exposes the underlying bit reader so `gzip::MemberDecoder` can parse
    /// headers and trailers off the same stream, preserving its read-ahead
    /// buffer across member boundaries.
    pub(crate) fn bits_mut(&mut self) -> &mut BitReader<R> {
        &mut self.bits
    }
}
