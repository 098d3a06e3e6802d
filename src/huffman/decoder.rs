use crate::bits::BitReader;
use crate::error::{Error, Result};
use std::io::Read;

/// Canonical Huffman decoder, built from a vector of per-symbol code lengths
/// rather than frequency counts: RFC 1951's canonical assignment means the
/// lengths alone determine every code, so there is no tree to balance.
pub struct HuffmanDecoder {
    /// For each symbol, its code length (0 = not used)
    #[allow(dead_code)]
    code_lengths: Vec<u8>,
    /// Minimum code length
    #[allow(dead_code)]
    min_bits: u8,
    /// Maximum code length
    max_bits: u8,
    /// For each bit length, the starting code and starting index
    /// (first_code, first_symbol_index)
    bit_info: Vec<(u32, usize)>,
    /// Symbols sorted by code length, then by symbol value
    symbols: Vec<u16>,
}

impl HuffmanDecoder {
    /// Build from code lengths (for fixed and dynamic Huffman blocks)
    pub fn from_code_lengths(lengths: &[u8]) -> Result<Self> {
        if lengths.is_empty() {
            return Err(Error::InvalidCodeLengths("empty code length vector"));
        }

        let max_bits = *lengths.iter().max().unwrap_or(&0);
        if max_bits > 15 {
            return Err(Error::InvalidCodeLength(max_bits));
        }

        if max_bits == 0 {
            // All zero-length codes = empty table; valid as long as it is
            // never consulted (e.g. a dynamic block with no back-references).
            return Ok(Self {
                code_lengths: lengths.to_vec(),
                min_bits: 0,
                max_bits: 0,
                bit_info: vec![(0, 0); 16],
                symbols: vec![],
            });
        }

        // Count codes of each length
        let mut bl_count = [0u32; 16];
        for &len in lengths {
            if len > 0 {
                bl_count[len as usize] += 1;
            }
        }

        // Find min_bits
        let min_bits = (1..=15).find(|&i| bl_count[i] > 0).unwrap_or(1) as u8;

        // Compute first code for each bit length, rejecting an oversubscribed
        // set (more codes at some length than the Kraft inequality allows —
        // the assigned code range would overflow that length's bit width).
        let mut next_code = [0u32; 16];
        let mut code = 0u32;
        for bits in 1..=max_bits {
            code = (code + bl_count[bits as usize - 1]) << 1;
            if code + bl_count[bits as usize] > (1u32 << bits) {
                return Err(Error::InvalidCodeLengths("oversubscribed Huffman code"));
            }
            next_code[bits as usize] = code;
        }

        // Sort symbols by code length, then by symbol value
        let mut symbols: Vec<(u16, u8)> = lengths
            .iter()
            .enumerate()
            .filter(|(_, &len)| len > 0)
            .map(|(sym, &len)| (sym as u16, len))
            .collect();
        symbols.sort_by_key(|&(sym, len)| (len, sym));

        let sorted_symbols: Vec<u16> = symbols.iter().map(|&(sym, _)| sym).collect();

        // Build bit_info: for each bit length, store (first_code, first_symbol_index)
        let mut bit_info = vec![(0u32, 0usize); 16];
        let mut symbol_idx = 0;
        for bits in 1..=15 {
            bit_info[bits] = (next_code[bits], symbol_idx);
            symbol_idx += bl_count[bits] as usize;
        }

        Ok(Self {
            code_lengths: lengths.to_vec(),
            min_bits,
            max_bits,
            bit_info,
            symbols: sorted_symbols,
        })
    }

    /// Build fixed Huffman table for literal/length codes (RFC 1951 section 3.2.6)
    pub fn fixed_literal_length() -> Self {
        let lengths = super::tables::fixed_literal_lengths();
        Self::from_code_lengths(&lengths).unwrap()
    }

    /// Build fixed Huffman table for distance codes
    pub fn fixed_distance() -> Self {
        let lengths = super::tables::fixed_distance_lengths();
        Self::from_code_lengths(&lengths).unwrap()
    }

    /// Decode the next symbol from the bitstream.
    ///
    /// Reads one bit at a time and assembles the code MSB-first (the first
    /// bit read becomes the high bit), matching canonical-Huffman's
    /// left-to-right code assignment. Prefix codes are therefore never
    /// fetched through `BitReader::read_bits` in bulk.
    pub fn decode<R: Read>(&self, bits: &mut BitReader<R>) -> Result<u16> {
        if self.max_bits == 0 {
            return Err(Error::InvalidCodeLengths("decoder has no assigned symbols"));
        }

        let mut code = 0u32;
        for len in 1..=self.max_bits {
            code = (code << 1) | bits.read_bits(1)?;
            let (first_code, first_idx) = self.bit_info[len as usize];

            // Check if this code is valid for this length
            let count = if len < 15 {
                self.bit_info[len as usize + 1].1 - first_idx
            } else {
                self.symbols.len() - first_idx
            };

            if count > 0 && code >= first_code && code < first_code + count as u32 {
                let idx = first_idx + (code - first_code) as usize;
                return Ok(self.symbols[idx]);
            }
        }

        Err(Error::InvalidHuffmanSymbol(code as u16))
    }

    /// Check if this decoder is empty (no symbols)
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
