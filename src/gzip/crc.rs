/// Running CRC-32 (reflected, polynomial 0xEDB88320) over the bytes of a
/// single gzip member's decompressed output.
///
/// Wraps `crc32fast::Hasher` rather than hand-rolling a lookup table: the
/// donor codebase already depends on `crc32fast` for exactly this checksum
/// (there for BGZF block footers, here for gzip member trailers).
#[derive(Default)]
pub struct RunningCrc32 {
    hasher: crc32fast::Hasher,
}

impl RunningCrc32 {
    pub fn new() -> Self {
        Self { hasher: crc32fast::Hasher::new() }
    }

    #[inline]
    pub fn update(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    pub fn finalize(self) -> u32 {
        self.hasher.finalize()
    }
}
