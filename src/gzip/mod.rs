pub mod crc;
pub mod header;
pub mod member;

pub use crc::RunningCrc32;
pub use header::{GzipHeader, GzipTrailer};
pub use member::MemberDecoder;
