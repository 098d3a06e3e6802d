pub mod blocks;
pub mod tables;
pub mod window;

pub use blocks::BlockDecoder;
pub use window::WindowBuffer;
