#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod preamble;
pub mod primitives;
pub mod varint;

pub use cursor::Cursor;
pub use error::WireError;
pub use preamble::Preamble;
pub use primitives::Timestamp;
