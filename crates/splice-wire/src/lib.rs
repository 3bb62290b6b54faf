#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod header;
pub mod primitives;

pub use cursor::ByteCursor;
pub use error::WireError;
