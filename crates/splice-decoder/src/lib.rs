#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod pattern;
pub mod track_reader;

pub use decoder::{FrameLayout, SpliceDecoder};
pub use error::{DecodeError, LoadError};
pub use pattern::{Pattern, Track};
