#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod render_json;
pub mod render_text;
pub mod renderer;

pub use config::{OutputMode, RenderConfig};
pub use error::RenderError;
pub use renderer::{DefaultRenderer, PatternRenderer};

#[cfg(test)]
mod test_support;
