//! Output helpers

pub mod display;

pub use display::{Color, ColorOutput, FrameRenderer, GridFormatter, Palette, TerminalRenderer};
