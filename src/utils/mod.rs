//! Display and formatting utilities

pub mod display;

pub use display::{Color, ColorOutput, GridRenderer, CLEAR_SCREEN};
