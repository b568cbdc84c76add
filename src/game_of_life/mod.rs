//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;

pub use grid::Grid;
pub use io::{load_custom_layout, parse_custom_layout, save_snapshot, LoadError};
pub use patterns::{PatternLibrary, PlacementOutOfBounds, Stencil};
pub use rules::TransitionEngine;
