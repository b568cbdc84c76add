//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, PatternConfig, PatternKind, Settings,
    SimulationConfig, MIN_GRID_SIZE,
};
