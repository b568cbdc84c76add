//! Conway's Game of Life simulator
//!
//! This library provides the simulation core: square boolean grids, the
//! built-in initial patterns (random fill, glider, Gosper glider gun), a
//! loader for custom layouts, and the generation-to-generation transition
//! rule with a fixed dead boundary.

pub mod config;
pub mod game_of_life;
pub mod utils;

pub use config::{PatternKind, Settings};
pub use game_of_life::{Grid, PatternLibrary, TransitionEngine};

use anyhow::{Context, Result};

/// Build the initial grid described by the settings
///
/// Placement errors for the glider and gun patterns are recoverable and kept
/// downcastable for interactive callers; custom-layout failures are fatal and
/// expected to end the run.
pub fn initial_grid(settings: &Settings) -> Result<Grid> {
    let size = settings.simulation.grid_size;
    let pattern = &settings.pattern;

    let grid = match pattern.kind {
        PatternKind::Random => match pattern.seed {
            Some(seed) => PatternLibrary::random_fill_seeded(size, seed),
            None => PatternLibrary::random_fill(size),
        },
        PatternKind::Glider => PatternLibrary::glider(size, pattern.row, pattern.column)?,
        PatternKind::GosperGliderGun => {
            PatternLibrary::gosper_glider_gun(size, pattern.row, pattern.column)?
        }
        PatternKind::Custom => {
            game_of_life::load_custom_layout(&settings.input.custom_layout_file).with_context(
                || {
                    format!(
                        "Failed to load custom layout from {}",
                        settings.input.custom_layout_file.display()
                    )
                },
            )?
        }
    };

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_of_life::PlacementOutOfBounds;

    #[test]
    fn test_initial_grid_glider() {
        let mut settings = Settings::default();
        settings.pattern.kind = PatternKind::Glider;
        settings.pattern.row = 2;
        settings.pattern.column = 2;
        settings.simulation.grid_size = 10;

        let grid = initial_grid(&settings).unwrap();
        assert_eq!(grid.size, 10);
        assert_eq!(grid.living_count(), 5);
    }

    #[test]
    fn test_initial_grid_seeded_random() {
        let mut settings = Settings::default();
        settings.pattern.seed = Some(99);
        settings.simulation.grid_size = 8;

        let a = initial_grid(&settings).unwrap();
        let b = initial_grid(&settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_placement_error_is_downcastable() {
        let mut settings = Settings::default();
        settings.pattern.kind = PatternKind::Glider;
        settings.pattern.row = 9;
        settings.simulation.grid_size = 10;

        let err = initial_grid(&settings).unwrap_err();
        assert!(err.downcast_ref::<PlacementOutOfBounds>().is_some());
    }
}
