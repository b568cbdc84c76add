//! Initial-state generators: random fill and placed stencils

use super::io::parse_stencil_rows;
use super::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::OnceLock;
use thiserror::Error;

/// The Gosper glider gun, shipped as reference data rather than rebuilt in
/// code. 9 rows by 36 columns, 36 live cells.
const GLIDER_GUN_DATA: &str = include_str!("../../data/gosper_glider_gun.csv");

/// Requested anchor would place part of the stencil outside the grid.
///
/// Recoverable: interactive callers catch this and ask for new coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "anchor ({row}, {column}) places a {height}x{width} stencil outside a {size}x{size} grid"
)]
pub struct PlacementOutOfBounds {
    pub size: usize,
    pub row: usize,
    pub column: usize,
    pub height: usize,
    pub width: usize,
}

/// A fixed rectangular arrangement of cells stamped onto a grid at an anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stencil {
    pub height: usize,
    pub width: usize,
    cells: Vec<bool>,
}

impl Stencil {
    /// Build a stencil from rectangular row data
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        for row in &rows {
            assert_eq!(row.len(), width, "stencil rows must have equal length");
        }
        Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Cell value at stencil-relative coordinates
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    /// The 3x3 glider: 5 live cells drifting one cell down-right every
    /// four generations
    pub fn glider() -> &'static Stencil {
        static GLIDER: OnceLock<Stencil> = OnceLock::new();
        GLIDER.get_or_init(|| {
            Stencil::from_rows(vec![
                vec![false, true, false],
                vec![false, false, true],
                vec![true, true, true],
            ])
        })
    }

    /// The 9x36 Gosper glider gun, parsed once from the bundled dataset
    pub fn gosper_glider_gun() -> &'static Stencil {
        static GUN: OnceLock<Stencil> = OnceLock::new();
        GUN.get_or_init(|| {
            let rows = parse_stencil_rows(GLIDER_GUN_DATA)
                .expect("bundled glider gun dataset is malformed");
            Stencil::from_rows(rows)
        })
    }
}

impl Grid {
    /// Stamp a stencil onto this grid with its top-left corner at
    /// `(row, col)`
    ///
    /// Callers validate the anchor first; a stencil that does not fit panics
    /// via the out-of-bounds cell access.
    pub fn stamp(&mut self, stencil: &Stencil, row: usize, col: usize) {
        for r in 0..stencil.height {
            for c in 0..stencil.width {
                if stencil.get(r, c) {
                    self.set(row + r, col + c, true);
                }
            }
        }
    }
}

/// Built-in initial-state generators
pub struct PatternLibrary;

impl PatternLibrary {
    /// Each cell independently alive or dead with probability 1/2
    pub fn random_fill(size: usize) -> Grid {
        let mut rng = rand::thread_rng();
        let cells = (0..size * size).map(|_| rng.gen_bool(0.5)).collect();
        Grid::from_flat(size, cells)
    }

    /// Like [`random_fill`](Self::random_fill), but deterministic for a given
    /// seed so runs can be replayed
    pub fn random_fill_seeded(size: usize, seed: u64) -> Grid {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cells = (0..size * size).map(|_| rng.gen_bool(0.5)).collect();
        Grid::from_flat(size, cells)
    }

    /// Zero-filled grid with a glider stamped at `(row, column)`
    pub fn glider(size: usize, row: usize, column: usize) -> Result<Grid, PlacementOutOfBounds> {
        Self::place(Stencil::glider(), size, row, column)
    }

    /// Zero-filled grid with a Gosper glider gun stamped at `(row, column)`
    pub fn gosper_glider_gun(
        size: usize,
        row: usize,
        column: usize,
    ) -> Result<Grid, PlacementOutOfBounds> {
        Self::place(Stencil::gosper_glider_gun(), size, row, column)
    }

    fn place(
        stencil: &Stencil,
        size: usize,
        row: usize,
        column: usize,
    ) -> Result<Grid, PlacementOutOfBounds> {
        if row + stencil.height > size || column + stencil.width > size {
            return Err(PlacementOutOfBounds {
                size,
                row,
                column,
                height: stencil.height,
                width: stencil.width,
            });
        }

        let mut grid = Grid::new(size);
        grid.stamp(stencil, row, column);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_stencil() {
        let glider = Stencil::glider();
        assert_eq!(glider.height, 3);
        assert_eq!(glider.width, 3);
        assert_eq!(glider.cells.iter().filter(|&&c| c).count(), 5);
    }

    #[test]
    fn test_glider_placement() {
        let grid = PatternLibrary::glider(8, 2, 3).unwrap();
        assert_eq!(grid.size, 8);
        assert_eq!(
            grid.living_cells(),
            vec![(2, 4), (3, 5), (4, 3), (4, 4), (4, 5)]
        );
    }

    #[test]
    fn test_glider_placement_at_origin() {
        let grid = PatternLibrary::glider(5, 0, 0).unwrap();
        assert_eq!(
            grid.living_cells(),
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_glider_placement_out_of_bounds() {
        // On a 5x5 grid the last valid anchor row is 2
        let err = PatternLibrary::glider(5, 3, 0).unwrap_err();
        assert_eq!(err.size, 5);
        assert_eq!(err.row, 3);
        assert_eq!(err.height, 3);

        assert!(PatternLibrary::glider(5, 2, 2).is_ok());
        assert!(PatternLibrary::glider(5, 0, 3).is_err());
    }

    #[test]
    fn test_gun_stencil_shape() {
        let gun = Stencil::gosper_glider_gun();
        assert_eq!(gun.height, 9);
        assert_eq!(gun.width, 36);
        assert_eq!(gun.cells.iter().filter(|&&c| c).count(), 36);
    }

    #[test]
    fn test_gun_placement() {
        let grid = PatternLibrary::gosper_glider_gun(40, 1, 2).unwrap();
        assert_eq!(grid.living_count(), 36);

        // The gun's leftmost block sits at rows 4-5 of the stencil
        assert!(grid.get(5, 2));
        assert!(grid.get(6, 2));
    }

    #[test]
    fn test_gun_placement_out_of_bounds() {
        // A 20x20 grid cannot hold the 36-column stencil at all
        assert!(PatternLibrary::gosper_glider_gun(20, 0, 0).is_err());

        // 40x40 holds it only while row <= 31 and column <= 4
        assert!(PatternLibrary::gosper_glider_gun(40, 31, 4).is_ok());
        assert!(PatternLibrary::gosper_glider_gun(40, 32, 0).is_err());
        assert!(PatternLibrary::gosper_glider_gun(40, 0, 5).is_err());
    }

    #[test]
    fn test_random_fill_dimensions() {
        let grid = PatternLibrary::random_fill(12);
        assert_eq!(grid.size, 12);
        assert_eq!(grid.cells.len(), 144);
    }

    #[test]
    fn test_seeded_random_fill_is_deterministic() {
        let a = PatternLibrary::random_fill_seeded(10, 42);
        let b = PatternLibrary::random_fill_seeded(10, 42);
        let c = PatternLibrary::random_fill_seeded(10, 43);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
