//! Conway's Game of Life transition rules

use super::Grid;
use rayon::prelude::*;

/// Computes generation t+1 from generation t.
///
/// The transition is a pure function: the input grid is read-only and the
/// result is a freshly allocated grid of the same size. Every cell depends
/// only on the immutable input snapshot, so rows are evaluated in parallel.
pub struct TransitionEngine;

impl TransitionEngine {
    /// Evolve the grid one generation forward
    pub fn next_generation(current: &Grid) -> Grid {
        let next_cells: Vec<bool> = (0..current.size)
            .into_par_iter()
            .flat_map(|row| {
                (0..current.size).into_par_iter().map(move |col| {
                    let neighbors = current.count_neighbors(row, col);
                    Self::next_cell(current.get(row, col), neighbors)
                })
            })
            .collect();

        Grid::from_flat(current.size, next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn advance(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::next_generation(&grid);
        }
        grid
    }

    /// Decide the next state of a single cell from its current state and
    /// live-neighbor count.
    ///
    /// Fewer than 2 neighbors kills a live cell, 2 or 3 sustain it, more than
    /// 3 kill it, and exactly 3 neighbors give birth to a dead cell. Every
    /// other combination is explicitly dead.
    pub fn next_cell(alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 2) | (true, 3) => true,
            (false, 3) => true,
            _ => false,
        }
    }
}
