//! Grid representation and utilities for Game of Life

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single generation of the simulation: a square matrix of cells.
///
/// Grids are treated as immutable snapshots once handed out — evolving a grid
/// always allocates a fresh one. Cells outside the grid are permanently dead
/// when counting neighbors (no wraparound).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(size: usize) -> Self {
        Self::filled(size, false)
    }

    /// Create a grid with every cell set to `alive`
    pub fn filled(size: usize, alive: bool) -> Self {
        Self {
            size,
            cells: vec![alive; size * size],
        }
    }

    /// Create a grid from row-major cell data
    ///
    /// Panics if `cells.len() != size * size`; call sites construct the data
    /// to match.
    pub fn from_flat(size: usize, cells: Vec<bool>) -> Self {
        assert_eq!(
            cells.len(),
            size * size,
            "expected {} cells for a {}x{} grid, got {}",
            size * size,
            size,
            size,
            cells.len()
        );
        Self { size, cells }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell value at coordinates
    ///
    /// Out-of-bounds access is a programming error and panics.
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[self.index(row, col)]
    }

    /// Set cell value at coordinates
    ///
    /// Only used while building an initial state; published generations are
    /// never mutated. Panics on out-of-bounds coordinates.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Count living neighbors for a cell (Moore neighborhood, dead boundary)
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1].iter() {
            for dc in [-1, 0, 1].iter() {
                if *dr == 0 && *dc == 0 {
                    continue; // Skip the cell itself
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if self.is_neighbor_alive(r, c) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Check if a neighbor at given coordinates is alive; everything outside
    /// the grid counts as dead
    fn is_neighbor_alive(&self, row: isize, col: isize) -> bool {
        if row >= 0 && row < self.size as isize && col >= 0 && col < self.size as isize {
            self.cells[self.index(row as usize, col as usize)]
        } else {
            false
        }
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = if self.get(row, col) { '█' } else { '·' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
