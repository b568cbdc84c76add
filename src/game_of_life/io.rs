//! Loading custom layouts and persisting grid snapshots
//!
//! The on-disk format is one line per grid row, cells as comma-delimited
//! `0`/`1` tokens. Malformed custom input is fatal: the errors here are meant
//! to propagate out of `main` and end the run rather than fall back to a
//! guessed grid.

use super::Grid;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a custom layout could not be turned into a grid
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("layout is not square: {rows} rows by {cols} columns")]
    ShapeMismatch { rows: usize, cols: usize },

    #[error("invalid token '{token}' at row {row}, column {col}: expected 0 or 1")]
    InvalidToken {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("layout contains no rows")]
    Empty,

    #[error("cannot read layout file {}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse delimited `0`/`1` rows into rectangular cell data
///
/// Rejects ragged rows and non-binary tokens but places no constraint on the
/// overall shape; used for both square layouts and the bundled gun stencil.
pub(crate) fn parse_stencil_rows(content: &str) -> Result<Vec<Vec<bool>>, LoadError> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut rows: Vec<Vec<bool>> = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        let mut row = Vec::new();
        for (col_idx, token) in line.split(',').map(str::trim).enumerate() {
            match token {
                "0" => row.push(false),
                "1" => row.push(true),
                _ => {
                    return Err(LoadError::InvalidToken {
                        row: row_idx,
                        col: col_idx,
                        token: token.to_string(),
                    })
                }
            }
        }
        if row_idx > 0 && row.len() != rows[0].len() {
            return Err(LoadError::ShapeMismatch {
                rows: lines.len(),
                cols: row.len(),
            });
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Parse a custom layout, which must be square
///
/// Unlike the generated patterns, a custom layout may be any positive square
/// size; the interactive layer's size floor does not apply here.
pub fn parse_custom_layout(content: &str) -> Result<Grid, LoadError> {
    let rows = parse_stencil_rows(content)?;

    let height = rows.len();
    let width = rows[0].len();
    if height != width {
        return Err(LoadError::ShapeMismatch {
            rows: height,
            cols: width,
        });
    }

    let cells = rows.into_iter().flatten().collect();
    Ok(Grid::from_flat(height, cells))
}

/// Load a custom layout from a file
pub fn load_custom_layout<P: AsRef<Path>>(path: P) -> Result<Grid, LoadError> {
    let content =
        std::fs::read_to_string(&path).map_err(|source| LoadError::Unavailable {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
    parse_custom_layout(&content)
}

/// Render a grid in the delimited on-disk format
pub fn grid_to_delimited(grid: &Grid) -> String {
    let mut output = String::with_capacity(grid.size * (2 * grid.size + 1));
    for row in 0..grid.size {
        let line = (0..grid.size)
            .map(|col| if grid.get(row, col) { "1" } else { "0" })
            .join(",");
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Write a grid snapshot as delimited rows
pub fn save_snapshot<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid_to_delimited(grid))
        .with_context(|| format!("Failed to write snapshot: {}", path.as_ref().display()))?;

    Ok(())
}

/// Write a grid snapshot as JSON
pub fn save_snapshot_json<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(grid).context("Failed to serialize snapshot")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write snapshot: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create an example custom layout for new users
pub fn create_example_layout<P: AsRef<Path>>(path: P) -> Result<()> {
    // A 6x6 layout holding a blinker and a block
    let content = "\
0,0,0,0,0,0
0,1,0,0,0,0
0,1,0,0,1,1
0,1,0,0,1,1
0,0,0,0,0,0
0,0,0,0,0,0
";

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write example layout: {}", path.as_ref().display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_custom_layout() {
        let content = "0,1,0\n1,0,1\n0,1,0\n";
        let grid = parse_custom_layout(content).unwrap();

        assert_eq!(grid.size, 3);
        assert_eq!(grid.living_count(), 4);
        assert!(grid.get(0, 1));
        assert!(grid.get(1, 0));
        assert!(grid.get(1, 2));
        assert!(grid.get(2, 1));
    }

    #[test]
    fn test_non_square_layout_is_rejected() {
        let content = "0,1,0\n1,0,1\n0,1,0\n1,1,1\n";
        let err = parse_custom_layout(content).unwrap_err();

        match err {
            LoadError::ShapeMismatch { rows, cols } => {
                assert_eq!((rows, cols), (4, 3));
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let content = "0,1,0\n1,0\n0,1,0\n";
        assert!(matches!(
            parse_custom_layout(content),
            Err(LoadError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_non_binary_token_is_rejected() {
        let content = "0,1,0\n1,2,1\n0,1,0\n";
        let err = parse_custom_layout(content).unwrap_err();

        match err {
            LoadError::InvalidToken { row, col, token } => {
                assert_eq!((row, col), (1, 1));
                assert_eq!(token, "2");
            }
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert!(matches!(parse_custom_layout(""), Err(LoadError::Empty)));
        assert!(matches!(parse_custom_layout("\n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_small_custom_layout_is_allowed() {
        // Generated grids require size > 3, custom layouts do not
        let grid = parse_custom_layout("1\n").unwrap();
        assert_eq!(grid.size, 1);
        assert!(grid.get(0, 0));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = load_custom_layout("/nonexistent/layout.csv").unwrap_err();
        assert!(matches!(err, LoadError::Unavailable { .. }));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("snapshots/generation_000.csv");

        let original = parse_custom_layout("0,1,0\n0,1,0\n0,1,0\n").unwrap();
        save_snapshot(&original, &path).unwrap();

        let reloaded = load_custom_layout(&path).unwrap();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn test_json_snapshot() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("generation_000.json");

        let grid = parse_custom_layout("1,0\n0,1\n").unwrap();
        save_snapshot_json(&grid, &path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let reloaded: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, reloaded);
    }

    #[test]
    fn test_example_layout_parses() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("custom_input.csv");

        create_example_layout(&path).unwrap();
        let grid = load_custom_layout(&path).unwrap();
        assert_eq!(grid.size, 6);
        assert_eq!(grid.living_count(), 7);
    }
}
