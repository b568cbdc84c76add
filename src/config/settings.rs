//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generated grids must be larger than this; custom layouts are exempt
pub const MIN_GRID_SIZE: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub pattern: PatternConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub grid_size: usize,
    pub generations: usize,
    pub frame_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    pub kind: PatternKind,
    pub row: usize,
    pub column: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Random,
    Glider,
    GosperGliderGun,
    Custom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub custom_layout_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_snapshots: bool,
    pub snapshot_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                grid_size: 25,
                generations: 50,
                frame_delay_ms: 100,
            },
            pattern: PatternConfig {
                kind: PatternKind::Random,
                row: 0,
                column: 0,
                seed: None,
            },
            input: InputConfig {
                custom_layout_file: PathBuf::from("data/custom_input.csv"),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_snapshots: false,
                snapshot_directory: PathBuf::from("output/snapshots"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.pattern.kind != PatternKind::Custom && self.simulation.grid_size < MIN_GRID_SIZE {
            anyhow::bail!(
                "Grid size must be greater than 3, got {}",
                self.simulation.grid_size
            );
        }

        if self.pattern.kind == PatternKind::Custom && !self.input.custom_layout_file.exists() {
            anyhow::bail!(
                "Custom layout file does not exist: {}",
                self.input.custom_layout_file.display()
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(kind) = cli_overrides.pattern {
            self.pattern.kind = kind;
        }
        if let Some(grid_size) = cli_overrides.grid_size {
            self.simulation.grid_size = grid_size;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(row) = cli_overrides.row {
            self.pattern.row = row;
        }
        if let Some(column) = cli_overrides.column {
            self.pattern.column = column;
        }
        if let Some(seed) = cli_overrides.seed {
            self.pattern.seed = Some(seed);
        }
        if let Some(delay) = cli_overrides.frame_delay_ms {
            self.simulation.frame_delay_ms = delay;
        }
        if let Some(ref layout_file) = cli_overrides.custom_layout_file {
            self.input.custom_layout_file = layout_file.clone();
        }
        if let Some(ref snapshot_dir) = cli_overrides.snapshot_directory {
            self.output.save_snapshots = true;
            self.output.snapshot_directory = snapshot_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub pattern: Option<PatternKind>,
    pub grid_size: Option<usize>,
    pub generations: Option<usize>,
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub seed: Option<u64>,
    pub frame_delay_ms: Option<u64>,
    pub custom_layout_file: Option<PathBuf>,
    pub snapshot_directory: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_size_floor_for_generated_patterns() {
        let mut settings = Settings::default();
        settings.simulation.grid_size = 3;
        assert!(settings.validate().is_err());

        settings.simulation.grid_size = 4;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_no_size_floor_for_custom_layouts() {
        let temp_dir = tempdir().unwrap();
        let layout = temp_dir.path().join("layout.csv");
        std::fs::write(&layout, "1,0\n0,1\n").unwrap();

        let mut settings = Settings::default();
        settings.pattern.kind = PatternKind::Custom;
        settings.input.custom_layout_file = layout;
        settings.simulation.grid_size = 2;

        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_custom_layout_fails_validation() {
        let mut settings = Settings::default();
        settings.pattern.kind = PatternKind::Custom;
        settings.input.custom_layout_file = PathBuf::from("/nonexistent/layout.csv");

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.simulation.grid_size = 30;
        settings.pattern.kind = PatternKind::Glider;
        settings.pattern.row = 5;

        settings.to_file(&path).unwrap();
        let reloaded = Settings::from_file(&path).unwrap();

        assert_eq!(reloaded.simulation.grid_size, 30);
        assert_eq!(reloaded.pattern.kind, PatternKind::Glider);
        assert_eq!(reloaded.pattern.row, 5);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            pattern: Some(PatternKind::GosperGliderGun),
            grid_size: Some(50),
            generations: Some(10),
            seed: Some(7),
            ..Default::default()
        };

        settings.merge_with_cli(&overrides);

        assert_eq!(settings.pattern.kind, PatternKind::GosperGliderGun);
        assert_eq!(settings.simulation.grid_size, 50);
        assert_eq!(settings.simulation.generations, 10);
        assert_eq!(settings.pattern.seed, Some(7));
        // Untouched fields keep their defaults
        assert_eq!(settings.simulation.frame_delay_ms, 100);
    }
}
