//! Configuration settings for the Game of Life simulation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub patterns: PatternConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Grid dimensions and run length are required; a file without them fails to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    pub steps: usize,
    #[serde(default)]
    pub boundary: BoundaryCondition,
    /// Initial pattern; `None` seeds the grid with the `random` generator defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedConfig>,
    /// Fixed RNG seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    /// Cells outside the grid count as dead
    #[default]
    Dead,
    /// Opposite edges are neighbours (torus)
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub pattern: String,
    #[serde(default)]
    pub args: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub refresh_interval_ms: u64,
    pub colourmap: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("patterns"),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 500,
            colourmap: "binary".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                rows: 100,
                cols: 100,
                steps: 500,
                boundary: BoundaryCondition::Dead,
                seed: Some(SeedConfig {
                    pattern: "acorn".to_string(),
                    args: vec![20, 40],
                }),
                rng_seed: None,
            },
            patterns: PatternConfig::default(),
            display: DisplayConfig::default(),
            output: OutputConfig::default(),
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
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

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
        if self.simulation.rows == 0 || self.simulation.cols == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.rows,
                self.simulation.cols
            );
        }

        if self.simulation.steps == 0 {
            anyhow::bail!("Number of steps must be positive");
        }

        if let Some(seed) = &self.simulation.seed {
            if seed.pattern.trim().is_empty() {
                anyhow::bail!("Seed pattern name cannot be empty");
            }
        }

        if self.display.refresh_interval_ms == 0 {
            anyhow::bail!("Refresh interval must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.simulation.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.simulation.cols = cols;
        }
        if let Some(steps) = cli_overrides.steps {
            self.simulation.steps = steps;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.simulation.seed = Some(SeedConfig {
                pattern: pattern.clone(),
                args: cli_overrides.args.clone(),
            });
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.simulation.rng_seed = Some(rng_seed);
        }
        if let Some(ref directory) = cli_overrides.pattern_dir {
            self.patterns.directory = directory.clone();
        }
        if let Some(interval) = cli_overrides.refresh_interval_ms {
            self.display.refresh_interval_ms = interval;
        }
        if let Some(ref path) = cli_overrides.final_state_file {
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
                self.output.format = OutputFormat::Json;
            }
            self.output.final_state_file = Some(path.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub steps: Option<usize>,
    pub pattern: Option<String>,
    pub args: Vec<usize>,
    pub rng_seed: Option<u64>,
    pub pattern_dir: Option<PathBuf>,
    pub refresh_interval_ms: Option<u64>,
    pub final_state_file: Option<PathBuf>,
}
