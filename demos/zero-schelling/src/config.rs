//! Run configuration: model parameters plus where and how to write output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sg_core::ModelConfig;
use sg_output::RenderOptions;

/// Everything a run needs, as loaded from TOML.  Missing keys take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub model:  ModelConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for CSV files and archived images.
    pub dir:       PathBuf,
    /// Write `step_summaries.csv` and `final_grid.csv`.
    pub csv:       bool,
    pub cell_px:   u32,
    pub show_grid: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir:       PathBuf::from("output"),
            csv:       false,
            cell_px:   20,
            show_grid: false,
        }
    }
}

impl OutputConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            cell_px:   self.cell_px,
            show_grid: self.show_grid,
        }
    }
}

impl RunConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parsing run configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = RunConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, RunConfig::default());
        assert_eq!(cfg.model.size, 25);
        assert_eq!(cfg.output.dir, PathBuf::from("output"));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = RunConfig::from_toml_str(
            "[model]\nsize = 10\nn_agents = 30\n\n[output]\ncsv = true\n",
        )
        .unwrap();
        assert_eq!(cfg.model.size, 10);
        assert_eq!(cfg.model.n_agents, 30);
        assert_eq!(cfg.model.threshold, 1);
        assert!(cfg.output.csv);
        assert_eq!(cfg.output.cell_px, 20);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(RunConfig::from_toml_str("[model\nsize = ").is_err());
        assert!(RunConfig::from_toml_str("[model]\nsize = \"big\"").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        fs::write(&path, "[model]\nseed = 3\ngraphs = true\n").unwrap();
        let cfg = RunConfig::load(&path).unwrap();
        assert_eq!(cfg.model.seed, 3);
        assert!(cfg.model.graphs);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(RunConfig::load(Path::new("/nonexistent/run.toml")).is_err());
    }

    #[test]
    fn bundled_example_parses() {
        let cfg = RunConfig::from_toml_str(include_str!("../schelling.toml")).unwrap();
        assert!(cfg.model.validate().is_ok());
        assert!(cfg.output.csv);
    }
}
