//! zero-schelling — command-line driver for the Schelling segregation model.
//!
//! Parameters come from an optional TOML file (`--config`) and are then
//! overridden by individual flags.  The run prints one summary line to
//! stdout; logs go to stderr, filtered by `RUST_LOG` (default `info`).
//!
//! ```text
//! zero-schelling --size 40 --agents 1000 --threshold 3 --csv --out ./output
//! zero-schelling --config schelling.toml --graphs
//! zero-schelling --test
//! ```

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sg_agent::Agent;
use sg_core::ModelConfig;
use sg_output::{CsvWriter, GraphArchiver, SimOutputObserver};
use sg_sim::{ModelBuilder, Tee};

use config::RunConfig;

#[derive(Parser, Debug)]
#[command(name = "zero-schelling")]
#[command(about = "Schelling segregation model on a square grid")]
struct Args {
    /// Print a default agent and a default model, then exit
    #[arg(short = 'f', long)]
    test: bool,

    /// TOML run configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length
    #[arg(long)]
    size: Option<usize>,

    /// Number of agents, split evenly between the two groups
    #[arg(long)]
    agents: Option<usize>,

    /// Minimum number of same-group neighbors for an agent to be happy
    #[arg(long)]
    threshold: Option<u32>,

    /// Maximum number of steps
    #[arg(long)]
    itermax: Option<u64>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Archive a PNG of the grid after every step
    #[arg(long)]
    graphs: bool,

    /// Output directory for CSV files and images
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write step summaries and the final grid as CSV
    #[arg(long)]
    csv: bool,

    /// Print the final grid as text
    #[arg(long)]
    show: bool,
}

impl Args {
    fn apply(&self, run: &mut RunConfig) {
        let model = &mut run.model;
        if let Some(size) = self.size {
            model.size = size;
        }
        if let Some(n) = self.agents {
            model.n_agents = n;
        }
        if let Some(t) = self.threshold {
            model.threshold = t;
        }
        if let Some(n) = self.itermax {
            model.itermax = n;
        }
        if let Some(seed) = self.seed {
            model.seed = seed;
        }
        model.graphs |= self.graphs;

        if let Some(dir) = &self.out {
            run.output.dir = dir.clone();
        }
        run.output.csv |= self.csv;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if args.test {
        println!("{}", Agent::default());
        let model = ModelBuilder::new(ModelConfig::default())
            .build()
            .context("building default model")?;
        println!("{model}");
        return Ok(());
    }

    let mut run = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    args.apply(&mut run);

    let mut model = ModelBuilder::new(run.model.clone())
        .build()
        .context("building model")?;
    info!(seed = run.model.seed, happy = model.n_happy(), "model initialized");

    let csv = if run.output.csv {
        let writer = CsvWriter::new(&run.output.dir)
            .with_context(|| format!("creating CSV output in {}", run.output.dir.display()))?;
        Some(SimOutputObserver::new(writer))
    } else {
        None
    };
    let archiver = if run.model.graphs {
        let archiver = GraphArchiver::new(&run.output.dir, run.output.render_options())
            .with_context(|| format!("creating image output in {}", run.output.dir.display()))?;
        Some(archiver)
    } else {
        None
    };

    let mut observer = Tee::new(csv, archiver);
    let report = model.run(&mut observer)?;
    let (csv, archiver) = observer.into_inner();

    if let Some(mut obs) = csv {
        if let Some(e) = obs.take_error() {
            bail!("CSV output failed: {e}");
        }
    }
    if let Some(mut archiver) = archiver {
        if let Some(e) = archiver.take_error() {
            bail!("image archive failed: {e}");
        }
        archiver.archive(None, &model.grid_snapshot())?;
        info!(images = archiver.written().len(), dir = %archiver.dir().display(), "images archived");
    }

    println!("{report}");
    if args.show {
        print!("{}", model.grid_snapshot());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let mut run = RunConfig::from_toml_str("[model]\nsize = 10\nseed = 1\n").unwrap();
        let args = Args::parse_from(["zero-schelling", "--seed", "9", "--csv", "--out", "/tmp/x"]);
        args.apply(&mut run);
        assert_eq!(run.model.size, 10);
        assert_eq!(run.model.seed, 9);
        assert!(run.output.csv);
        assert_eq!(run.output.dir, PathBuf::from("/tmp/x"));
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let mut run = RunConfig::from_toml_str("[model]\ngraphs = true\n[output]\ncsv = true\n").unwrap();
        Args::parse_from(["zero-schelling"]).apply(&mut run);
        assert!(run.model.graphs);
        assert!(run.output.csv);
        assert_eq!(run.model, ModelConfig { graphs: true, ..ModelConfig::default() });
    }

    #[test]
    fn short_test_flag() {
        assert!(Args::parse_from(["zero-schelling", "-f"]).test);
    }
}
