//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_summaries.csv`
//! - `final_grid.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{GridCellRow, OutputResult, StepSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    grid:      Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or create) the two CSV files in it, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(["step", "happy", "total", "moved", "no_vacancy"])?;

        let mut grid = Writer::from_path(dir.join("final_grid.csv"))?;
        grid.write_record(["row", "col", "group", "agent_id", "agent_uid"])?;

        Ok(Self {
            summaries,
            grid,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.happy.to_string(),
            row.total.to_string(),
            row.moved.to_string(),
            row.no_vacancy.to_string(),
        ])?;
        Ok(())
    }

    fn write_final_grid(&mut self, rows: &[GridCellRow]) -> OutputResult<()> {
        for row in rows {
            self.grid.write_record(&[
                row.row.to_string(),
                row.col.to_string(),
                row.group.to_string(),
                row.agent_id.to_string(),
                row.agent_uid.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.grid.flush()?;
        Ok(())
    }
}
