//! `GraphArchiver` — renders snapshots and writes them as PNG files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use sg_grid::GridSnapshot;
use sg_sim::SimObserver;
use tracing::{debug, warn};

use crate::render::{RenderOptions, render_grid};
use crate::{OutputError, OutputResult};

/// Writes one PNG per snapshot into an explicit output directory.
///
/// File names are `<unix-seconds> - schelling step <i>.png`, or
/// `<unix-seconds> - schelling image.png` for an unnumbered image.  As a
/// [`SimObserver`] it archives every `on_snapshot`; errors are stored and
/// retrieved with [`take_error`](Self::take_error).
pub struct GraphArchiver {
    dir:        PathBuf,
    options:    RenderOptions,
    written:    Vec<PathBuf>,
    last_error: Option<OutputError>,
}

impl GraphArchiver {
    /// Create `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>, options: RenderOptions) -> OutputResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            options,
            written: Vec::new(),
            last_error: None,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Render `snapshot` and save it.  Returns the file path.
    pub fn archive(&mut self, step: Option<u64>, snapshot: &GridSnapshot) -> OutputResult<PathBuf> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64();
        let name = match step {
            Some(i) => format!("{stamp:.6} - schelling step {i}.png"),
            None => format!("{stamp:.6} - schelling image.png"),
        };
        let path = self.dir.join(name);
        render_grid(snapshot, &self.options).save(&path)?;
        debug!(path = %path.display(), "archived grid image");
        self.written.push(path.clone());
        Ok(path)
    }
}

impl SimObserver for GraphArchiver {
    fn on_snapshot(&mut self, step: u64, snapshot: &GridSnapshot) {
        if let Err(e) = self.archive(Some(step), snapshot) {
            warn!(step, error = %e, "failed to archive grid image");
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
