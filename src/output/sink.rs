use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use crate::model::summary::{BuildSummary, LineKey};

use super::overlay;

const OVERLAY_FILE: &str = "overlay.html";

/// Persists a build summary as per-category text files plus the combined
/// overlay page, all inside one output directory.
pub struct OutputSink {
    dir: PathBuf,
}

impl OutputSink {
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }

    pub fn write_summary(&self, summary: &BuildSummary) -> Result<(), OutputError> {
        // Keys without a line this run are blanked, so a category dropped
        // from the build never leaves a stale line on screen.
        for key in LineKey::ALL {
            self.write_file(key.file_name(), summary.line(key).unwrap_or(""))?;
        }

        let lines: Vec<&str> = summary.lines.iter().map(|(_, line)| line.as_str()).collect();
        self.write_file(OVERLAY_FILE, &overlay::render_overlay(&lines))
    }

    /// The no-active-game reset: blank every per-category file and put up
    /// the idle overlay.
    pub fn reset_outputs(&self) -> Result<(), OutputError> {
        for key in LineKey::ALL {
            self.write_file(key.file_name(), "")?;
        }
        self.write_file(OVERLAY_FILE, &overlay::render_idle_overlay())
    }

    fn write_file(&self, name: &str, content: &str) -> Result<(), OutputError> {
        let path = self.dir.join(name);
        fs::write(&path, content).map_err(|err| OutputError::WriteFailed(path, err))
    }
}

#[derive(Debug)]
pub enum OutputError {
    WriteFailed(PathBuf, io::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputError::WriteFailed(path, err) => {
                write!(f, "Unable to write output file {}: {}", path.display(), err)
            }
        }
    }
}
