//! Battle result history (load/save to disk as JSON).

use crate::battle::ports::ResultSink;
use crate::battle::result::BattleResult;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the default results file path (~/.battle-engine/results.json).
pub fn default_results_path() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".battle-engine").join("results.json"))
}

/// Append-only store of `BattleResult` records in a JSON array file.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the home directory.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::new(default_results_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored result. A missing file is an empty history;
    /// a corrupt one is an error.
    pub fn load_all(&self) -> io::Result<Vec<BattleResult>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Append one result and rewrite the file.
    pub fn append(&self, result: &BattleResult) -> io::Result<()> {
        let mut results = self.load_all()?;
        results.push(*result);

        // Ensure directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)?;

        debug!(path = %self.path.display(), count = results.len(), "Battle result saved");
        Ok(())
    }
}

impl ResultSink for ResultStore {
    fn record(&mut self, result: &BattleResult) -> io::Result<()> {
        self.append(result)
    }
}
