//! Best-score persistence
//!
//! A single integer stored as a small JSON record. Loading falls back to 0 on
//! any failure; saving is best-effort. The record is a convenience value, so
//! the caller logs and ignores errors instead of propagating them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default backing file, next to the executable's working directory
pub const BEST_FILE: &str = "best_score.json";

/// On-disk shape: `{ "best": <integer> }`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct BestRecord {
    best: u32,
}

/// Default path for the best-score record
pub fn default_path() -> PathBuf {
    PathBuf::from(BEST_FILE)
}

/// Load the stored best score
///
/// A missing file, unreadable content, or a malformed record all yield 0;
/// this never surfaces an error.
pub fn load_best(path: &Path) -> u32 {
    match try_load(path) {
        Ok(best) => {
            log::info!("loaded best score {} from {}", best, path.display());
            best
        }
        Err(err) => {
            log::debug!("no usable best score at {}: {}", path.display(), err);
            0
        }
    }
}

fn try_load(path: &Path) -> io::Result<u32> {
    let contents = fs::read_to_string(path)?;
    let record: BestRecord = serde_json::from_str(&contents)?;
    Ok(record.best)
}

/// Write the best score record
///
/// Returns the I/O error for the caller to log and discard; a failed save is
/// deliberately not retried.
pub fn save_best(path: &Path, best: u32) -> io::Result<()> {
    let json = serde_json::to_string(&BestRecord { best })?;
    fs::write(path, json)
}
