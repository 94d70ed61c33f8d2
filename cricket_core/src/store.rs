//! # Record Store
//!
//! Whole-file persistence for the catalog:
//! - **Load fresh**: every operation reads the complete file, there is no cache
//! - **Atomic saves**: write to a `.tmp` sibling, sync, rename over the original
//! - **Name lookup**: records are found by linear scan on `name`
//!
//! ## File Format
//!
//! The catalog is a JSON array of [`Cricket`] objects with no version header.
//! A missing file is an empty catalog.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cricket_core::record::Cricket;
//! use cricket_core::store::{append_cricket, load_crickets, move_cricket, Direction};
//! use std::path::Path;
//!
//! let path = Path::new("crickets.json");
//! append_cricket(path, Cricket::new("A", "B", "5", "中"))?;
//! move_cricket(path, "A", Direction::Up)?;
//! let crickets = load_crickets(path)?;
//! # Ok::<(), cricket_core::errors::CatalogError>(())
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::{CatalogError, CatalogResult};
use crate::record::Cricket;

/// Direction for reordering a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Load every record from the catalog file.
///
/// # Returns
///
/// * `Ok(vec![])` - The file does not exist yet
/// * `Ok(crickets)` - Records in file order
/// * `Err(CatalogError::Parse)` - The file is not a JSON record list
/// * `Err(CatalogError::FileError)` - I/O error
pub fn load_crickets(path: &Path) -> CatalogResult<Vec<Cricket>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "catalog file missing, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(CatalogError::file_error("read", path.display().to_string(), e.to_string()));
        }
    };

    let crickets: Vec<Cricket> = serde_json::from_str(&contents).map_err(|e| {
        warn!(path = %path.display(), error = %e, "catalog file is not valid JSON");
        CatalogError::parse(path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), count = crickets.len(), "loaded catalog");
    Ok(crickets)
}

/// Save the full record list with atomic write semantics.
///
/// The save process:
/// 1. Serialize the list to JSON
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk (fsync)
/// 4. Rename over the target
pub fn save_crickets(crickets: &[Cricket], path: &Path) -> CatalogResult<()> {
    let json = serde_json::to_string(crickets).map_err(|e| CatalogError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = tmp_path_for(path);

    let written = write_tmp_file(&tmp_path, json.as_bytes()).and_then(|()| {
        fs::rename(&tmp_path, path).map_err(|e| {
            CatalogError::file_error("rename to final", path.display().to_string(), e.to_string())
        })
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    debug!(path = %path.display(), count = crickets.len(), "saved catalog");
    Ok(())
}

/// Create, fill and fsync the temp file. The handle is closed on return.
fn write_tmp_file(tmp_path: &Path, bytes: &[u8]) -> CatalogResult<()> {
    let mut tmp_file = File::create(tmp_path).map_err(|e| {
        CatalogError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CatalogError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CatalogError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })
}

/// Append one record to the end of the catalog.
pub fn append_cricket(path: &Path, cricket: Cricket) -> CatalogResult<()> {
    let mut crickets = load_crickets(path)?;
    info!(name = %cricket.name, "adding cricket");
    crickets.push(cricket);
    save_crickets(&crickets, path)
}

/// Replace the first record named `original_name` with `cricket`, keeping its
/// position. The file is rewritten either way.
///
/// Returns `true` if a record was replaced.
pub fn replace_cricket(path: &Path, original_name: &str, cricket: Cricket) -> CatalogResult<bool> {
    let mut crickets = load_crickets(path)?;
    let replaced = replace_by_name(&mut crickets, original_name, cricket);
    if replaced {
        info!(name = %original_name, "updated cricket");
    } else {
        debug!(name = %original_name, "no cricket to update");
    }
    save_crickets(&crickets, path)?;
    Ok(replaced)
}

/// Remove every record named `name`.
///
/// Returns the number of records removed. A missing catalog file stays missing.
pub fn remove_cricket(path: &Path, name: &str) -> CatalogResult<usize> {
    if !path.exists() {
        return Ok(0);
    }
    let mut crickets = load_crickets(path)?;
    let removed = remove_by_name(&mut crickets, name);
    info!(name = %name, removed, "removed cricket");
    save_crickets(&crickets, path)?;
    Ok(removed)
}

/// Swap the first record named `name` with its neighbour in `direction`.
///
/// Returns `true` if the order changed. Nothing is written when the name is
/// absent.
pub fn move_cricket(path: &Path, name: &str, direction: Direction) -> CatalogResult<bool> {
    let mut crickets = load_crickets(path)?;
    if !crickets.iter().any(|c| c.name == name) {
        debug!(name = %name, "no cricket to move");
        return Ok(false);
    }
    let moved = move_by_name(&mut crickets, name, direction);
    if moved {
        info!(name = %name, ?direction, "moved cricket");
    }
    save_crickets(&crickets, path)?;
    Ok(moved)
}

/// In-memory replace used by [`replace_cricket`].
pub fn replace_by_name(crickets: &mut [Cricket], original_name: &str, cricket: Cricket) -> bool {
    match crickets.iter_mut().find(|c| c.name == original_name) {
        Some(slot) => {
            *slot = cricket;
            true
        }
        None => false,
    }
}

/// In-memory removal used by [`remove_cricket`]. Removes all matches.
pub fn remove_by_name(crickets: &mut Vec<Cricket>, name: &str) -> usize {
    let before = crickets.len();
    crickets.retain(|c| c.name != name);
    before - crickets.len()
}

/// In-memory reorder used by [`move_cricket`]. No-op at the boundaries.
pub fn move_by_name(crickets: &mut [Cricket], name: &str, direction: Direction) -> bool {
    let Some(index) = crickets.iter().position(|c| c.name == name) else {
        return false;
    };

    match direction {
        Direction::Up if index > 0 => {
            crickets.swap(index, index - 1);
            true
        }
        Direction::Down if index + 1 < crickets.len() => {
            crickets.swap(index, index + 1);
            true
        }
        _ => false,
    }
}

/// Temp file path for atomic saves (`crickets.json` -> `crickets.json.tmp`)
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
