//! Locating block-storage files on disk.
//!
//! A node writes its block store as a numbered series — `blk00000.dat`,
//! `blk00001.dat`, … — in a single directory. Name order is write order,
//! which is what the remainder carry between files depends on.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Resolve the input path to an ordered list of `.dat` files.
///
/// A file path passes through as a single-element list. A directory
/// yields its `blk*.dat` children sorted by name.
///
/// # Errors
///
/// Fails when the path cannot be read, or when a directory contains no
/// matching files.
pub fn dat_files(path: &Path) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(path).with_context(|| format!("cannot read {}", path.display()))?;
    if meta.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut matches: Vec<PathBuf> = fs::read_dir(path)
        .with_context(|| format!("cannot read directory {}", path.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| is_blk_dat(p))
        .collect();
    matches.sort();

    if matches.is_empty() {
        bail!("no blk*.dat files in {}", path.display());
    }
    Ok(matches)
}

fn is_blk_dat(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with("blk") && name.ends_with(".dat")
}
