use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `~/.taskscore`, or `$TASKSCORE_HOME` when set.
pub fn taskscore_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TASKSCORE_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".taskscore"))
}

pub fn ensure_taskscore_home() -> Result<PathBuf> {
    let dir = taskscore_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
