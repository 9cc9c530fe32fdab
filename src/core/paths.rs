//! Platform directories. Only the cache dir is used, for the TUI log file.

use std::path::PathBuf;

use crate::core::app;

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("io", app::VENDOR, app::NAME)
}

/// Cache directory (~/.cache/llm-models-viewer/).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Log file written in TUI mode. Creates the cache directory if needed.
pub fn log_file() -> Option<PathBuf> {
    let dir = cache_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{}.log", app::NAME)))
}
