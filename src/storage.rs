use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "rclone-explorer";
const LOG_FILE: &str = "explorer.log";

pub(crate) fn log_path() -> Result<PathBuf> {
    if let Some(mut dir) = dirs::data_local_dir() {
        dir.push(APP_DIR);
        dir.push(LOG_FILE);
        return Ok(dir);
    }
    let mut fallback = std::env::current_dir().context("current dir")?;
    fallback.push(format!("{APP_DIR}.log"));
    Ok(fallback)
}
