use std::io;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::model::Entry;

pub(crate) const DEFAULT_TOOL: &str = "rclone";

#[derive(Debug, Error)]
pub(crate) enum ListingError {
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("{tool} {status}: {stderr}")]
    Status {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("unreadable listing: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fully-qualified rclone address for `path` below `remote_root`.
pub(crate) fn remote_address(remote_root: &str, path: &str) -> String {
    if path.is_empty() {
        return remote_root.to_string();
    }
    if remote_root.ends_with(':') || remote_root.ends_with('/') {
        format!("{remote_root}{path}")
    } else {
        format!("{remote_root}/{path}")
    }
}

pub(crate) fn lsjson(tool: &str, address: &str) -> Result<Vec<Entry>, ListingError> {
    let output = run(tool, &["lsjson", address])?;
    parse_listing(&output.stdout)
}

/// Decodes `lsjson` output, dropping records whose name is not a single segment.
pub(crate) fn parse_listing(stdout: &[u8]) -> Result<Vec<Entry>, ListingError> {
    let entries: Vec<Entry> = serde_json::from_slice(stdout)?;
    Ok(entries
        .into_iter()
        .filter(Entry::has_valid_name)
        .collect())
}

pub(crate) fn probe(tool: &str) -> Result<()> {
    run(tool, &["version"])
        .map(|_| ())
        .map_err(|_| anyhow::anyhow!("{tool} command not found. Please install {tool} first."))
}

pub(crate) fn list_remotes(tool: &str) -> Result<Vec<String>> {
    let output = run(tool, &["listremotes"]).context("list remotes")?;
    let remotes = parse_remotes(&String::from_utf8_lossy(&output.stdout));
    if remotes.is_empty() {
        anyhow::bail!("No remotes configured. Run '{tool} config' to add one.");
    }
    Ok(remotes)
}

pub(crate) fn parse_remotes(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > 1 && line.ends_with(':'))
        .map(str::to_string)
        .collect()
}

/// Normalizes a command-line remote (`name`, `name:` or `name:/path`).
pub(crate) fn parse_remote_arg(arg: &str) -> Result<String> {
    let trimmed = arg.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Remote path cannot be empty");
    }
    if trimmed.contains(':') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}:"))
    }
}

fn run(tool: &str, args: &[&str]) -> Result<Output, ListingError> {
    let output = Command::new(tool)
        .args(args)
        .output()
        .map_err(|source| ListingError::Spawn {
            tool: tool.to_string(),
            source,
        })?;
    if !output.status.success() {
        return Err(ListingError::Status {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}
