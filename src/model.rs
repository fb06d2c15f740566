use std::cmp::Ordering;

use serde::{Deserialize, Deserializer};

/// One record of an `lsjson` listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Entry {
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "Size", default, deserialize_with = "deserialize_size")]
    pub(crate) size: u64,
    #[serde(rename = "IsDir", default)]
    pub(crate) is_dir: bool,
    #[serde(rename = "ModTime", default)]
    pub(crate) mod_time: String,
}

impl Entry {
    #[cfg(test)]
    pub(crate) fn file(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
            is_dir: false,
            mod_time: String::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn dir(name: &str) -> Self {
        Self {
            name: name.to_string(),
            size: 0,
            is_dir: true,
            mod_time: String::new(),
        }
    }

    /// A name is a single path segment: non-empty and without separators.
    pub(crate) fn has_valid_name(&self) -> bool {
        !self.name.is_empty() && !self.name.contains('/')
    }
}

/// Outcome of the last fetch for the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListingStatus {
    Loaded,
    Empty,
    Failed(String),
}

/// Directories first, then case-insensitive by name. Stable.
pub(crate) fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(left: &Entry, right: &Entry) -> Ordering {
    right
        .is_dir
        .cmp(&left.is_dir)
        .then_with(|| left.name.to_lowercase().cmp(&right.name.to_lowercase()))
}

// rclone reports -1 for directories and for objects of unknown size.
fn deserialize_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.map(|size| u64::try_from(size).unwrap_or(0)).unwrap_or(0))
}
