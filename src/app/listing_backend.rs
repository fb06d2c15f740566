use crate::model::Entry;
use crate::rclone::{ListingError, lsjson, remote_address};

#[cfg(test)]
use std::collections::HashMap;

pub(crate) trait ListingBackend: Send + Sync {
    fn fetch(&self, remote_root: &str, path: &str) -> Result<Vec<Entry>, ListingError>;
}

#[derive(Debug)]
pub(crate) struct RcloneBackend {
    tool: String,
}

impl RcloneBackend {
    pub(crate) fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl ListingBackend for RcloneBackend {
    fn fetch(&self, remote_root: &str, path: &str) -> Result<Vec<Entry>, ListingError> {
        lsjson(&self.tool, &remote_address(remote_root, path))
    }
}

#[cfg(test)]
#[derive(Default)]
pub(crate) struct MockListingBackend {
    listings: std::sync::Mutex<HashMap<String, Vec<Entry>>>,
    failures: std::sync::Mutex<HashMap<String, String>>,
    calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockListingBackend {
    pub(crate) fn set_list(&self, path: &str, entries: Vec<Entry>) {
        self.listings
            .lock()
            .unwrap()
            .insert(path.to_string(), entries);
    }

    pub(crate) fn set_failure(&self, path: &str, stderr: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(path.to_string(), stderr.to_string());
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl ListingBackend for MockListingBackend {
    fn fetch(&self, _remote_root: &str, path: &str) -> Result<Vec<Entry>, ListingError> {
        self.calls.lock().unwrap().push(path.to_string());
        if let Some(stderr) = self.failures.lock().unwrap().get(path) {
            return Err(ListingError::Status {
                tool: "rclone".to_string(),
                status: "exit status: 3".to_string(),
                stderr: stderr.clone(),
            });
        }
        Ok(self
            .listings
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_default())
    }
}
