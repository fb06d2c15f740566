use std::path::PathBuf;
use std::sync::Arc;

use crate::model::{Entry, ListingStatus};

pub(crate) use handlers::{ExitReason, SessionState};
pub(crate) use input::InputEvent;
#[cfg(test)]
pub(crate) use listing_backend::MockListingBackend;
pub(crate) use listing_backend::{ListingBackend, RcloneBackend};
pub(crate) use logging::prune_log_file;
pub(crate) use pickers::{PickerOutcome, RemotePicker};

pub(crate) mod constants;
mod handlers;
mod helpers;
mod input;
mod listing_backend;
mod logging;
mod navigation;
mod pickers;

/// Navigation state of one browsing session.
pub(crate) struct App {
    pub(crate) remote_root: String,
    pub(crate) current_path: String,
    pub(crate) selected: usize,
    pub(crate) max_items: usize,
    pub(crate) history: Vec<String>,
    pub(crate) items: Vec<Entry>,
    pub(crate) status: ListingStatus,
    pub(crate) state: SessionState,
    pub(crate) log_path: Option<PathBuf>,
    backend: Arc<dyn ListingBackend>,
}

impl App {
    /// Creates the session at the remote root and performs the first fetch.
    pub(crate) fn open(
        remote_root: impl Into<String>,
        max_items: usize,
        backend: Arc<dyn ListingBackend>,
        log_path: Option<PathBuf>,
    ) -> Self {
        let mut app = Self {
            remote_root: remote_root.into(),
            current_path: String::new(),
            selected: 0,
            max_items: max_items.max(1),
            history: vec![],
            items: vec![],
            status: ListingStatus::Empty,
            state: SessionState::Browsing,
            log_path,
            backend,
        };
        app.log_line(&format!(
            "Session started on {} (max items {})",
            app.remote_root, app.max_items
        ));
        app.navigate_to(String::new());
        app
    }

    /// Address shown in the header, e.g. `store:docs/2024`.
    pub(crate) fn location(&self) -> String {
        crate::rclone::remote_address(&self.remote_root, &self.current_path)
    }

    #[cfg(test)]
    pub(crate) fn for_test(backend: Arc<dyn ListingBackend>, max_items: usize) -> Self {
        Self::open("store:", max_items, backend, None)
    }
}
