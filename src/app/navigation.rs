use crate::app::App;
use crate::app::helpers::{clamp_index, join_remote_path};
use crate::model::{Entry, ListingStatus, sort_entries};

impl App {
    /// Number of rows the selection may range over.
    pub(crate) fn visible_len(&self) -> usize {
        self.items.len().min(self.max_items)
    }

    pub(crate) fn current_entry(&self) -> Option<&Entry> {
        if self.selected >= self.visible_len() {
            return None;
        }
        self.items.get(self.selected)
    }

    pub(crate) fn descend(&mut self, entry: &Entry) {
        if !entry.is_dir {
            return;
        }
        self.history.push(self.current_path.clone());
        let new_path = join_remote_path(&self.current_path, &entry.name);
        self.log_line(&format!("Open {}", entry.name));
        self.navigate_to(new_path);
    }

    pub(crate) fn ascend(&mut self) {
        let Some(target) = self.history.pop() else {
            return;
        };
        self.log_line("Back");
        self.navigate_to(target);
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        self.selected = clamp_index(self.selected, delta, self.visible_len());
    }

    /// Replaces the listing with a fresh fetch of `path`. A failed fetch still commits.
    pub(super) fn navigate_to(&mut self, path: String) {
        let address = crate::rclone::remote_address(&self.remote_root, &path);
        let (items, status) = match self.backend.fetch(&self.remote_root, &path) {
            Ok(mut items) => {
                sort_entries(&mut items);
                let status = if items.is_empty() {
                    ListingStatus::Empty
                } else {
                    ListingStatus::Loaded
                };
                self.log_line(&format!("Listed {address}: {} entries", items.len()));
                (items, status)
            }
            Err(err) => {
                self.log_line(&format!("Listing {address} failed: {err}"));
                (vec![], ListingStatus::Failed(err.to_string()))
            }
        };
        self.current_path = path;
        self.items = items;
        self.status = status;
        self.selected = 0;
    }
}
