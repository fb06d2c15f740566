use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Datelike;

use crate::app::App;
use crate::app::constants::{
    LOG_MAX_ENTRIES, LOG_PARSE_FORMAT, LOG_RETENTION_DAYS, LOG_SEPARATOR, LOG_TIMESTAMP_FORMAT,
};

impl App {
    pub(super) fn log_line(&self, message: &str) {
        if let Some(path) = &self.log_path {
            append_log_line(path, message);
        }
    }
}

fn append_log_line(path: &Path, message: &str) {
    let timestamp = chrono::Local::now().format(LOG_TIMESTAMP_FORMAT);
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{timestamp}{LOG_SEPARATOR}{message}");
    }
}

pub(crate) fn prune_log_file(path: &Path) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    let cutoff = chrono::Local::now().naive_local() - chrono::Duration::days(LOG_RETENTION_DAYS);
    let current_year = chrono::Local::now().year();
    let mut kept = Vec::new();
    for line in content.lines() {
        if let Some((timestamp, _)) = line.split_once(LOG_SEPARATOR) {
            let with_year = format!("{current_year}-{timestamp}");
            if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(&with_year, LOG_PARSE_FORMAT)
            {
                if parsed >= cutoff {
                    kept.push(line.to_string());
                }
            }
        }
    }
    if kept.len() > LOG_MAX_ENTRIES {
        kept = kept.split_off(kept.len().saturating_sub(LOG_MAX_ENTRIES));
    }
    if kept.is_empty() {
        let _ = fs::remove_file(path);
    } else {
        let _ = fs::write(path, kept.join("\n") + "\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;

    use crate::app::listing_backend::MockListingBackend;
    use crate::model::Entry;

    fn temp_log_path(tag: &str) -> std::path::PathBuf {
        let mut base = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        base.push(format!("rclone-explorer-{tag}-{nanos}.log"));
        base
    }

    #[test]
    fn prune_log_file_removes_old_entries() {
        let path = temp_log_path("prune");
        let now = chrono::Local::now().naive_local();
        let old = now - chrono::Duration::days(LOG_RETENTION_DAYS + 1);
        let recent = now - chrono::Duration::hours(1);
        let old_line = format!("{}{}stale", old.format(LOG_TIMESTAMP_FORMAT), LOG_SEPARATOR);
        let recent_line = format!("{}{}fresh", recent.format(LOG_TIMESTAMP_FORMAT), LOG_SEPARATOR);
        fs::write(&path, format!("{old_line}\n{recent_line}\n")).unwrap();
        prune_log_file(&path);
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("fresh"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn prune_log_file_removes_file_without_entries() {
        let path = temp_log_path("garbage");
        fs::write(&path, "no separator here\n").unwrap();
        prune_log_file(&path);
        assert!(!path.exists());
    }

    #[test]
    fn navigation_is_logged() {
        let path = temp_log_path("session");
        let backend = Arc::new(MockListingBackend::default());
        backend.set_list("", vec![Entry::dir("docs")]);
        backend.set_failure("docs", "permission denied");
        let mut app = App::open("store:", 10, backend, Some(path.clone()));
        app.descend(&Entry::dir("docs"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Session started on store:"));
        assert!(content.contains("Listed store:: 1 entries"));
        assert!(content.contains("Listing store:docs failed"));
        assert!(content.lines().all(|line| line.contains(LOG_SEPARATOR)));
        let _ = fs::remove_file(&path);
    }
}
