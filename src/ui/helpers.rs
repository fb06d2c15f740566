use ratatui::text::Line;

pub(crate) fn truncate_text(value: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let count = value.chars().count();
    if count <= max_width {
        return value.to_string();
    }
    if max_width <= 3 {
        return value.chars().take(max_width).collect();
    }
    let mut trimmed: String = value.chars().take(max_width - 3).collect();
    trimmed.push_str("...");
    trimmed
}

pub(crate) fn clip_text(value: &str, max_width: usize) -> String {
    value.chars().take(max_width).collect()
}

/// Human-readable size in powers of 1024, capped at TB.
pub(crate) fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0usize;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Places `line` at `row`, padding with blank rows. Rows past `height` are dropped.
pub(crate) fn put_row(rows: &mut Vec<Line<'static>>, row: usize, line: Line<'static>, height: usize) {
    if row >= height {
        return;
    }
    while rows.len() < row {
        rows.push(Line::default());
    }
    if row < rows.len() {
        rows[row] = line;
    } else {
        rows.push(line);
    }
}
