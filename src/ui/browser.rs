use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::model::{Entry, ListingStatus};
use crate::ui::constants::{
    DIR_ICON, DIR_LABEL, EMPTY_LABEL, FAILED_PREFIX, FILE_ICON, FIRST_ITEM_ROW, HEADER_LABEL,
    HELP_TEXT, NAME_MARGIN, RESERVED_ROWS, SIZE_COLUMN_WIDTH, STATUS_ROW,
};
use crate::ui::helpers::{clip_text, format_size, put_row, truncate_text};

pub(crate) fn draw_browser(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let lines = browser_lines(app, area.width, area.height);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Projects the navigation state onto a `height` x `width` grid, one `Line` per row.
pub(crate) fn browser_lines(app: &App, width: u16, height: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let height = usize::from(height);
    let mut rows = Vec::new();

    let title = format!("{HEADER_LABEL}: {}", app.location());
    put_row(
        &mut rows,
        0,
        Line::styled(
            clip_text(&title, width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        height,
    );
    if HELP_TEXT.chars().count() < width {
        put_row(&mut rows, 1, Line::raw(HELP_TEXT), height);
    }
    if let Some(status) = status_line(&app.status, width) {
        put_row(&mut rows, STATUS_ROW, status, height);
    }

    let shown = app.visible_len().min(height.saturating_sub(RESERVED_ROWS));
    for (index, entry) in app.items.iter().take(shown).enumerate() {
        let style = if index == app.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        put_row(
            &mut rows,
            FIRST_ITEM_ROW + index,
            Line::styled(item_text(entry, width), style),
            height,
        );
    }

    if app.items.len() > app.max_items {
        let hidden = app.items.len() - app.max_items;
        put_row(
            &mut rows,
            FIRST_ITEM_ROW + shown,
            Line::styled(
                format!("... ({hidden} more items)"),
                Style::default().add_modifier(Modifier::DIM),
            ),
            height,
        );
    }
    rows
}

fn status_line(status: &ListingStatus, width: usize) -> Option<Line<'static>> {
    match status {
        ListingStatus::Loaded => None,
        ListingStatus::Empty => Some(Line::styled(
            EMPTY_LABEL,
            Style::default().add_modifier(Modifier::DIM),
        )),
        ListingStatus::Failed(reason) => Some(Line::styled(
            truncate_text(&format!("{FAILED_PREFIX}{reason}"), width),
            Style::default().fg(Color::Red),
        )),
    }
}

fn item_text(entry: &Entry, width: usize) -> String {
    let icon = if entry.is_dir { DIR_ICON } else { FILE_ICON };
    let size = if entry.is_dir {
        DIR_LABEL.to_string()
    } else {
        format_size(entry.size)
    };
    let budget =
        width.saturating_sub(icon.chars().count() + size.chars().count() + NAME_MARGIN);
    let name = truncate_text(&entry.name, budget);
    let size_width = SIZE_COLUMN_WIDTH;
    format!("{icon}{name:<budget$} {size:>size_width$}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::app::{InputEvent, MockListingBackend};

    fn render(app: &App, width: u16, height: u16) -> (Vec<String>, Buffer) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw_browser(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let rows = buffer
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect();
        (rows, buffer)
    }

    fn app_with(entries: Vec<Entry>, max_items: usize) -> App {
        let backend = Arc::new(MockListingBackend::default());
        backend.set_list("", entries);
        App::for_test(backend, max_items)
    }

    fn numbered_files(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|index| Entry::file(&format!("file{index:02}"), 100))
            .collect()
    }

    #[test]
    fn directories_render_before_files() {
        let app = app_with(vec![Entry::file("b.txt", 2048), Entry::dir("A")], 10);
        let (rows, buffer) = render(&app, 60, 12);
        assert!(rows[0].contains("rclone explorer: store:"));
        assert!(rows[1].contains(HELP_TEXT));
        assert!(rows[3].contains(" A "));
        assert!(rows[3].contains(DIR_LABEL));
        assert!(rows[4].contains("b.txt"));
        assert!(rows[4].contains("2.0 KB"));
        assert!(buffer[(0, 0)].modifier.contains(Modifier::BOLD));
        assert!(buffer[(0, 3)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(0, 4)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn highlight_follows_selection() {
        let mut app = app_with(vec![Entry::file("b.txt", 2048), Entry::dir("A")], 10);
        app.handle_event(InputEvent::Down);
        let (_, buffer) = render(&app, 60, 12);
        assert!(!buffer[(0, 3)].modifier.contains(Modifier::REVERSED));
        assert!(buffer[(0, 4)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn overflow_row_counts_hidden_items() {
        let app = app_with(numbered_files(15), 10);
        let (rows, buffer) = render(&app, 60, 24);
        for (offset, row) in rows[3..13].iter().enumerate() {
            assert!(row.contains(&format!("file{offset:02}")));
        }
        assert!(rows[13].starts_with("... (5 more items)"));
        assert!(buffer[(0, 13)].modifier.contains(Modifier::DIM));
        assert!(rows[14].trim().is_empty());
    }

    #[test]
    fn rows_are_limited_by_terminal_height() {
        let app = app_with(numbered_files(15), 10);
        let lines = browser_lines(&app, 60, 7);
        assert_eq!(lines.len(), 7);
        assert!(lines[3].to_string().contains("file00"));
        assert!(lines[5].to_string().contains("file02"));
        assert_eq!(lines[6].to_string(), "... (5 more items)");
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = app_with(numbered_files(15), 10);
        let (rows, _) = render(&app, 4, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "rclo");
        assert!(browser_lines(&app, 0, 0).is_empty());
    }

    #[test]
    fn long_names_are_truncated_with_ellipsis() {
        let long = "a-very-long-file-name-that-will-not-fit-anywhere.txt";
        let app = app_with(vec![Entry::file(long, 10)], 10);
        let lines = browser_lines(&app, 40, 10);
        let row = lines[3].to_string();
        assert!(row.contains("..."));
        assert!(!row.contains(long));
        assert!(row.ends_with("10 B"));
    }

    #[test]
    fn empty_and_failed_listings_show_status_row() {
        let app = app_with(vec![], 10);
        let lines = browser_lines(&app, 60, 10);
        assert_eq!(lines[STATUS_ROW].to_string(), EMPTY_LABEL);

        let backend = Arc::new(MockListingBackend::default());
        backend.set_failure("", "didn't find section in config file");
        let app = App::for_test(backend, 10);
        let (rows, buffer) = render(&app, 80, 10);
        assert!(rows[STATUS_ROW].starts_with(FAILED_PREFIX));
        assert!(rows[STATUS_ROW].contains("didn't find section"));
        assert_eq!(buffer[(0, 2)].fg, Color::Red);
        assert!(rows[3].trim().is_empty());
    }

    #[test]
    fn header_shows_current_path() {
        let backend = Arc::new(MockListingBackend::default());
        backend.set_list("", vec![Entry::dir("docs")]);
        backend.set_list("docs", vec![Entry::dir("2024")]);
        let mut app = App::for_test(backend, 10);
        app.handle_event(InputEvent::Enter);
        app.handle_event(InputEvent::Enter);
        let lines = browser_lines(&app, 80, 10);
        assert_eq!(lines[0].to_string(), "rclone explorer: store:docs/2024");
    }
}
