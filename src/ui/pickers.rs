use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::app::RemotePicker;
use crate::ui::constants::{FIRST_ITEM_ROW, PICKER_HELP_TEXT, PICKER_TITLE, RESERVED_ROWS};
use crate::ui::helpers::{clip_text, put_row, truncate_text};

pub(crate) fn draw_remote_picker(frame: &mut Frame<'_>, picker: &RemotePicker) {
    let area = frame.area();
    let lines = remote_picker_lines(picker, area.width, area.height);
    frame.render_widget(Paragraph::new(lines), area);
}

pub(crate) fn remote_picker_lines(
    picker: &RemotePicker,
    width: u16,
    height: u16,
) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let height = usize::from(height);
    let mut rows = Vec::new();

    put_row(
        &mut rows,
        0,
        Line::styled(
            clip_text(PICKER_TITLE, width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        height,
    );
    if PICKER_HELP_TEXT.chars().count() < width {
        put_row(&mut rows, 1, Line::raw(PICKER_HELP_TEXT), height);
    }

    let shown = picker
        .remotes
        .len()
        .min(height.saturating_sub(RESERVED_ROWS));
    for (index, remote) in picker.remotes.iter().take(shown).enumerate() {
        let style = if index == picker.selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let text = truncate_text(&format!("{:>3}. {remote}", index + 1), width);
        put_row(&mut rows, FIRST_ITEM_ROW + index, Line::styled(text, style), height);
    }
    rows
}
