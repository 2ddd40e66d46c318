use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Render the status row (bottom of screen): interaction hint on the left,
/// pool/chip counts on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = if app.picker.backspace_count() == 1 {
        "backspace again to remove the last chip"
    } else {
        "type to filter \u{00B7} click a name to add \u{00B7} backspace \u{00D7}2 removes last"
    };
    let counts = format!(
        "{} picked \u{00B7} {} available",
        app.picker.chips().len(),
        app.picker.pool().len()
    );

    let mut spans = vec![Span::styled(
        hint.to_string(),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let hint_width = unicode::display_width(hint);
    let counts_width = unicode::display_width(&counts);
    if hint_width + counts_width < width {
        spans.push(Span::styled(
            " ".repeat(width - hint_width - counts_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
