pub mod chip_row;
pub mod dropdown;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers and rebuilds the
/// mouse hit regions as a side effect.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    app.regions.clear();

    // Layout: entry block (chips + input) | dropdown zone | status row
    let entry_height = chip_row::entry_height(&app.picker, area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(entry_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    chip_row::render_entry(frame, app, chunks[0]);

    if app.picker.dropdown_visible() {
        dropdown::render_dropdown(frame, app, chunks[1]);
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
