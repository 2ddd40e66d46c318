use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Person;
use crate::select::Picker;
use crate::tui::app::{App, ChipRegion};
use crate::util::unicode;

/// Horizontal gap between chips
const CHIP_GAP: u16 = 1;

/// Cells a chip occupies: ` XX Name × ` (badge, name, close glyph, padding)
fn chip_width(person: &Person) -> u16 {
    let badge = unicode::display_width(&person.initials());
    let name = unicode::display_width(&person.name);
    (1 + badge + 1 + name + 3) as u16
}

/// Greedy left-to-right wrap of the chip list into rows of (chip index, x offset).
fn wrap_chips(picker: &Picker, inner_width: u16) -> Vec<Vec<(usize, u16)>> {
    let mut rows: Vec<Vec<(usize, u16)>> = Vec::new();
    let mut current: Vec<(usize, u16)> = Vec::new();
    let mut x: u16 = 0;
    for (i, chip) in picker.chips().iter().enumerate() {
        let w = chip_width(chip).min(inner_width.max(1));
        if x + w > inner_width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            x = 0;
        }
        current.push((i, x));
        x += w + CHIP_GAP;
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Height of the entry block: chip rows, the input line, and borders.
pub fn entry_height(picker: &Picker, width: u16) -> u16 {
    let inner_width = width.saturating_sub(2).max(1);
    let chip_rows = wrap_chips(picker, inner_width).len() as u16;
    chip_rows + 1 + 2
}

/// Render the entry block: wrapped chip rows above the query input line.
/// Records chip and entry rectangles into `app.regions`.
pub fn render_entry(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = &app.theme;
    let bg = theme.background;
    let bg_style = Style::default().bg(bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .title(Span::styled(
            " add people ",
            Style::default().fg(theme.dim).bg(bg),
        ))
        .style(bg_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.regions.entry = Some(area);

    let rows = wrap_chips(&app.picker, inner.width);
    let highlighted = app.picker.highlighted();

    let mut lines: Vec<Line> = Vec::new();
    let mut chip_regions: Vec<ChipRegion> = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut cursor: u16 = 0;
        for &(chip_idx, x) in row {
            let person = &app.picker.chips()[chip_idx];
            let w = chip_width(person).min(inner.width.max(1));

            if x > cursor {
                spans.push(Span::styled(" ".repeat((x - cursor) as usize), bg_style));
            }

            // Highlighted chip (pending deletion) inverts onto the highlight color
            let (chip_bg, name_fg) = if highlighted == Some(chip_idx) {
                (theme.highlight, theme.background)
            } else {
                (theme.chip_bg, theme.chip_text)
            };
            let chip_style = Style::default().fg(name_fg).bg(chip_bg);
            let badge_style = Style::default()
                .fg(theme.avatar_color(person.id))
                .bg(chip_bg)
                .add_modifier(Modifier::BOLD);

            spans.push(Span::styled(" ", chip_style));
            spans.push(Span::styled(person.initials(), badge_style));
            spans.push(Span::styled(format!(" {} ", person.name), chip_style));
            spans.push(Span::styled("×", chip_style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(" ", chip_style));

            let body = Rect::new(inner.x + x, inner.y + row_idx as u16, w, 1);
            let close = Rect::new(body.x + w.saturating_sub(2), body.y, 1, 1);
            chip_regions.push(ChipRegion {
                index: chip_idx,
                name: person.name.clone(),
                body,
                close,
            });

            cursor = x + w;
        }
        lines.push(Line::from(spans));
    }

    // Input line: prompt, query (or placeholder), block cursor
    let mut input_spans: Vec<Span> = vec![Span::styled(
        "\u{203A} ",
        Style::default().fg(theme.dim).bg(bg),
    )];
    if app.picker.query().is_empty() {
        input_spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
        input_spans.push(Span::styled(
            " Add people\u{2026}",
            Style::default().fg(theme.dim).bg(bg),
        ));
    } else {
        input_spans.push(Span::styled(
            app.picker.query().to_string(),
            Style::default().fg(theme.text_bright).bg(bg),
        ));
        input_spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
    }
    lines.push(Line::from(input_spans));

    app.regions.chips = chip_regions;

    frame.render_widget(Paragraph::new(lines).style(bg_style), inner);
}
