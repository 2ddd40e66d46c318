use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, DropdownItemRegion};
use crate::util::unicode;

/// Maximum number of visible entries in the dropdown
pub const MAX_VISIBLE: usize = 8;

const MIN_WIDTH: u16 = 24;

struct Row {
    id: u64,
    name: String,
    email: String,
    initials: String,
}

/// Render the dropdown popup in the zone below the entry block: one row per
/// matching candidate (badge, name, dimmed email), pool order, capped at
/// [`MAX_VISIBLE`]. Records the popup and row rectangles into `app.regions`.
pub fn render_dropdown(frame: &mut Frame, app: &mut App, zone: Rect) {
    if zone.height < 3 || zone.width < 4 {
        return;
    }

    // Collect owned rows first: `filtered` borrows the picker and the
    // region recording below needs `app` mutably.
    let rows: Vec<Row> = app
        .picker
        .filtered()
        .iter()
        .take(MAX_VISIBLE)
        .map(|p| Row {
            id: p.id,
            name: p.name.clone(),
            email: p.email.clone(),
            initials: p.initials(),
        })
        .collect();
    if rows.is_empty() {
        return;
    }

    let theme = &app.theme;
    let bg = theme.background;
    let bg_style = Style::default().bg(bg);

    // Width: widest "badge name  email" row plus borders and padding
    let content_max = rows
        .iter()
        .map(|r| {
            unicode::display_width(&r.initials)
                + unicode::display_width(&r.name)
                + unicode::display_width(&r.email)
                + 5
        })
        .max()
        .unwrap_or(0) as u16;
    let popup_w = (content_max + 2)
        .max(MIN_WIDTH)
        .min(zone.width.saturating_sub(2));
    let popup_h = ((rows.len() as u16) + 2).min(zone.height);
    let inner_w = popup_w.saturating_sub(2) as usize;
    let visible = (popup_h.saturating_sub(2)) as usize;

    let popup_area = Rect::new(zone.x + 1, zone.y, popup_w, popup_h);
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = Vec::new();
    let mut item_regions: Vec<DropdownItemRegion> = Vec::new();

    for (i, row) in rows.iter().take(visible).enumerate() {
        let badge_style = Style::default()
            .fg(theme.avatar_color(row.id))
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        let name_style = Style::default().fg(theme.text_bright).bg(bg);
        let email_style = Style::default().fg(theme.email).bg(bg);

        let badge_w = unicode::display_width(&row.initials);
        let name_w = unicode::display_width(&row.name);
        // " XX Name<pad>email " with the email right-aligned when it fits
        let email_budget = inner_w.saturating_sub(badge_w + name_w + 4);
        let email = unicode::truncate_to_width(&row.email, email_budget);
        let pad = email_budget.saturating_sub(unicode::display_width(&email));

        let mut spans = vec![
            Span::styled(" ", bg_style),
            Span::styled(row.initials.clone(), badge_style),
            Span::styled(" ", bg_style),
            Span::styled(
                unicode::truncate_to_width(&row.name, inner_w.saturating_sub(badge_w + 3)),
                name_style,
            ),
        ];
        if !email.is_empty() {
            spans.push(Span::styled(" ".repeat(pad + 1), bg_style));
            spans.push(Span::styled(email, email_style));
        }
        lines.push(Line::from(spans));

        item_regions.push(DropdownItemRegion {
            name: row.name.clone(),
            area: Rect::new(popup_area.x + 1, popup_area.y + 1 + i as u16, inner_w as u16, 1),
        });
    }

    app.regions.dropdown = Some(popup_area);
    app.regions.dropdown_items = item_regions;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dropdown_border).bg(bg))
        .style(bg_style);
    frame.render_widget(Paragraph::new(lines).block(block).style(bg_style), popup_area);
}
