use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Position;

use crate::util::unicode;

use super::app::App;

/// Handle a key press
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Esc dismisses the dropdown and any typed query; quits once idle
        (_, KeyCode::Esc) => {
            if app.picker.dropdown_visible() {
                app.picker.close_dropdown();
                app.picker.set_query("");
            } else {
                app.should_quit = true;
            }
        }

        // Backspace edits the query while text is present; on an empty query
        // it drives the double-backspace chip removal gesture
        (_, KeyCode::Backspace) => {
            if app.picker.query().is_empty() {
                app.picker.backspace();
            } else {
                let mut query = app.picker.query().to_string();
                unicode::pop_grapheme(&mut query);
                app.picker.set_query(query);
            }
        }

        // Type character into the query
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut query = app.picker.query().to_string();
            query.push(c);
            app.picker.set_query(query);
        }

        _ => {}
    }
}

/// Handle a left mouse-down at (col, row), hit-testing against the regions
/// recorded by the last render. A press outside both the entry block and the
/// dropdown closes the dropdown.
pub fn handle_mouse(app: &mut App, col: u16, row: u16) {
    let pos = Position::new(col, row);

    // Chip close glyph, then chip body
    if let Some(chip) = app.regions.chips.iter().find(|c| c.close.contains(pos)) {
        let name = chip.name.clone();
        app.picker.remove_chip(&name);
        return;
    }
    if let Some(chip) = app.regions.chips.iter().find(|c| c.body.contains(pos)) {
        let index = chip.index;
        app.picker.highlight(index);
        return;
    }

    // Dropdown row selects that person
    if let Some(item) = app
        .regions
        .dropdown_items
        .iter()
        .find(|i| i.area.contains(pos))
    {
        let name = item.name.clone();
        app.picker.select(&name);
        return;
    }

    // Inside the entry block: focus the input
    if app.regions.entry.is_some_and(|r| r.contains(pos)) {
        app.picker.open_dropdown();
        return;
    }

    // Inside the dropdown chrome (borders, empty rows): not outside
    if app.regions.dropdown.is_some_and(|r| r.contains(pos)) {
        return;
    }

    app.picker.click_outside();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Person;
    use crate::tui::render;
    use crate::tui::render::test_helpers::{TERM_H, TERM_W, render_to_string};
    use crate::tui::theme::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(
            vec![
                Person::new(1, "Alice", "alice@example.com", "a"),
                Person::new(2, "Bob", "bob@example.com", "b"),
            ],
            Theme::default(),
        )
    }

    /// Draw once so hit regions are populated, discarding the text.
    fn draw(app: &mut App) {
        let _ = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render::render(frame, app);
        });
    }

    #[test]
    fn test_typing_builds_query() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_key(&mut app, key(KeyCode::Char('l')));
        assert_eq!(app.picker.query(), "al");
        assert!(app.picker.dropdown_visible());
    }

    #[test]
    fn test_backspace_edits_query_before_gesture() {
        let mut app = test_app();
        app.picker.select("Alice");
        handle_key(&mut app, key(KeyCode::Char('b')));
        handle_key(&mut app, key(KeyCode::Backspace));
        app.picker.settle();
        // Query edit, not a gesture: chip untouched, counter still zero
        assert_eq!(app.picker.query(), "");
        assert_eq!(app.picker.chips().len(), 1);
        assert_eq!(app.picker.backspace_count(), 0);
    }

    #[test]
    fn test_double_backspace_gesture_through_key_handler() {
        let mut app = test_app();
        app.picker.select("Alice");
        app.picker.select("Bob");
        handle_key(&mut app, key(KeyCode::Backspace));
        app.picker.settle();
        handle_key(&mut app, key(KeyCode::Backspace));
        app.picker.settle();
        assert_eq!(app.picker.chips().len(), 1);
        assert_eq!(app.picker.chips()[0].name, "Alice");
    }

    #[test]
    fn test_esc_closes_dropdown_then_quits() {
        let mut app = test_app();
        app.picker.open_dropdown();
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.picker.dropdown_visible());
        assert!(!app.should_quit);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = test_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_click_dropdown_row_selects() {
        let mut app = test_app();
        app.picker.open_dropdown();
        draw(&mut app);
        let item = app.regions.dropdown_items[0].clone();
        handle_mouse(&mut app, item.area.x, item.area.y);
        app.picker.settle();
        assert_eq!(app.picker.chips().len(), 1);
        assert_eq!(app.picker.chips()[0].name, item.name);
    }

    #[test]
    fn test_click_chip_close_removes_it() {
        let mut app = test_app();
        app.picker.select("Alice");
        draw(&mut app);
        let close = app.regions.chips[0].close;
        handle_mouse(&mut app, close.x, close.y);
        app.picker.settle();
        assert!(app.picker.chips().is_empty());
        assert!(app.picker.pool().iter().any(|p| p.name == "Alice"));
    }

    #[test]
    fn test_click_chip_body_highlights_it() {
        let mut app = test_app();
        app.picker.select("Alice");
        draw(&mut app);
        let body = app.regions.chips[0].body;
        handle_mouse(&mut app, body.x, body.y);
        assert_eq!(app.picker.highlighted(), Some(0));
    }

    #[test]
    fn test_click_entry_opens_dropdown() {
        let mut app = test_app();
        draw(&mut app);
        let entry = app.regions.entry.unwrap();
        handle_mouse(&mut app, entry.x + 1, entry.y + 1);
        assert!(app.picker.dropdown_visible());
    }

    #[test]
    fn test_click_outside_closes_dropdown() {
        let mut app = test_app();
        app.picker.open_dropdown();
        draw(&mut app);
        // Bottom-right corner is outside both the entry block and the dropdown
        handle_mouse(&mut app, TERM_W - 1, TERM_H - 2);
        assert!(!app.picker.dropdown_visible());
    }
}
