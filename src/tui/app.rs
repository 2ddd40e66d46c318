use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::model::Person;
use crate::select::Picker;

use super::input;
use super::render;
use super::theme::Theme;

/// Screen rectangle of one rendered chip, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct ChipRegion {
    /// Chip index in the picker's chip list
    pub index: usize,
    pub name: String,
    /// The whole chip, close glyph included
    pub body: Rect,
    /// The trailing `×` cell
    pub close: Rect,
}

/// Screen rectangle of one dropdown row
#[derive(Debug, Clone)]
pub struct DropdownItemRegion {
    pub name: String,
    pub area: Rect,
}

/// Rectangles recorded by the last render, consumed by mouse handling.
/// Cleared and rebuilt on every draw.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    /// The entry block: chip rows plus the input line
    pub entry: Option<Rect>,
    pub chips: Vec<ChipRegion>,
    /// The whole dropdown popup (borders included)
    pub dropdown: Option<Rect>,
    pub dropdown_items: Vec<DropdownItemRegion>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.entry = None;
        self.chips.clear();
        self.dropdown = None;
        self.dropdown_items.clear();
    }
}

/// Main application state
pub struct App {
    pub picker: Picker,
    pub theme: Theme,
    pub should_quit: bool,
    pub regions: HitRegions,
}

impl App {
    pub fn new(roster: Vec<Person>, theme: Theme) -> Self {
        App {
            picker: Picker::new(roster),
            theme,
            should_quit: false,
            regions: HitRegions::default(),
        }
    }
}

/// Run the TUI application
pub fn run(roster: Vec<Person>, theme: Theme) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(roster, theme);

    // Setup terminal; mouse capture is held for the whole session
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    // Second transition step: commit a pending double-backspace
                    // removal before the next draw
                    app.picker.settle();
                }
                Event::Mouse(mouse)
                    if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) =>
                {
                    input::handle_mouse(app, mouse.column, mouse.row);
                    app.picker.settle();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
