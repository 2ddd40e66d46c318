use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub chip_bg: Color,
    pub chip_text: Color,
    pub dropdown_border: Color,
    pub email: Color,
    /// Badge palette, picked per person by id
    pub avatar_colors: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            chip_bg: Color::Rgb(0x3D, 0x14, 0x38),
            chip_text: Color::Rgb(0xDA, 0xB8, 0xF0),
            dropdown_border: Color::Rgb(0x7D, 0x78, 0xBF),
            email: Color::Rgb(0x7D, 0x78, 0xBF),
            avatar_colors: vec![
                Color::Rgb(0x44, 0x88, 0xFF),
                Color::Rgb(0x44, 0xDD, 0xFF),
                Color::Rgb(0x44, 0xFF, 0x88),
                Color::Rgb(0xFF, 0xD7, 0x00),
                Color::Rgb(0xCC, 0x66, 0xFF),
                Color::Rgb(0xFF, 0x44, 0x44),
            ],
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "highlight" => theme.highlight = color,
                    "chip_bg" => theme.chip_bg = color,
                    "chip_text" => theme.chip_text = color,
                    "dropdown_border" => theme.dropdown_border = color,
                    "email" => theme.email = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Badge color for a person, stable across renders
    pub fn avatar_color(&self, id: u64) -> Color {
        let idx = (id as usize) % self.avatar_colors.len();
        self.avatar_colors[idx]
    }
}
