//! Colors for each theme. Components take a `Theme` prop and look up their
//! styles here instead of hard-coding colors.

use ratatui::style::{Color, Modifier, Style};

use crate::core::theme::Theme;

const PURPLE: Color = Color::Rgb(128, 0, 128);
const MUTED: Color = Color::Rgb(170, 170, 170);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Primary text and titles
    pub foreground: Color,
    /// Secondary text (capitals, values, URLs)
    pub muted: Color,
    /// Borders and separators
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                background: PURPLE,
                foreground: Color::White,
                muted: MUTED,
                border: Color::Gray,
                error: Color::Red,
            },
            Theme::Light => Palette {
                background: Color::White,
                foreground: PURPLE,
                muted: Color::DarkGray,
                border: PURPLE,
                error: Color::Red,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn title(&self) -> Style {
        self.base().add_modifier(Modifier::BOLD)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.muted).bg(self.background)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error).bg(self.background)
    }
}
