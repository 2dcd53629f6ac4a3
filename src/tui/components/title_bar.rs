//! # TitleBar Component
//!
//! Top bar naming the current screen and showing the key hints.
//!
//! ## Responsibilities
//!
//! - Display the screen title ("All Countries", "Country Detail")
//! - Display context-dependent key hints on the right
//! - Show which theme Ctrl+T switches to
//!
//! ## Design Decisions
//!
//! TitleBar is purely presentational. It receives all data as props and has no
//! internal state, the theme included:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("All Countries", "Enter Open", Theme::Dark);
//! title_bar.render(frame, area);
//! ```
//!
//! The hints are dropped first when the terminal is too narrow for both.

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

/// Top bar component showing the screen title and key hints.
///
/// # Props
///
/// - `title`: Screen name
/// - `hints`: Key hints for the current screen (e.g., "Enter Open  Esc Back")
/// - `theme`: Active theme
pub struct TitleBar {
    pub title: String,
    pub hints: String,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(title: impl Into<String>, hints: impl Into<String>, theme: Theme) -> Self {
        Self {
            title: title.into(),
            hints: hints.into(),
            theme,
        }
    }

    /// Full right-hand text: screen hints plus the theme toggle.
    fn right_text(&self) -> String {
        let toggle = format!("Ctrl+T {}", self.theme.toggle().label());
        if self.hints.is_empty() {
            toggle
        } else {
            format!("{}  {}", self.hints, toggle)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        let title = format!(" {} ", self.title);
        let right = format!("{} ", self.right_text());

        let title_width = title.width();
        let right_width = right.width();
        let available = area.width as usize;

        let mut spans = vec![Span::styled(title, palette.title())];
        if title_width + right_width < available {
            let gap = available - title_width - right_width;
            spans.push(Span::styled(" ".repeat(gap), palette.base()));
            spans.push(Span::styled(right, palette.secondary()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.base()), area);
    }
}
