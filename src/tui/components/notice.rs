//! # Notice Component
//!
//! A single message that replaces the whole screen body: fetch errors
//! ("Country not found") and empty results ("No countries found").
//! Nothing else is drawn alongside it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Empty,
}

pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub theme: Theme,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind, theme: Theme) -> Self {
        Self {
            message: message.into(),
            kind,
            theme,
        }
    }
}

impl Component for Notice {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        frame.render_widget(Block::default().style(palette.base()), area);

        let style = match self.kind {
            NoticeKind::Error => palette.error_text(),
            NoticeKind::Empty => palette.base(),
        };

        let [line_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(self.message.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, line_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    #[test]
    fn test_error_notice_is_red() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut notice = Notice::new("Country not found", NoticeKind::Error, Theme::Light);

        terminal.draw(|f| notice.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Country not found"));

        let red_cells = buffer
            .content()
            .iter()
            .filter(|c| c.fg == Color::Red && c.symbol() != " ")
            .count();
        assert_eq!(red_cells, "Countrynotfound".len());
    }

    #[test]
    fn test_empty_notice_uses_base_color() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut notice = Notice::new("No countries found", NoticeKind::Empty, Theme::Dark);

        terminal.draw(|f| notice.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer.content().iter().all(|c| c.fg != Color::Red));
    }
}
