//! # Loader Component
//!
//! Full-body loading indicator: `Loading {text} ...` above a spinner.
//! The spinner frame is a prop driven by the event loop's animation clock.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Loader {
    /// What is loading: "countries" or a country name.
    pub text: String,
    pub spinner_frame: usize,
    pub theme: Theme,
}

impl Loader {
    pub fn new(text: impl Into<String>, spinner_frame: usize, theme: Theme) -> Self {
        Self {
            text: text.into(),
            spinner_frame,
            theme,
        }
    }

    pub fn message(&self) -> String {
        format!("Loading {} ...", self.text)
    }

    fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }
}

impl Component for Loader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        frame.render_widget(Block::default().style(palette.base()), area);

        let [text_area] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);

        let lines = vec![
            Line::styled(self.message(), palette.title()),
            Line::raw(""),
            Line::styled(self.spinner(), palette.secondary()),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).style(palette.base()),
            text_area,
        );
    }
}
