use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::core::section::Section;
use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

/// Columns reserved for the label on the left.
const LABEL_WIDTH: u16 = 14;
/// Blank row below each section.
const SPACING: u16 = 1;

/// One label/value row of the detail screen.
///
/// Transient: created per section each frame and rendered into the detail
/// `ScrollView`. The label is capitalized on the left, the value sits on the
/// right and wraps when it does not fit.
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap`, using options that match `Paragraph` wrapping, so the
/// parent can size the scroll content before rendering.
#[derive(Clone, Copy)]
pub struct InfoSection<'a> {
    pub section: &'a Section,
    pub theme: Theme,
}

impl<'a> InfoSection<'a> {
    pub fn new(section: &'a Section, theme: Theme) -> Self {
        Self { section, theme }
    }

    pub fn label(&self) -> String {
        let mut chars = self.section.title.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn calculate_height(section: &Section, width: u16) -> u16 {
        let value_width = width.saturating_sub(LABEL_WIDTH);
        if value_width == 0 {
            return 1 + SPACING;
        }
        let data = section.data.trim();
        if data.is_empty() {
            return 1 + SPACING;
        }

        let options = textwrap::Options::new(value_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        let lines = textwrap::wrap(data, options);
        (lines.len() as u16).max(1) + SPACING
    }
}

impl Widget for InfoSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let palette = Palette::for_theme(self.theme);
        let [label_area, value_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(0)]).areas(area);

        Paragraph::new(self.label())
            .style(palette.title())
            .render(label_area, buf);

        let single_line = self.section.data.trim().len() <= value_area.width as usize;
        let alignment = if single_line {
            Alignment::Right
        } else {
            Alignment::Left
        };
        Paragraph::new(self.section.data.trim())
            .style(palette.secondary())
            .alignment(alignment)
            .wrap(Wrap { trim: true })
            .render(value_area, buf);
    }
}

impl Component for InfoSection<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn section(title: &'static str, data: &str) -> Section {
        Section {
            title,
            data: data.to_string(),
        }
    }

    #[test]
    fn test_label_is_capitalized() {
        let s = section("continents", "Asia");
        assert_eq!(InfoSection::new(&s, Theme::Light).label(), "Continents");
    }

    #[test]
    fn test_height_single_line() {
        let s = section("capital", "Tokyo");
        assert_eq!(InfoSection::calculate_height(&s, 40), 2);
    }

    #[test]
    fn test_height_empty_value_still_takes_a_row() {
        let s = section("capital", "");
        assert_eq!(InfoSection::calculate_height(&s, 40), 2);
    }

    #[test]
    fn test_height_wraps_long_values() {
        let s = section("languages", "English, French, German, Italian, Romansh");
        // 24 value columns at width 38
        let height = InfoSection::calculate_height(&s, 38);
        assert_eq!(height, 2 + SPACING);
    }

    #[test]
    fn test_height_zero_width() {
        let s = section("name", "Japan");
        assert_eq!(InfoSection::calculate_height(&s, 0), 1 + SPACING);
    }

    #[test]
    fn test_render_label_and_value() {
        let s = section("capital", "Tokyo");
        let backend = TestBackend::new(40, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(InfoSection::new(&s, Theme::Dark), f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let first_row: String = (0..40)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(first_row.starts_with("Capital"));
        assert!(first_row.trim_end().ends_with("Tokyo"));
    }
}
