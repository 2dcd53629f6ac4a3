//! # CountryItem Component
//!
//! One row of the country list: flag marker and name on the first line, capital
//! on the second. Transient: built per visible row each frame from a borrowed
//! `Country`.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::UnicodeWidthStr;

use crate::core::country::Country;
use crate::core::theme::Theme;
use crate::tui::palette::Palette;

const FLAG_MARKER: &str = "⚑ ";

/// Rows are two lines tall.
pub const ITEM_HEIGHT: u16 = 2;

#[derive(Clone, Copy)]
pub struct CountryItem<'a> {
    pub country: &'a Country,
    pub is_selected: bool,
    pub theme: Theme,
}

impl<'a> CountryItem<'a> {
    pub fn new(country: &'a Country, is_selected: bool, theme: Theme) -> Self {
        Self {
            country,
            is_selected,
            theme,
        }
    }

    /// Builds the list row, truncated to `width` columns.
    pub fn to_list_item(self, width: u16) -> ListItem<'a> {
        let palette = Palette::for_theme(self.theme);
        let (name_style, detail_style) = if self.is_selected {
            (palette.selected(), palette.selected().remove_modifier(Modifier::BOLD))
        } else {
            (palette.title(), palette.secondary())
        };

        let text_width = (width as usize).saturating_sub(FLAG_MARKER.width());
        let name = truncate_to_width(&self.country.name, text_width);
        let capital = truncate_to_width(self.country.capital.as_deref().unwrap_or(""), text_width);

        let name_line = Line::from(vec![
            Span::styled(FLAG_MARKER, name_style),
            Span::styled(pad_to_width(&name, text_width), name_style),
        ]);
        let capital_line = Line::from(vec![
            Span::styled(" ".repeat(FLAG_MARKER.width()), detail_style),
            Span::styled(pad_to_width(&capital, text_width), detail_style),
        ]);

        ListItem::new(vec![name_line, capital_line])
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}
