//! # SearchBox Component
//!
//! Single-line search field above the country list.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text
//! - Emit the full query after every change (the list refilters per keystroke)
//! - Esc clears a non-empty query, or asks to quit when already empty
//!
//! ## State Management
//!
//! The buffer is internal state. The theme is a prop.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::theme::Theme;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

const PLACEHOLDER: &str = "Search country";
const PROMPT: &str = "> ";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The query changed; carries the whole new query.
    Changed(String),
    /// Esc on an empty query.
    Dismiss,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Active theme (Prop)
    pub theme: Theme,
}

impl SearchBox {
    pub fn new(theme: Theme) -> Self {
        Self {
            buffer: String::new(),
            theme,
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(palette.base().fg(palette.border))
            .style(palette.base());

        let inner_width = area.width.saturating_sub(2) as usize;
        let text = if self.buffer.is_empty() {
            Span::styled(
                format!("{PROMPT}{PLACEHOLDER}"),
                palette.secondary().add_modifier(Modifier::ITALIC),
            )
        } else {
            // Keep the tail visible when the query outgrows the box
            let mut visible = self.buffer.as_str();
            while visible.width() > inner_width.saturating_sub(PROMPT.len()) && !visible.is_empty() {
                let mut chars = visible.chars();
                chars.next();
                visible = chars.as_str();
            }
            Span::styled(format!("{PROMPT}{visible}"), palette.base())
        };

        frame.render_widget(Paragraph::new(text).block(block), area);

        if area.width > 2 && area.height > 2 {
            let query_width = if self.buffer.is_empty() {
                0
            } else {
                self.buffer.width().min(inner_width.saturating_sub(PROMPT.len()))
            };
            let x = area.x + 1 + PROMPT.len() as u16 + query_width as u16;
            let x = x.min(area.x + area.width.saturating_sub(2));
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line only
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.push_str(&line);
                self.changed()
            }
            TuiEvent::Backspace => self.buffer.pop().and_then(|_| self.changed()),
            TuiEvent::Escape => {
                if self.buffer.is_empty() {
                    Some(SearchEvent::Dismiss)
                } else {
                    self.buffer.clear();
                    self.changed()
                }
            }
            _ => None,
        }
    }
}
