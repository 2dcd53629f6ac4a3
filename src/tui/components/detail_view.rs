//! # DetailView Component
//!
//! Body of the detail screen: the flag URL line followed by the six
//! `InfoSection` rows, inside a vertical `ScrollView`.
//!
//! `DetailViewState` lives in `TuiState` and is reset whenever a detail screen
//! is mounted. `DetailView` is created each frame with borrowed state.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::country::CountryDetail;
use crate::core::section::detail_sections;
use crate::core::theme::Theme;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::country_item::truncate_to_width;
use crate::tui::components::info_section::InfoSection;
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

const FLAG_LABEL: &str = "Flag  ";
/// Flag line plus a blank row.
const FLAG_HEIGHT: u16 = 2;

#[derive(Default)]
pub struct DetailViewState {
    pub scroll_state: ScrollViewState,
    /// Content height from the last render, for clamping.
    pub content_height: u16,
    /// Viewport height from the last render.
    pub viewport_height: u16,
}

impl DetailViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Never scroll past the last row.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }
}

impl EventHandler for DetailViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => {
                let max_y = self.content_height.saturating_sub(self.viewport_height);
                self.scroll_state.set_offset(Position { x: 0, y: max_y });
            }
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct DetailView<'a> {
    state: &'a mut DetailViewState,
    country: &'a CountryDetail,
    theme: Theme,
}

impl<'a> DetailView<'a> {
    pub fn new(state: &'a mut DetailViewState, country: &'a CountryDetail, theme: Theme) -> Self {
        Self {
            state,
            country,
            theme,
        }
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);
        frame.render_widget(Block::default().style(palette.base()), area);

        // -1 for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let sections = detail_sections(self.country);
        let heights: Vec<u16> = sections
            .iter()
            .map(|s| InfoSection::calculate_height(s, content_width))
            .collect();
        let total_height = FLAG_HEIGHT + heights.iter().sum::<u16>();

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        let canvas = Rect::new(0, 0, content_width, total_height);
        scroll_view.render_widget(Block::default().style(palette.base()), canvas);

        let url_width = (content_width as usize).saturating_sub(FLAG_LABEL.len());
        let flag_line = Line::from(vec![
            Span::styled(FLAG_LABEL, palette.title()),
            Span::styled(
                truncate_to_width(&self.country.flag_url, url_width),
                palette.secondary(),
            ),
        ]);
        scroll_view.render_widget(Paragraph::new(flag_line), Rect::new(0, 0, content_width, 1));

        let mut y = FLAG_HEIGHT;
        for (section, height) in sections.iter().zip(heights) {
            let rect = Rect::new(0, y, content_width, height);
            scroll_view.render_widget(InfoSection::new(section, self.theme), rect);
            y += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
