//! # CountryList Component
//!
//! Scrollable, selectable list of the countries that pass the current search.
//! The "Visit (n) countries" header is drawn by the screen above the search box.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState`
//! - `CountryList` is created each frame with borrowed state and the visible rows

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{List, ListState};

use crate::core::country::Country;
use crate::core::theme::Theme;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::country_item::{CountryItem, ITEM_HEIGHT};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// Persistent selection state for the country list.
#[derive(Default)]
pub struct CountryListState {
    pub list_state: ListState,
    /// Position within the filtered view.
    pub selected: usize,
    /// Number of rows in the filtered view.
    pub count: usize,
    /// Rows that fit the last rendered viewport, used for paging.
    pub page_rows: usize,
}

impl CountryListState {
    /// Resets the selection to the top of a view with `count` rows.
    /// Called whenever the filtered view changes.
    pub fn reset(&mut self, count: usize) {
        self.count = count;
        self.select(0);
    }

    pub fn select(&mut self, position: usize) {
        if self.count == 0 {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        self.selected = position.min(self.count - 1);
        self.list_state.select(Some(self.selected));
    }

    fn page(&self) -> usize {
        self.page_rows.max(1)
    }
}

/// Events emitted by the country list.
#[derive(Debug, Clone, PartialEq)]
pub enum CountryListEvent {
    /// Open the row at this position in the filtered view.
    Open(usize),
}

impl EventHandler for CountryListState {
    type Event = CountryListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.select(self.selected.saturating_sub(1)),
            TuiEvent::CursorDown => self.select(self.selected + 1),
            TuiEvent::PageUp => self.select(self.selected.saturating_sub(self.page())),
            TuiEvent::PageDown => self.select(self.selected + self.page()),
            TuiEvent::Home => self.select(0),
            TuiEvent::End => self.select(self.count.saturating_sub(1)),
            TuiEvent::Submit if self.count > 0 => {
                return Some(CountryListEvent::Open(self.selected));
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper over the visible rows.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    countries: &'a [&'a Country],
    theme: Theme,
}

impl<'a> CountryList<'a> {
    pub fn new(state: &'a mut CountryListState, countries: &'a [&'a Country], theme: Theme) -> Self {
        Self {
            state,
            countries,
            theme,
        }
    }

    pub fn header(count: usize) -> String {
        format!("Visit ({count}) countries")
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let palette = Palette::for_theme(self.theme);

        // Keep state in step with what is actually drawn
        if self.state.count != self.countries.len() {
            self.state.reset(self.countries.len());
        }
        self.state.page_rows = (area.height / ITEM_HEIGHT) as usize;

        let items: Vec<_> = self
            .countries
            .iter()
            .enumerate()
            .map(|(i, country)| {
                CountryItem::new(country, i == self.state.selected, self.theme)
                    .to_list_item(area.width)
            })
            .collect();

        let list = List::new(items).style(palette.base());
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
