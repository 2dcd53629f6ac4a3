//! # Application State
//!
//! Core business state for Atlas. Domain logic only, no TUI types.
//! Presentation state (selection, scroll, search cursor) lives in `tui`.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn CountryProvider>   // remote data source
//! ├── theme: Theme                         // light/dark, passed down as a prop
//! ├── list: ListScreen                     // always mounted, bottom of the stack
//! │   ├── countries: FetchState<Vec<Country>>
//! │   ├── search: String
//! │   └── filtered: Vec<usize>             // indices into the loaded list
//! └── detail: Option<DetailScreen>         // mounted on top of the list
//!     ├── name: String
//!     └── country: FetchState<Option<CountryDetail>>
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{CountryProvider, FetchError};
use crate::core::country::{Country, CountryDetail};
use crate::core::filter::matching_indices;
use crate::core::route::Route;
use crate::core::theme::Theme;

/// Identifies one mounted screen instance. Fetch results carry it back so a
/// result for a screen that has since gone away can be recognised and dropped.
pub type ScreenId = u64;

pub const LIST_NOT_FOUND: &str = "Failed to fetch countries";
pub const DETAIL_NOT_FOUND: &str = "Country not found";
pub const GENERIC_ERROR: &str = "An error occurred";
pub const LIST_NO_DATA: &str = "No countries found";
pub const DETAIL_NO_DATA: &str = "No country found";

/// `Idle → Loading → {Loaded, Failed}`.
///
/// There is no way back to `Loading`: a new fetch needs a new screen.
/// A request that never resolves leaves the screen in `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    /// Moves `Idle` to `Loading`. Returns false (and changes nothing) from any other state.
    pub fn start(&mut self) -> bool {
        if matches!(self, FetchState::Idle) {
            *self = FetchState::Loading;
            true
        } else {
            false
        }
    }

    /// Moves `Loading` to a terminal state. Returns false (and changes nothing) otherwise.
    pub fn settle(&mut self, result: Result<T, FetchError>) -> bool {
        if !matches!(self, FetchState::Loading) {
            return false;
        }
        *self = match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => FetchState::Failed(e),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub struct ListScreen {
    pub id: ScreenId,
    pub countries: FetchState<Vec<Country>>,
    pub search: String,
    /// The filtered view: positions in the loaded list, in list order.
    pub filtered: Vec<usize>,
}

impl ListScreen {
    pub fn new(id: ScreenId) -> Self {
        Self {
            id,
            countries: FetchState::Idle,
            search: String::new(),
            filtered: Vec::new(),
        }
    }

    /// Replaces the search string and recomputes the view. No-op until loaded.
    pub fn set_search(&mut self, query: String) -> bool {
        let Some(all) = self.countries.loaded() else {
            return false;
        };
        self.filtered = matching_indices(all, Some(&query));
        self.search = query;
        true
    }

    /// Applies the fetch result. A success shows the whole list.
    pub fn settle(&mut self, result: Result<Vec<Country>, FetchError>) -> bool {
        if !self.countries.settle(result) {
            return false;
        }
        self.filtered = match self.countries.loaded() {
            Some(all) => (0..all.len()).collect(),
            None => Vec::new(),
        };
        true
    }

    pub fn visible(&self) -> Vec<&Country> {
        match self.countries.loaded() {
            Some(all) => self.filtered.iter().filter_map(|&i| all.get(i)).collect(),
            None => Vec::new(),
        }
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// The country at `position` within the filtered view.
    pub fn visible_at(&self, position: usize) -> Option<&Country> {
        let index = *self.filtered.get(position)?;
        self.countries.loaded()?.get(index)
    }

    /// Text replacing the whole screen body, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match &self.countries {
            FetchState::Failed(e) => Some(list_error_message(e)),
            FetchState::Loaded(all) if all.is_empty() => Some(LIST_NO_DATA),
            _ => None,
        }
    }
}

pub struct DetailScreen {
    pub id: ScreenId,
    pub name: String,
    pub country: FetchState<Option<CountryDetail>>,
}

impl DetailScreen {
    pub fn new(id: ScreenId, name: String) -> Self {
        Self {
            id,
            name,
            country: FetchState::Idle,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match &self.country {
            FetchState::Failed(e) => Some(detail_error_message(e)),
            FetchState::Loaded(None) => Some(DETAIL_NO_DATA),
            _ => None,
        }
    }
}

/// User-facing text for a list fetch failure.
pub fn list_error_message(error: &FetchError) -> &'static str {
    if error.is_not_found() {
        LIST_NOT_FOUND
    } else {
        GENERIC_ERROR
    }
}

/// User-facing text for a detail fetch failure.
pub fn detail_error_message(error: &FetchError) -> &'static str {
    if error.is_not_found() {
        DETAIL_NOT_FOUND
    } else {
        GENERIC_ERROR
    }
}

pub struct App {
    pub provider: Arc<dyn CountryProvider>,
    pub theme: Theme,
    pub list: ListScreen,
    pub detail: Option<DetailScreen>,
    next_screen_id: ScreenId,
}

impl App {
    pub fn new(provider: Arc<dyn CountryProvider>, theme: Theme) -> Self {
        Self {
            provider,
            theme,
            list: ListScreen::new(0),
            detail: None,
            next_screen_id: 1,
        }
    }

    /// Hands out a fresh id for a screen about to be mounted.
    pub fn allocate_screen_id(&mut self) -> ScreenId {
        let id = self.next_screen_id;
        self.next_screen_id += 1;
        id
    }

    /// The route of the screen on top of the stack.
    pub fn current_route(&self) -> Route {
        match &self.detail {
            Some(detail) => Route::Detail(detail.name.clone()),
            None => Route::List,
        }
    }

    /// True while the visible screen waits on the network.
    pub fn is_loading(&self) -> bool {
        match &self.detail {
            Some(detail) => detail.country.is_loading(),
            None => self.list.countries.is_loading(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_countries, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.theme, Theme::Light);
        assert!(matches!(app.list.countries, FetchState::Idle));
        assert!(app.detail.is_none());
        assert_eq!(app.current_route(), Route::List);
    }

    #[test]
    fn test_screen_ids_are_unique() {
        let mut app = test_app();
        let a = app.allocate_screen_id();
        let b = app.allocate_screen_id();
        assert_ne!(a, b);
        assert_ne!(a, app.list.id);
    }

    #[test]
    fn test_fetch_state_transitions() {
        let mut state: FetchState<u8> = FetchState::Idle;
        assert!(!state.settle(Ok(1)), "cannot settle before starting");
        assert!(state.start());
        assert!(state.is_loading());
        assert!(!state.start(), "cannot start twice");
        assert!(state.settle(Ok(7)));
        assert_eq!(state.loaded(), Some(&7));
    }

    #[test]
    fn test_fetch_state_terminal_states_stick() {
        let mut state: FetchState<u8> = FetchState::Idle;
        state.start();
        state.settle(Err(FetchError::NotFound));
        assert!(!state.start());
        assert!(!state.settle(Ok(1)));
        assert_eq!(state.error(), Some(&FetchError::NotFound));
    }

    #[test]
    fn test_list_settle_shows_everything() {
        let mut list = ListScreen::new(0);
        list.countries.start();
        assert!(list.settle(Ok(sample_countries())));
        assert_eq!(list.visible_count(), 2);
        assert_eq!(list.visible_at(1).map(|c| c.name.as_str()), Some("Germany"));
        assert!(list.visible_at(2).is_none());
    }

    #[test]
    fn test_list_search_filters_view() {
        let mut list = ListScreen::new(0);
        list.countries.start();
        list.settle(Ok(sample_countries()));

        assert!(list.set_search("fra".to_string()));
        let names: Vec<&str> = list.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["France"]);

        list.set_search(String::new());
        assert_eq!(list.visible_count(), 2);
        // The canonical list is untouched by filtering
        assert_eq!(list.countries.loaded().map(Vec::len), Some(2));
    }

    #[test]
    fn test_list_search_ignored_before_load() {
        let mut list = ListScreen::new(0);
        list.countries.start();
        assert!(!list.set_search("fra".to_string()));
        assert!(list.search.is_empty());
    }

    #[test]
    fn test_list_failure_clears_view() {
        let mut list = ListScreen::new(0);
        list.countries.start();
        list.settle(Err(FetchError::NotFound));
        assert!(list.visible().is_empty());
        assert_eq!(list.notice(), Some(LIST_NOT_FOUND));
    }

    #[test]
    fn test_list_notices() {
        let mut list = ListScreen::new(0);
        assert_eq!(list.notice(), None);
        list.countries.start();
        list.settle(Ok(Vec::new()));
        assert_eq!(list.notice(), Some(LIST_NO_DATA));

        let mut list = ListScreen::new(0);
        list.countries.start();
        list.settle(Err(FetchError::Network("reset".to_string())));
        assert_eq!(list.notice(), Some(GENERIC_ERROR));
    }

    #[test]
    fn test_detail_notices() {
        let mut detail = DetailScreen::new(1, "Atlantis".to_string());
        detail.country.start();
        detail.country.settle(Err(FetchError::NotFound));
        assert_eq!(detail.notice(), Some(DETAIL_NOT_FOUND));

        let mut detail = DetailScreen::new(2, "Atlantis".to_string());
        detail.country.start();
        detail.country.settle(Ok(None));
        assert_eq!(detail.notice(), Some(DETAIL_NO_DATA));

        let mut detail = DetailScreen::new(3, "Japan".to_string());
        detail.country.start();
        detail.country.settle(Err(FetchError::Parse("eof".to_string())));
        assert_eq!(detail.notice(), Some(GENERIC_ERROR));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(list_error_message(&FetchError::NotFound), "Failed to fetch countries");
        assert_eq!(detail_error_message(&FetchError::NotFound), "Country not found");
        let api = FetchError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(list_error_message(&api), "An error occurred");
        assert_eq!(detail_error_message(&api), "An error occurred");
    }
}
