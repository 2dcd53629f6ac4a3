//! # Actions
//!
//! Everything that can happen in Atlas becomes an `Action`.
//! A screen appears? That's `Action::Mount(route)`.
//! The service answers? That's `Action::CountriesLoaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter must carry out. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every fetch result is tagged with the `ScreenId` that asked for it. If that
//! screen is gone by the time the result arrives, the result is dropped.

use log::{debug, info};

use crate::api::FetchError;
use crate::core::country::{Country, CountryDetail};
use crate::core::route::Route;
use crate::core::state::{App, DetailScreen, ScreenId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A screen becomes visible and runs its one fetch.
    Mount(Route),
    CountriesLoaded {
        screen: ScreenId,
        result: Result<Vec<Country>, FetchError>,
    },
    DetailLoaded {
        screen: ScreenId,
        result: Result<Option<CountryDetail>, FetchError>,
    },
    SearchChanged(String),
    /// Leave the detail screen.
    Back,
    ToggleTheme,
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchCountries(ScreenId),
    FetchDetail { screen: ScreenId, name: String },
    /// The screen was unmounted; abort whatever it still has in flight.
    Cancel(ScreenId),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount(Route::List) => {
            if app.list.countries.start() {
                info!("Mounted list screen {}", app.list.id);
                Effect::FetchCountries(app.list.id)
            } else {
                debug!("List screen already mounted, not fetching again");
                Effect::None
            }
        }
        Action::Mount(Route::Detail(name)) => {
            if let Some(open) = &app.detail {
                debug!(
                    "Detail screen for '{}' already open, ignoring '{}'",
                    open.name, name
                );
                return Effect::None;
            }
            let id = app.allocate_screen_id();
            let mut screen = DetailScreen::new(id, name.clone());
            screen.country.start();
            app.detail = Some(screen);
            info!("Mounted detail screen {} for '{}'", id, name);
            Effect::FetchDetail { screen: id, name }
        }
        Action::CountriesLoaded { screen, result } => {
            if screen != app.list.id {
                debug!("Dropping countries for unmounted screen {}", screen);
                return Effect::None;
            }
            if let Err(e) = &result {
                info!("Country list failed: {}", e);
            }
            app.list.settle(result);
            Effect::None
        }
        Action::DetailLoaded { screen, result } => {
            let Some(detail) = app.detail.as_mut().filter(|d| d.id == screen) else {
                debug!("Dropping detail for unmounted screen {}", screen);
                return Effect::None;
            };
            if let Err(e) = &result {
                info!("Detail for '{}' failed: {}", detail.name, e);
            }
            detail.country.settle(result);
            Effect::None
        }
        Action::SearchChanged(query) => {
            if !app.list.set_search(query) {
                debug!("Search ignored, list not loaded");
            }
            Effect::None
        }
        Action::Back => match app.detail.take() {
            Some(detail) => {
                info!("Unmounted detail screen {} ('{}')", detail.id, detail.name);
                Effect::Cancel(detail.id)
            }
            None => Effect::None,
        },
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            info!("Theme switched to {}", app.theme);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{FetchState, LIST_NOT_FOUND};
    use crate::core::theme::Theme;
    use crate::test_support::{japan, sample_countries, test_app};

    #[test]
    fn test_mount_list_fetches_once() {
        let mut app = test_app();
        let id = app.list.id;
        assert_eq!(update(&mut app, Action::Mount(Route::List)), Effect::FetchCountries(id));
        assert!(app.list.countries.is_loading());
        assert_eq!(update(&mut app, Action::Mount(Route::List)), Effect::None);
    }

    #[test]
    fn test_countries_loaded_then_search() {
        let mut app = test_app();
        let id = app.list.id;
        update(&mut app, Action::Mount(Route::List));
        update(
            &mut app,
            Action::CountriesLoaded {
                screen: id,
                result: Ok(sample_countries()),
            },
        );
        assert_eq!(app.list.visible_count(), 2);

        update(&mut app, Action::SearchChanged("fra".to_string()));
        let names: Vec<&str> = app.list.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["France"]);
    }

    #[test]
    fn test_list_not_found_shows_failure_message() {
        let mut app = test_app();
        let id = app.list.id;
        update(&mut app, Action::Mount(Route::List));
        update(
            &mut app,
            Action::CountriesLoaded {
                screen: id,
                result: Err(FetchError::NotFound),
            },
        );
        assert_eq!(app.list.notice(), Some(LIST_NOT_FOUND));
        assert!(app.list.visible().is_empty());
    }

    #[test]
    fn test_search_before_load_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Mount(Route::List));
        assert_eq!(update(&mut app, Action::SearchChanged("x".to_string())), Effect::None);
        assert!(app.list.search.is_empty());
    }

    #[test]
    fn test_mount_detail_fetches_by_name() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Mount(Route::Detail("Japan".to_string())));
        let Effect::FetchDetail { screen, name } = effect else {
            panic!("expected FetchDetail, got {effect:?}");
        };
        assert_eq!(name, "Japan");
        assert_eq!(app.detail.as_ref().map(|d| d.id), Some(screen));
        assert!(app.is_loading());
        assert_eq!(app.current_route(), Route::Detail("Japan".to_string()));
    }

    #[test]
    fn test_second_detail_mount_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Mount(Route::Detail("Japan".to_string())));
        let effect = update(&mut app, Action::Mount(Route::Detail("France".to_string())));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.detail.as_ref().map(|d| d.name.as_str()), Some("Japan"));
    }

    #[test]
    fn test_detail_loaded_settles_screen() {
        let mut app = test_app();
        let Effect::FetchDetail { screen, .. } =
            update(&mut app, Action::Mount(Route::Detail("Japan".to_string())))
        else {
            panic!("expected FetchDetail");
        };
        update(
            &mut app,
            Action::DetailLoaded {
                screen,
                result: Ok(Some(japan())),
            },
        );
        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.country, FetchState::Loaded(Some(japan())));
        assert!(!app.is_loading());
    }

    #[test]
    fn test_back_cancels_and_late_result_is_dropped() {
        let mut app = test_app();
        let Effect::FetchDetail { screen, .. } =
            update(&mut app, Action::Mount(Route::Detail("Japan".to_string())))
        else {
            panic!("expected FetchDetail");
        };
        assert_eq!(update(&mut app, Action::Back), Effect::Cancel(screen));
        assert!(app.detail.is_none());

        // Reopen; the stale answer for the old instance must not land here
        update(&mut app, Action::Mount(Route::Detail("Japan".to_string())));
        update(
            &mut app,
            Action::DetailLoaded {
                screen,
                result: Ok(Some(japan())),
            },
        );
        assert!(app.detail.as_ref().unwrap().country.is_loading());
    }

    #[test]
    fn test_countries_for_other_screen_are_dropped() {
        let mut app = test_app();
        update(&mut app, Action::Mount(Route::List));
        update(
            &mut app,
            Action::CountriesLoaded {
                screen: 999,
                result: Ok(sample_countries()),
            },
        );
        assert!(app.list.countries.is_loading());
    }

    #[test]
    fn test_back_on_list_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Back), Effect::None);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Dark);
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
