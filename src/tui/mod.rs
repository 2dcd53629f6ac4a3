//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on input, resize or a fetch result.
//!
//! ## Fetches
//!
//! Each `Effect::Fetch*` spawns one tokio task. The task sends its result back
//! over an mpsc channel as an `Action` tagged with the requesting `ScreenId`.
//! Abort handles are kept per screen and aborted on `Effect::Cancel`.

mod component;
pub mod components;
pub mod event;
pub mod palette;
mod ui;

use log::{debug, info, warn};
use std::collections::HashMap;
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::api::{CountryProvider, RestCountriesProvider};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::{App, ScreenId};
use crate::core::theme::Theme;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CountryListEvent, CountryListState, DetailViewState, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub country_list: CountryListState,
    pub detail_view: DetailViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(Theme::default()),
            country_list: CountryListState::default(),
            detail_view: DetailViewState::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement is ignored by terminals that don't support it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn CountryProvider> {
    let provider = RestCountriesProvider::new(Some(config.base_url.clone()));
    info!("Using {} at {}", provider.name(), provider.base_url());
    Arc::new(provider)
}

/// Owns the in-flight fetch tasks, one per screen.
struct Fetcher {
    tx: mpsc::Sender<Action>,
    in_flight: HashMap<ScreenId, AbortHandle>,
}

impl Fetcher {
    fn new(tx: mpsc::Sender<Action>) -> Self {
        Self {
            tx,
            in_flight: HashMap::new(),
        }
    }

    /// Carries out an effect. Returns true when the app should quit.
    fn apply(&mut self, app: &App, effect: Effect) -> bool {
        match effect {
            Effect::None => {}
            Effect::Quit => return true,
            Effect::FetchCountries(screen) => {
                let handle = spawn_countries_fetch(app.provider.clone(), screen, self.tx.clone());
                self.in_flight.insert(screen, handle);
            }
            Effect::FetchDetail { screen, name } => {
                let handle =
                    spawn_detail_fetch(app.provider.clone(), screen, name, self.tx.clone());
                self.in_flight.insert(screen, handle);
            }
            Effect::Cancel(screen) => {
                if let Some(handle) = self.in_flight.remove(&screen) {
                    debug!("Aborting fetch for screen {}", screen);
                    handle.abort();
                }
            }
        }
        false
    }

    /// Forget the handle of a screen whose result has arrived.
    fn finished(&mut self, action: &Action) {
        match action {
            Action::CountriesLoaded { screen, .. } | Action::DetailLoaded { screen, .. } => {
                self.in_flight.remove(screen);
            }
            _ => {}
        }
    }

    fn abort_all(&mut self) {
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::new(provider, config.theme);
    let mut tui = TuiState::new();

    let (tx, rx) = mpsc::channel();
    let mut fetcher = Fetcher::new(tx);

    // The list is always the bottom of the stack
    dispatch(&mut app, &mut tui, &mut fetcher, Action::Mount(Route::List));
    if let Route::Detail(_) = &config.start_route {
        dispatch(&mut app, &mut tui, &mut fetcher, Action::Mount(config.start_route.clone()));
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&event, &app, &mut tui)
                && dispatch(&mut app, &mut tui, &mut fetcher, action)
            {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Fetch results from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, &mut fetcher, action) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    fetcher.abort_all();
    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Applies one action and carries out its effect. Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, fetcher: &mut Fetcher, action: Action) -> bool {
    let search_changed = matches!(action, Action::SearchChanged(_));
    fetcher.finished(&action);

    let effect = update(app, action);

    if matches!(effect, Effect::FetchDetail { .. }) {
        tui.detail_view.reset();
    }
    let count = app.list.visible_count();
    if search_changed || tui.country_list.count != count {
        // Selection goes back to the top whenever the view changes
        tui.country_list.reset(count);
    }

    fetcher.apply(app, effect)
}

/// Turns one input event into an action for the visible screen.
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::ToggleTheme => return Some(Action::ToggleTheme),
        _ => {}
    }

    if app.detail.is_some() {
        if matches!(event, TuiEvent::Escape) {
            return Some(Action::Back);
        }
        tui.detail_view.handle_event(event);
        return None;
    }

    // Nothing to search or select until the list has arrived
    if app.list.countries.loaded().is_none() {
        return matches!(event, TuiEvent::Escape).then_some(Action::Quit);
    }

    match event {
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::PageUp
        | TuiEvent::PageDown
        | TuiEvent::Home
        | TuiEvent::End
        | TuiEvent::Submit => match tui.country_list.handle_event(event)? {
            CountryListEvent::Open(position) => {
                let country = app.list.visible_at(position)?;
                Some(Action::Mount(Route::Detail(country.name.clone())))
            }
        },
        _ => match tui.search_box.handle_event(event)? {
            SearchEvent::Changed(query) => Some(Action::SearchChanged(query)),
            SearchEvent::Dismiss => Some(Action::Quit),
        },
    }
}

fn spawn_countries_fetch(
    provider: Arc<dyn CountryProvider>,
    screen: ScreenId,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Fetching country list for screen {}", screen);
    let task = tokio::spawn(async move {
        let result = provider.load_countries().await;
        if tx.send(Action::CountriesLoaded { screen, result }).is_err() {
            warn!("Failed to deliver country list: receiver dropped");
        }
    });
    task.abort_handle()
}

fn spawn_detail_fetch(
    provider: Arc<dyn CountryProvider>,
    screen: ScreenId,
    name: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Fetching detail for '{}' (screen {})", name, screen);
    let task = tokio::spawn(async move {
        let result = provider.load_country_detail(&name).await;
        if tx.send(Action::DetailLoaded { screen, result }).is_err() {
            warn!("Failed to deliver detail for '{}': receiver dropped", name);
        }
    });
    task.abort_handle()
}
