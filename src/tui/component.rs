use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the screen.
///
/// Data arrives as struct fields ("props"), the active `Theme` among them.
/// Nothing is read from `App` directly, so every component renders the same
/// way under `TestBackend` as in the terminal.
///
/// `render` takes `&mut self` so wrappers around persistent state (list
/// selection, scroll offsets) can record layout facts such as the viewport
/// height while drawing, the way ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes input and may answer with a higher-level event.
///
/// Keys a handler does not care about return `None` and are left for the
/// caller to route elsewhere.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
