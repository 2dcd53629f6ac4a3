use crate::core::state::{App, DetailScreen, FetchState, ListScreen};
use crate::core::theme::Theme;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    CountryList, DetailView, Loader, Notice, NoticeKind, TitleBar,
};
use crate::tui::palette::Palette;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub const LIST_TITLE: &str = "All Countries";
pub const DETAIL_TITLE: &str = "Country Detail";
const LIST_HINTS: &str = "Enter Open  Esc Clear/Quit";
const DETAIL_HINTS: &str = "Esc Back";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let palette = Palette::for_theme(app.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let (title, hints) = if app.detail.is_some() {
        (DETAIL_TITLE, DETAIL_HINTS)
    } else {
        (LIST_TITLE, LIST_HINTS)
    };
    TitleBar::new(title, hints, app.theme).render(frame, title_area);

    match &app.detail {
        Some(detail) => draw_detail(frame, body_area, detail, app.theme, tui, spinner_frame),
        None => draw_list(frame, body_area, &app.list, app.theme, tui, spinner_frame),
    }
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    list: &ListScreen,
    theme: Theme,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    if let Some(message) = list.notice() {
        let kind = notice_kind(&list.countries);
        Notice::new(message, kind, theme).render(frame, area);
        return;
    }
    if list.countries.loaded().is_none() {
        Loader::new("countries", spinner_frame, theme).render(frame, area);
        return;
    }

    use Constraint::{Length, Min};
    let [header_area, search_area, list_area] =
        Layout::vertical([Length(2), Length(3), Min(0)]).areas(area);

    let palette = Palette::for_theme(theme);
    let header = Line::styled(CountryList::header(list.visible_count()), palette.title());
    frame.render_widget(Paragraph::new(header).style(palette.base()), header_area);

    tui.search_box.theme = theme;
    tui.search_box.render(frame, search_area);

    let visible = list.visible();
    CountryList::new(&mut tui.country_list, &visible, theme).render(frame, list_area);
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailScreen,
    theme: Theme,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    if let Some(message) = detail.notice() {
        let kind = notice_kind(&detail.country);
        Notice::new(message, kind, theme).render(frame, area);
        return;
    }
    match detail.country.loaded() {
        Some(Some(country)) => {
            DetailView::new(&mut tui.detail_view, country, theme).render(frame, area);
        }
        _ => Loader::new(detail.name.as_str(), spinner_frame, theme).render(frame, area),
    }
}

fn notice_kind<T>(state: &FetchState<T>) -> NoticeKind {
    if state.error().is_some() {
        NoticeKind::Error
    } else {
        NoticeKind::Empty
    }
}
