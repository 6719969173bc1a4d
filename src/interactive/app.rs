//! Application state and logic for the interactive UI

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::text::Line;
use std::path::Path;

use crate::config::Config;
use crate::route::Route;
use crate::survey::Page;

use super::bar_chart;
use super::breakdown::Disclosure;
use super::document::{self, Anchor, Document};
use super::events::AppEvent;
use super::messages::{Message, MessageType};
use super::scroll::{max_scroll, ScrollAffordance};

const TOOLTIP_WIDTH: usize = 40;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal viewing/navigation mode
    Normal,
    /// Help screen
    Help,
}

/// Everything that belongs to the page on screen. Replaced wholesale on
/// navigation, so nothing carries over between pages.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub route: Route,
    /// One per breakdown on the page, in page order
    pub disclosures: Vec<Disclosure>,
    /// First visible row of the page
    pub scroll: usize,
    /// Index into the page's focusables
    pub focus: Option<usize>,
}

impl PageState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            disclosures: vec![Disclosure::default(); Page::for_route(route).breakdown_count()],
            scroll: 0,
            focus: None,
        }
    }
}

/// Main application state
pub struct App {
    pub page: PageState,
    pub mode: AppMode,
    /// Messages to display
    pub messages: Vec<Message>,
    pub config: Config,
    pub affordance: ScrollAffordance,
    /// Body size in cells (width, height)
    viewport: (u16, u16),
    document: Document,
}

impl App {
    pub fn new(config: Config, route: Route) -> Self {
        let mut app = App {
            page: PageState::new(route),
            mode: AppMode::Normal,
            messages: vec![Message::new(
                MessageType::Info,
                "Press ? for help, n/p to move focus",
            )],
            config,
            affordance: ScrollAffordance::default(),
            viewport: (80, 20),
            document: Document::default(),
        };
        app.rebuild();
        app
    }

    pub fn route(&self) -> Route {
        self.page.route
    }

    pub fn page(&self) -> Page {
        Page::for_route(self.page.route)
    }

    /// The current page laid out at the current viewport width
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport_height(&self) -> usize {
        usize::from(self.viewport.1)
    }

    /// Called before every draw with the size of the body pane
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        if self.viewport == (width, height) {
            return;
        }
        self.viewport = (width, height);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.document = document::build(
            self.page(),
            &self.page.disclosures,
            self.page.focus,
            self.viewport.0,
        );
        self.page.scroll = self.page.scroll.min(self.max_scroll());
        self.update_affordance();
    }

    fn max_scroll(&self) -> usize {
        max_scroll(self.viewport_height(), self.document.height())
    }

    fn update_affordance(&mut self) {
        self.affordance = ScrollAffordance::compute(
            self.page.scroll,
            self.viewport_height(),
            self.document.height(),
            usize::from(self.config.scroll_top_threshold),
            usize::from(self.config.scroll_bottom_threshold),
        );
    }

    /// Switch page with fresh state. Re-selecting the current page is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if route == self.page.route {
            return;
        }
        tracing::debug!(from = %self.page.route, to = %route, "navigate");
        self.page = PageState::new(route);
        self.rebuild();
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta < 0 {
            self.page.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.page.scroll.saturating_add(delta.unsigned_abs())
        };
        self.page.scroll = target.min(self.max_scroll());
        self.update_affordance();
    }

    pub fn scroll_to_top(&mut self) {
        self.page.scroll = 0;
        self.update_affordance();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.page.scroll = self.max_scroll();
        self.update_affordance();
    }

    fn page_step(&self) -> isize {
        self.viewport_height().saturating_sub(2).max(1) as isize
    }

    pub fn focus_next(&mut self) {
        let count = self.document.focusables.len();
        if count == 0 {
            return;
        }
        let next = match self.page.focus {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.set_focus(Some(next));
    }

    pub fn focus_previous(&mut self) {
        let count = self.document.focusables.len();
        if count == 0 {
            return;
        }
        let previous = match self.page.focus {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.set_focus(Some(previous));
    }

    pub fn clear_focus(&mut self) {
        self.set_focus(None);
    }

    fn set_focus(&mut self, focus: Option<usize>) {
        self.page.focus = focus;
        self.rebuild();
        if let Some(line) = focus.and_then(|f| self.document.line_of(f)) {
            let height = self.viewport_height().max(1);
            if line < self.page.scroll {
                self.page.scroll = line;
            } else if line >= self.page.scroll + height {
                self.page.scroll = line + 1 - height;
            }
            self.page.scroll = self.page.scroll.min(self.max_scroll());
            self.update_affordance();
        }
    }

    pub fn focused_anchor(&self) -> Option<Anchor> {
        self.page.focus.and_then(|f| self.document.anchor(f))
    }

    /// Row of the focused line relative to the top of the viewport
    pub fn focused_row(&self) -> Option<usize> {
        let line = self.page.focus.and_then(|f| self.document.line_of(f))?;
        line.checked_sub(self.page.scroll)
            .filter(|row| *row < self.viewport_height())
    }

    /// Flip breakdown `index` on the current page
    pub fn toggle_breakdown(&mut self, index: usize) {
        if let Some(disclosure) = self.page.disclosures.get_mut(index) {
            disclosure.toggle();
            tracing::debug!(index, visible = disclosure.is_visible(), "toggle breakdown");
            self.rebuild();
        }
    }

    /// Enter/Space on the focused item
    pub fn activate(&mut self) {
        match self.focused_anchor() {
            Some(Anchor::Toggle(index)) => self.toggle_breakdown(index),
            Some(Anchor::Pillar(route)) => self.navigate(route),
            Some(Anchor::Bar { .. }) | None => {}
        }
    }

    /// Tooltip body for the focused bar
    pub fn tooltip(&self) -> Option<Vec<Line<'static>>> {
        let Some(Anchor::Bar { card, item }) = self.focused_anchor() else {
            return None;
        };
        let Page::Section(section) = self.page() else {
            return None;
        };
        let chart = section.cards.get(card)?.chart.as_ref()?;
        let item = chart.items.get(item)?;
        Some(bar_chart::tooltip_lines(item, chart.unit, TOOLTIP_WIDTH))
    }

    /// Report where the full PDF lives and whether it is there
    pub fn show_report_link(&mut self) {
        let path = &self.config.report_path;
        let message = if Path::new(path).exists() {
            Message::new(MessageType::Success, format!("Full report: {}", path))
        } else {
            tracing::warn!(path = %path, "report file not found");
            Message::new(
                MessageType::Warning,
                format!("Full report not found at {}", path),
            )
        };
        self.messages.push(message);
    }

    pub fn prune_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired());
    }

    /// Apply one input event. Returns false when the user asked to quit.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Key(key) => match self.mode {
                AppMode::Normal => self.handle_normal_mode(key),
                AppMode::Help => self.handle_help_mode(key),
            },
            AppEvent::ScrollUp => {
                if self.mode == AppMode::Normal {
                    self.scroll_by(-3);
                }
                true
            }
            AppEvent::ScrollDown => {
                if self.mode == AppMode::Normal {
                    self.scroll_by(3);
                }
                true
            }
            AppEvent::Resize(..) => true,
        }
    }

    fn handle_normal_mode(&mut self, event: KeyEvent) -> bool {
        match event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                return false;
            }
            KeyCode::Char('?') => {
                self.mode = AppMode::Help;
            }
            // Pages
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                self.navigate(self.route().next());
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.navigate(self.route().previous());
            }
            KeyCode::Char(c @ '1'..='5') => {
                let n = c.to_digit(10).unwrap_or(1) as usize;
                if let Some(route) = Route::from_number(n) {
                    self.navigate(route);
                }
            }
            // Scrolling
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-self.page_step()),
            KeyCode::PageDown => self.scroll_by(self.page_step()),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            // Focus
            KeyCode::Char('n') => self.focus_next(),
            KeyCode::Char('p') => self.focus_previous(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Esc => self.clear_focus(),
            KeyCode::Char('d') | KeyCode::Char('D') => self.show_report_link(),
            _ => {}
        }
        true
    }

    fn handle_help_mode(&mut self, event: KeyEvent) -> bool {
        if matches!(
            event.code,
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
        ) {
            self.mode = AppMode::Normal;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app(route: Route) -> App {
        let mut app = App::new(Config::default(), route);
        app.set_viewport(100, 20);
        app
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_event(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn first_toggle(app: &App) -> usize {
        app.document()
            .focusables
            .iter()
            .position(|f| matches!(f.anchor, Anchor::Toggle(_)))
            .unwrap()
    }

    #[test]
    fn test_quit() {
        let mut app = app(Route::Overview);
        assert!(press(&mut app, KeyCode::Char('j')));
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_page_keys() {
        let mut app = app(Route::Overview);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::AboutYou);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.route(), Route::Satisfaction);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.route(), Route::ValuesViews);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.route(), Route::ValuesViews);
    }

    #[test]
    fn test_navigation_preserves_no_page_state() {
        let mut app = app(Route::AboutYou);
        app.toggle_breakdown(1);
        app.scroll_by(10);
        app.focus_next();
        assert_ne!(app.page, PageState::new(Route::AboutYou));

        app.navigate(Route::Overview);
        app.navigate(Route::AboutYou);
        assert_eq!(app.page, PageState::new(Route::AboutYou));
        assert!(app.page.disclosures.iter().all(|d| !d.is_visible()));
    }

    #[test]
    fn test_page_state_has_one_disclosure_per_breakdown() {
        assert_eq!(PageState::new(Route::AboutYou).disclosures.len(), 3);
        assert!(PageState::new(Route::Overview).disclosures.is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = app(Route::AboutYou);
        app.scroll_by(-5);
        assert_eq!(app.page.scroll, 0);
        app.scroll_by(100_000);
        let bottom = app.document().height() - 20;
        assert_eq!(app.page.scroll, bottom);
        app.scroll_to_top();
        assert_eq!(app.page.scroll, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.page.scroll, bottom);
    }

    #[test]
    fn test_affordance_follows_scroll() {
        let mut app = app(Route::AboutYou);
        assert!(!app.affordance.show_top);
        assert!(app.affordance.show_bottom);

        app.scroll_to_bottom();
        assert!(app.affordance.show_top);
        assert!(!app.affordance.show_bottom);

        app.scroll_by(-16);
        assert!(app.affordance.show_top);
        assert!(app.affordance.show_bottom);
    }

    #[test]
    fn test_mouse_wheel_scrolls() {
        let mut app = app(Route::YourSupport);
        app.handle_event(AppEvent::ScrollDown);
        assert_eq!(app.page.scroll, 3);
        app.handle_event(AppEvent::ScrollUp);
        assert_eq!(app.page.scroll, 0);
    }

    #[test]
    fn test_mouse_wheel_ignored_in_help() {
        let mut app = app(Route::YourSupport);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.handle_event(AppEvent::ScrollDown));
        assert_eq!(app.page.scroll, 0);
        press(&mut app, KeyCode::Esc);
        app.handle_event(AppEvent::ScrollDown);
        assert_eq!(app.page.scroll, 3);
    }

    #[test]
    fn test_focus_cycles_and_stays_visible() {
        let mut app = app(Route::AboutYou);
        app.focus_next();
        assert_eq!(app.focused_anchor(), Some(Anchor::Bar { card: 0, item: 0 }));
        assert!(app.tooltip().is_some());

        app.focus_previous();
        let last = app.document().focusables.len() - 1;
        assert_eq!(app.page.focus, Some(last));
        assert!(app.focused_row().is_some());
        assert!(app.page.scroll > 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.page.focus, None);
        assert!(app.tooltip().is_none());
    }

    #[test]
    fn test_enter_toggles_focused_breakdown() {
        let mut app = app(Route::AboutYou);
        let before = app.document().height();
        app.set_focus(Some(first_toggle(&app)));
        press(&mut app, KeyCode::Enter);
        assert!(app.page.disclosures[0].is_visible());
        assert!(app.document().height() > before);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.page.disclosures[0].is_visible());
        assert_eq!(app.document().height(), before);
    }

    #[test]
    fn test_enter_on_pillar_navigates() {
        let mut app = app(Route::Overview);
        app.focus_next();
        assert_eq!(app.focused_anchor(), Some(Anchor::Pillar(Route::AboutYou)));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), Route::AboutYou);
        assert_eq!(app.page.focus, None);
    }

    #[test]
    fn test_help_mode() {
        let mut app = app(Route::Overview);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route(), Route::Overview);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_report_link_warns_when_missing() {
        let config = Config {
            report_path: "/nonexistent/report.pdf".to_string(),
            ..Config::default()
        };
        let mut app = App::new(config, Route::Overview);
        press(&mut app, KeyCode::Char('d'));
        let last = app.messages.last().unwrap();
        assert_eq!(last.message_type, MessageType::Warning);
        assert!(last.text.contains("/nonexistent/report.pdf"));
    }

    #[test]
    fn test_report_link_found() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config {
            report_path: file.path().display().to_string(),
            ..Config::default()
        };
        let mut app = App::new(config, Route::Overview);
        app.show_report_link();
        assert_eq!(app.messages.last().unwrap().message_type, MessageType::Success);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut app = app(Route::ValuesViews);
        let wide = app.document().height();
        app.set_viewport(40, 20);
        assert!(app.document().height() > wide);
    }
}
