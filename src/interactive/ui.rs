//! Main UI rendering logic

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};
use std::rc::Rc;

use super::app::{App, AppMode};
use super::utils::get_message_style;
use crate::route::Route;
use crate::theme;

const LOGO: &str = " AA Survey Dashboard ";

fn layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Page body
            Constraint::Length(3), // Messages
            Constraint::Length(3), // Footer
        ])
        .split(area)
}

fn body_block(app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", app.page().title()))
        .border_style(Style::default().fg(theme::SECONDARY))
}

/// Inner size of the page body for a terminal of `area`
pub fn body_viewport(area: Rect) -> (u16, u16) {
    let body = layout(area)[1];
    (body.width.saturating_sub(2), body.height.saturating_sub(2))
}

/// Main draw function
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = layout(f.size());

    render_header(f, app, chunks[0]);

    match app.mode {
        AppMode::Help => render_help(f, chunks[1]),
        AppMode::Normal => render_body(f, app, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
}

/// Navigation bar: one tab per page, active tab highlighted
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!("{} {}", i + 1, r.nav_label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.route().index())
        .style(Style::default().fg(theme::NAV_TEXT).bg(theme::NAV_BACKGROUND))
        .highlight_style(
            Style::default()
                .bg(theme::NAV_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme::NAV_BACKGROUND))
                .border_style(Style::default().fg(theme::NAV_TEXT))
                .title(Span::styled(
                    LOGO,
                    Style::default()
                        .fg(theme::NAV_TEXT)
                        .add_modifier(Modifier::BOLD),
                ))
                .title(Title::from(" ⤓ Report (d) ").alignment(Alignment::Right)),
        );

    f.render_widget(tabs, area);
}

/// The scrolled page, plus the tooltip and jump buttons on top of it
fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let block = body_block(app);
    let inner = block.inner(area);

    let doc = app.document();
    let start = app.page.scroll.min(doc.height());
    let end = (start + usize::from(inner.height)).min(doc.height());
    let visible = doc.lines[start..end].to_vec();

    f.render_widget(Paragraph::new(visible).block(block), area);

    if let (Some(lines), Some(row)) = (app.tooltip(), app.focused_row()) {
        render_tooltip(f, lines, inner, row as u16);
    }

    if app.affordance.show_top {
        render_jump_button(f, " ▲ Top (g) ", inner, true);
    }
    if app.affordance.show_bottom {
        render_jump_button(f, " ▼ End (G) ", inner, false);
    }
}

/// Popup beside the focused bar; below it when there is room, else above
fn render_tooltip(f: &mut Frame, lines: Vec<Line<'static>>, inner: Rect, row: u16) {
    let width = lines
        .iter()
        .map(|l| l.width() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(2)
        .min(inner.width);
    let height = (lines.len() as u16 + 2).min(inner.height);
    let below = inner.y + row + 1;
    let y = if below + height <= inner.y + inner.height {
        below
    } else {
        (inner.y + row).saturating_sub(height).max(inner.y)
    };
    let popup = Rect {
        x: inner.x + inner.width.saturating_sub(width + 1),
        y,
        width,
        height,
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::TERTIARY))
            .style(Style::default().bg(Color::Black)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn render_jump_button(f: &mut Frame, label: &str, inner: Rect, top: bool) {
    let width = (label.chars().count() as u16).min(inner.width);
    if inner.height == 0 || width == 0 {
        return;
    }
    let area = Rect {
        x: inner.x + inner.width - width,
        y: if top { inner.y } else { inner.y + inner.height - 1 },
        width,
        height: 1,
    };
    let button = Paragraph::new(label.to_string()).style(
        Style::default()
            .fg(theme::NAV_TEXT)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(Clear, area);
    f.render_widget(button, area);
}

/// Render the help screen
fn render_help(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
    };
    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(theme::ACCENT),
        )),
        Line::from(""),
        section("Pages:"),
        Line::from("  ←/→ or h/l    Previous / next page"),
        Line::from("  Tab/Shift+Tab Next / previous page"),
        Line::from("  1-5           Jump to page"),
        Line::from(""),
        section("Scrolling:"),
        Line::from("  ↑/↓ or k/j    Scroll one row"),
        Line::from("  PgUp/PgDn     Scroll one screen"),
        Line::from("  g or Home     Top of page"),
        Line::from("  G or End      Bottom of page"),
        Line::from("  Mouse wheel   Scroll"),
        Line::from(""),
        section("Charts and breakdowns:"),
        Line::from("  n / p         Focus next / previous bar, breakdown or card"),
        Line::from("  Enter/Space   Expand or collapse breakdown, open card"),
        Line::from("  Esc           Clear focus"),
        Line::from(""),
        section("General:"),
        Line::from("  d             Show where the full report is"),
        Line::from("  ?             Show this help"),
        Line::from("  q             Quit"),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title(
                Title::from(format!(" built {} ", env!("BUILD_DATE"))).alignment(Alignment::Right),
            )
            .border_style(Style::default().fg(theme::SECONDARY)),
    );

    f.render_widget(paragraph, area);
}

/// Render the messages pane
fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.messages.last() {
        Some(msg) => {
            let style = get_message_style(msg.message_type);
            Line::from(vec![
                Span::styled(format!("{} ", msg.icon()), style),
                Span::styled(msg.text.as_str(), style),
            ])
        }
        None => Line::from(Span::styled("Ready", Style::default().fg(Color::Gray))),
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Messages ")
            .border_style(Style::default().fg(theme::SECONDARY)),
    );

    f.render_widget(paragraph, area);
}

/// Render the footer with keyboard shortcuts
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.mode {
        AppMode::Normal => {
            "[←→/Tab] Page  [1-5] Jump  [↑↓] Scroll  [n/p] Focus  [Enter] Expand  [d] Report  [?] help  [q]uit"
        }
        AppMode::Help => "[Esc/?/q] Return",
    };

    let footer = Paragraph::new(shortcuts)
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    f.render_widget(footer, area);
}
