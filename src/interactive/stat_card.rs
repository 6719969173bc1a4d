//! Coloured stat cards laid side by side

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::document::DocumentBuilder;
use super::utils::center;
use crate::survey::StatSpec;
use crate::theme;

const GAP: usize = 2;
const MIN_CARD_WIDTH: usize = 8;

/// Render `stats` as one row of equal-width cards, or stacked when the row
/// would make them too narrow
pub fn render(b: &mut DocumentBuilder, stats: &[StatSpec]) {
    if stats.is_empty() {
        return;
    }
    let width = b.width();
    let n = stats.len();
    let card_w = width.saturating_sub(GAP * (n - 1)) / n;

    if card_w < MIN_CARD_WIDTH {
        for stat in stats {
            render_row(b, std::slice::from_ref(stat), width);
            b.blank();
        }
    } else {
        render_row(b, stats, card_w);
        b.blank();
    }
}

fn render_row(b: &mut DocumentBuilder, stats: &[StatSpec], card_w: usize) {
    let has_subtext = stats.iter().any(|s| s.subtext.is_some());

    let value_line = cells(stats, card_w, |s| s.value, Modifier::BOLD);
    let label_line = cells(stats, card_w, |s| s.label, Modifier::empty());
    b.push(padding_line(stats, card_w));
    b.push(value_line);
    b.push(label_line);
    if has_subtext {
        b.push(cells(stats, card_w, |s| s.subtext.unwrap_or(""), Modifier::ITALIC));
    }
    b.push(padding_line(stats, card_w));
}

fn cells(
    stats: &[StatSpec],
    card_w: usize,
    text: impl Fn(&StatSpec) -> &'static str,
    modifier: Modifier,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(stats.len() * 2);
    for (i, stat) in stats.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(GAP)));
        }
        spans.push(Span::styled(
            center(text(stat), card_w),
            Style::default()
                .fg(theme::NAV_TEXT)
                .bg(stat.variant.color())
                .add_modifier(modifier),
        ));
    }
    Line::from(spans)
}

fn padding_line(stats: &[StatSpec], card_w: usize) -> Line<'static> {
    cells(stats, card_w, |_| "", Modifier::empty())
}
