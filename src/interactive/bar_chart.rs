//! Horizontal bar chart for one question's answer options

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::document::{Anchor, DocumentBuilder};
use super::utils::{format_count, format_pct, pad_left, pad_right, wrap_text};
use crate::survey::{ChartSpec, ResponseItem};
use crate::theme;

const EIGHTHS: [&str; 8] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];
const LABEL_MAX: usize = 34;
const VALUE_WIDTH: usize = 14;
const MIN_TRACK: usize = 4;

/// Column widths for one chart row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub label: usize,
    pub track: usize,
    pub value: usize,
}

/// Split `width` between label, track and value, after `fixed` columns of
/// gutter and spacing. When space is short the value column drops to its
/// widest text, then the label gives way, then the track.
pub fn fit_columns(
    width: usize,
    fixed: usize,
    label: usize,
    value: usize,
    value_text: usize,
) -> Columns {
    let avail = width.saturating_sub(fixed);
    let mut value = value.max(value_text);
    if label + MIN_TRACK + value > avail {
        value = value_text;
    }
    let value = value.min(avail);
    let label = label.min(avail.saturating_sub(value + MIN_TRACK));
    Columns {
        label,
        track: avail - value - label,
        value,
    }
}

/// Filled length in eighths of a cell. The ratio is clamped to [0, 1] so a
/// count above `max_value` fills the track and no more.
pub fn filled_eighths(count: u32, max_value: u32, track: usize) -> usize {
    if max_value == 0 || track == 0 {
        return 0;
    }
    let clamped = u64::from(count.min(max_value));
    (clamped * track as u64 * 8 / u64::from(max_value)) as usize
}

/// Bar glyphs for `count` on a track of `track` cells; never wider than the track
pub fn bar_cells(count: u32, max_value: u32, track: usize) -> String {
    let eighths = filled_eighths(count, max_value, track);
    let mut bar = "█".repeat(eighths / 8);
    bar.push_str(EIGHTHS[eighths % 8]);
    bar
}

/// One row per item, in the order given
pub fn render(b: &mut DocumentBuilder, chart: &ChartSpec, card: usize) {
    if chart.items.is_empty() {
        b.push(Line::from(Span::styled(
            "  No responses recorded",
            Style::default().fg(theme::TEXT_MUTED),
        )));
        return;
    }

    let width = b.width();
    let values: Vec<String> = chart
        .items
        .iter()
        .map(|i| format!("{}  {}", format_count(i.count), format_pct(i.pct)))
        .collect();
    let label_w = chart
        .items
        .iter()
        .map(|i| i.label.width())
        .max()
        .unwrap_or(0)
        .min(LABEL_MAX)
        .min(width / 3);
    let value_text = values.iter().map(|v| v.width()).max().unwrap_or(0);
    let cols = fit_columns(width, 4, label_w, VALUE_WIDTH, value_text);

    for (index, (item, value)) in chart.items.iter().zip(&values).enumerate() {
        let focused = b.focusable(Anchor::Bar { card, item: index });
        let color = theme::chart_color(index);
        let bar = bar_cells(item.count, chart.max_value, cols.track);
        let fill = cols.track.saturating_sub(bar.width());

        let label_style = if focused {
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme::TEXT)
        };

        b.push(Line::from(vec![
            Span::styled(
                if focused { "▸ " } else { "  " },
                Style::default().fg(theme::ACCENT),
            ),
            Span::styled(pad_left(item.label, cols.label), label_style),
            Span::raw(" "),
            Span::styled(bar, Style::default().fg(color)),
            Span::raw(" ".repeat(fill)),
            Span::raw(" "),
            Span::styled(
                pad_left(value, cols.value),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]));
    }
}

/// Tooltip body for a focused bar: full label, then the literal count and pct
pub fn tooltip_lines(item: &ResponseItem, unit: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = wrap_text(item.display_label(), width)
        .into_iter()
        .map(|row| {
            Line::from(Span::styled(
                row,
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(Span::styled(
        pad_right(
            &format!(
                "{} {} ({})",
                format_count(item.count),
                unit,
                format_pct(item.pct)
            ),
            width,
        ),
        Style::default().fg(theme::TERTIARY),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::about_you::{AGE, POLITICAL};
    use crate::survey::sections;

    fn chart(items: &'static [ResponseItem], max_value: u32) -> ChartSpec {
        ChartSpec {
            heading: None,
            items,
            max_value,
            unit: "respondents",
        }
    }

    #[test]
    fn test_bar_proportional_to_max_value() {
        assert_eq!(bar_cells(50, 100, 10).width(), 5);
        assert_eq!(bar_cells(100, 100, 10), "█".repeat(10));
        assert_eq!(bar_cells(0, 100, 10), "");
        // 1/16 of 10 cells is 5 eighths
        assert_eq!(bar_cells(1, 16, 10), "▋");
    }

    #[test]
    fn test_bar_clamped_when_count_exceeds_max() {
        assert_eq!(filled_eighths(120, 100, 10), 80);
        assert_eq!(bar_cells(120, 100, 10).width(), 10);
        assert_eq!(bar_cells(u32::MAX, 1, 30).width(), 30);
    }

    #[test]
    fn test_zero_max_value_draws_nothing() {
        assert_eq!(bar_cells(10, 0, 10), "");
        assert_eq!(bar_cells(10, 10, 0), "");
    }

    #[test]
    fn test_empty_chart_has_no_bars() {
        let mut b = DocumentBuilder::new(80, None);
        render(&mut b, &chart(&[], 100), 0);
        let doc = b.finish();
        assert!(doc.focusables.is_empty());
        assert!(!doc.plain_text().contains('█'));
    }

    #[test]
    fn test_age_chart_renders_five_bars_in_order() {
        let mut b = DocumentBuilder::new(100, None);
        render(&mut b, &chart(&AGE, 2400), 0);
        let doc = b.finish();
        assert_eq!(doc.focusables.len(), 5);

        let text = doc.plain_text();
        let mut last = 0;
        for item in AGE.iter() {
            let at = text.find(item.label).unwrap();
            assert!(at >= last, "{} out of order", item.label);
            last = at;
        }
        let shown: u32 = doc
            .focusables
            .iter()
            .filter_map(|f| match f.anchor {
                Anchor::Bar { item, .. } => Some(AGE[item].count),
                _ => None,
            })
            .sum();
        assert_eq!(shown, 4140);
    }

    #[test]
    fn test_largest_item_fills_track_at_exact_scale() {
        let mut b = DocumentBuilder::new(100, None);
        render(&mut b, &chart(&POLITICAL, 1788), 0);
        let doc = b.finish();
        let first: String = doc.lines[0].spans[3].content.to_string();
        let second: String = doc.lines[1].spans[3].content.to_string();
        assert!(first.width() > second.width());
        assert!(!first.contains('▏'));
    }

    #[test]
    fn test_every_chart_renders_in_published_order() {
        for section in sections() {
            for (index, card) in section.cards.iter().enumerate() {
                let Some(chart) = card.chart.as_ref() else {
                    continue;
                };
                let mut b = DocumentBuilder::new(120, None);
                render(&mut b, chart, index);
                let doc = b.finish();

                let order: Vec<usize> = doc
                    .focusables
                    .iter()
                    .filter_map(|f| match f.anchor {
                        Anchor::Bar { card, item } if card == index => Some(item),
                        _ => None,
                    })
                    .collect();
                assert_eq!(order, (0..chart.items.len()).collect::<Vec<_>>(), "{}", card.id);

                for (f, item) in doc.focusables.iter().zip(chart.items) {
                    let row: String = doc.lines[f.line]
                        .spans
                        .iter()
                        .map(|s| s.content.as_ref())
                        .collect();
                    let prefix: String = item.label.chars().take(8).collect();
                    assert!(row.contains(&prefix), "{}: {}", card.id, item.label);
                }
            }
        }
    }

    #[test]
    fn test_rows_fit_narrow_widths() {
        for width in [20, 24, 30, 34, 40, 60, 100] {
            for spec in [chart(&AGE, 2400), chart(&POLITICAL, 1788)] {
                let mut b = DocumentBuilder::new(width, None);
                render(&mut b, &spec, 0);
                for line in b.finish().lines {
                    assert!(line.width() <= width as usize, "{} > {}", line.width(), width);
                }
            }
        }
        let mut b = DocumentBuilder::new(34, None);
        render(&mut b, &chart(&AGE, 2400), 0);
        assert!(b.finish().plain_text().contains("2,365  57.1%"));
    }

    #[test]
    fn test_fit_columns_shrinks_value_then_label() {
        let wide = fit_columns(100, 4, 20, VALUE_WIDTH, 12);
        assert_eq!(wide, Columns { label: 20, track: 62, value: 14 });
        let narrow = fit_columns(30, 4, 10, VALUE_WIDTH, 12);
        assert_eq!(narrow, Columns { label: 10, track: 4, value: 12 });
        let tight = fit_columns(20, 4, 6, VALUE_WIDTH, 12);
        assert_eq!(tight, Columns { label: 0, track: 4, value: 12 });
        let tiny = fit_columns(10, 4, 6, VALUE_WIDTH, 12);
        assert_eq!(tiny, Columns { label: 0, track: 0, value: 6 });
    }

    #[test]
    fn test_rows_show_pct_literal() {
        let mut b = DocumentBuilder::new(100, None);
        render(&mut b, &chart(&AGE, 2400), 0);
        let text = b.finish().plain_text();
        assert!(text.contains("2,365  57.1%"));
        assert!(text.contains("2  0.0%"));
    }

    #[test]
    fn test_focused_bar_is_marked() {
        let mut b = DocumentBuilder::new(100, Some(2));
        render(&mut b, &chart(&AGE, 2400), 0);
        let doc = b.finish();
        assert!(doc.plain_text().lines().nth(2).unwrap().starts_with("▸"));
    }

    #[test]
    fn test_tooltip_prefers_full_label() {
        let item = ResponseItem::with_full("Courage", "They show courage", 3363, 65.7);
        let lines = tooltip_lines(&item, "selections", 40);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text[0], "They show courage");
        assert!(text[1].starts_with("3,363 selections (65.7%)"));

        let item = ResponseItem::new("Greens", 1030, 20.1);
        let lines = tooltip_lines(&item, "respondents", 40);
        assert_eq!(lines[0].spans[0].content, "Greens");
    }
}
