//! Expandable breakdown panels

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::bar_chart::{bar_cells, fit_columns};
use super::document::{Anchor, DocumentBuilder};
use super::utils::{format_count, format_pct, pad_left, pad_right};
use crate::survey::{Breakdown, BreakdownStyle};
use crate::theme;

/// Show/hide state of one breakdown. Starts hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    visible: bool,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// `▶ "Other" Breakdown (195 total)`
pub fn toggle_label(breakdown: &Breakdown, visible: bool) -> String {
    format!(
        "{} {} ({} {})",
        if visible { "▼" } else { "▶" },
        breakdown.title,
        format_count(breakdown.total()),
        breakdown.total_noun
    )
}

/// Toggle line, then rows and insight when visible
pub fn render(b: &mut DocumentBuilder, breakdown: &Breakdown, index: usize, visible: bool) {
    let focused = b.focusable(Anchor::Toggle(index));
    let mut style = Style::default().fg(theme::TERTIARY);
    if focused {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    b.push(Line::from(vec![
        Span::raw(if focused { "▸ " } else { "  " }),
        Span::styled(toggle_label(breakdown, visible), style),
    ]));

    if !visible {
        return;
    }

    let width = b.width().saturating_sub(4);
    match breakdown.style {
        BreakdownStyle::List => render_list(b, breakdown, width),
        BreakdownStyle::Share => render_share(b, breakdown, width),
    }

    if let Some(insight) = breakdown.insight {
        b.blank();
        b.lead_paragraph(
            "Insight:",
            Style::default()
                .fg(theme::TERTIARY)
                .add_modifier(Modifier::BOLD),
            insight,
            4,
            Style::default().fg(theme::TEXT_MUTED),
        );
    }
    b.blank();
}

fn render_list(b: &mut DocumentBuilder, breakdown: &Breakdown, width: usize) {
    let count_w = 8;
    let label_w = width.saturating_sub(count_w);
    for (i, row) in breakdown.rows.iter().enumerate() {
        let last = i + 1 == breakdown.rows.len();
        let style = if last {
            Style::default().fg(theme::TEXT)
        } else {
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::UNDERLINED)
        };
        b.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(pad_right(row.label, label_w), style),
            Span::styled(
                pad_left(&format_count(row.count), count_w),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]));
    }
}

fn render_share(b: &mut DocumentBuilder, breakdown: &Breakdown, width: usize) {
    let values: Vec<String> = breakdown
        .rows
        .iter()
        .map(|row| match row.pct {
            Some(pct) => format!("{} ({})", format_count(row.count), format_pct(pct)),
            None => format_count(row.count),
        })
        .collect();
    let label_w = breakdown
        .rows
        .iter()
        .map(|r| r.label.width())
        .max()
        .unwrap_or(0)
        .min(width / 3);
    let value_text = values.iter().map(|v| v.width()).max().unwrap_or(0);
    let cols = fit_columns(width, 2, label_w, 16, value_text);
    let largest = breakdown.rows.iter().map(|r| r.count).max().unwrap_or(0);

    for (i, (row, value)) in breakdown.rows.iter().zip(&values).enumerate() {
        let bar = bar_cells(row.count, largest, cols.track);
        let fill = cols.track.saturating_sub(bar.width());
        b.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(pad_right(row.label, cols.label), Style::default().fg(theme::TEXT)),
            Span::raw(" "),
            Span::styled(bar, Style::default().fg(theme::chart_color(i))),
            Span::raw(" ".repeat(fill)),
            Span::raw(" "),
            Span::styled(pad_left(value, cols.value), Style::default().fg(theme::TEXT_MUTED)),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::find_question;

    #[test]
    fn test_initially_hidden() {
        assert!(!Disclosure::default().is_visible());
    }

    #[test]
    fn test_toggle_twice_restores_hidden() {
        let mut d = Disclosure::default();
        d.toggle();
        assert!(d.is_visible());
        d.toggle();
        assert!(!d.is_visible());
        assert_eq!(d, Disclosure::default());
    }

    #[test]
    fn test_toggle_label() {
        let (_, q2) = find_question("Q2").unwrap();
        assert_eq!(
            toggle_label(&q2.breakdowns[1], false),
            "▶ \"Other\" Breakdown (195 total)"
        );
        assert_eq!(
            toggle_label(&q2.breakdowns[0], true),
            "▼ Social Media Breakdown (989 total)"
        );
        let (_, q3) = find_question("Q3").unwrap();
        assert_eq!(
            toggle_label(&q3.breakdowns[0], false),
            "▶ \"Other Party\" breakdown (123 responses)"
        );
    }

    #[test]
    fn test_hidden_renders_only_toggle() {
        let (_, q3) = find_question("Q3").unwrap();
        let mut b = DocumentBuilder::new(80, None);
        render(&mut b, &q3.breakdowns[0], 0, false);
        let doc = b.finish();
        assert_eq!(doc.height(), 1);
        assert_eq!(doc.focusables.len(), 1);
    }

    #[test]
    fn test_visible_renders_rows_and_insight() {
        let (_, q2) = find_question("Q2").unwrap();
        let other = &q2.breakdowns[1];
        let mut b = DocumentBuilder::new(80, None);
        render(&mut b, other, 1, true);
        let text = b.finish().plain_text();
        assert!(text.contains("Lyn White / Peter Singer"));
        assert!(text.contains("Insight:"));
        for row in other.rows {
            assert!(text.contains(row.label));
        }
    }

    #[test]
    fn test_share_rows_show_percentages() {
        let (_, q2) = find_question("Q2").unwrap();
        let mut b = DocumentBuilder::new(80, None);
        render(&mut b, &q2.breakdowns[0], 0, true);
        let text = b.finish().plain_text();
        assert!(text.contains("211 (21.3%)"));
        assert!(text.contains("TikTok"));
    }

    #[test]
    fn test_share_rows_fit_narrow_width() {
        let (_, q2) = find_question("Q2").unwrap();
        let social = &q2.breakdowns[0];
        for width in [24u16, 30, 40] {
            let mut b = DocumentBuilder::new(width, None);
            render(&mut b, social, 0, true);
            let doc = b.finish();
            for line in &doc.lines[1..=social.rows.len()] {
                assert!(line.width() <= usize::from(width), "{:?}", line);
            }
        }
    }
}
