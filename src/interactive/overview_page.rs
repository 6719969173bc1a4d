//! Overview page: hero figures, key metrics and links into each section

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::document::{Anchor, DocumentBuilder};
use super::stat_card;
use super::utils::{format_count, format_pct};
use crate::survey::Overview;
use crate::theme;

const METRICS_PER_ROW: usize = 3;

pub fn render(b: &mut DocumentBuilder, overview: &Overview) {
    hero(b, overview);

    b.push(heading("Key Metrics at a Glance"));
    b.blank();
    for row in overview.metrics.chunks(METRICS_PER_ROW) {
        stat_card::render(b, row);
    }

    b.push(heading("Explore the results"));
    b.blank();
    for pillar in overview.pillars {
        let focused = b.focusable(Anchor::Pillar(pillar.route));
        let accent = theme::hex_color(pillar.accent, theme::PRIMARY);
        let mut title_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        if focused {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }
        b.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(accent)),
            Span::styled(pillar.title.to_string(), title_style),
            Span::styled(
                format!("  {}", pillar.subtitle),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]));
        for highlight in pillar.highlights {
            b.push(Line::from(vec![
                Span::styled("▌ ", Style::default().fg(accent)),
                Span::styled("• ", Style::default().fg(accent)),
                Span::styled(highlight.to_string(), Style::default().fg(theme::TEXT)),
            ]));
        }
        b.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(accent)),
            Span::styled(
                "View details →",
                Style::default().fg(accent).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
        b.blank();
    }

    b.push(heading("Cross-cutting insights:"));
    for insight in overview.insights {
        b.lead_paragraph(
            insight.lead,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
            insight.text,
            2,
            Style::default().fg(theme::TEXT),
        );
        b.blank();
    }
}

fn hero(b: &mut DocumentBuilder, overview: &Overview) {
    b.push(Line::from(Span::styled(
        overview.title.to_string(),
        Style::default()
            .fg(theme::TEXT)
            .add_modifier(Modifier::BOLD),
    )));
    b.paragraph(overview.description, 0, Style::default().fg(theme::TEXT_MUTED));
    b.blank();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", format_count(overview.total_respondents)),
            Style::default()
                .fg(theme::NAV_TEXT)
                .bg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" supporters responded", Style::default().fg(theme::TEXT)),
    ];
    for channel in overview.channels {
        spans.push(Span::styled(
            format!(
                "   {} {} {} ({})",
                channel.icon,
                channel.label,
                format_count(channel.count),
                format_pct(channel.pct)
            ),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }
    b.push(Line::from(spans));
    b.blank();
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme::SECONDARY)
            .add_modifier(Modifier::BOLD),
    ))
}
