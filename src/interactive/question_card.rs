//! Question cards and the section pages built from them

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::breakdown::{self, Disclosure};
use super::document::DocumentBuilder;
use super::utils::format_count;
use super::{bar_chart, stat_card};
use crate::survey::{QuestionCard, Section};
use crate::theme;

/// Page heading, every card in order, then the note for unpublished questions.
/// Breakdowns are numbered across the whole page to index `disclosures`.
pub fn render_section(b: &mut DocumentBuilder, section: &Section, disclosures: &[Disclosure]) {
    b.push(Line::from(Span::styled(
        section.title.to_string(),
        Style::default()
            .fg(theme::TEXT)
            .add_modifier(Modifier::BOLD),
    )));
    b.paragraph(section.description, 0, Style::default().fg(theme::TEXT_MUTED));
    b.blank();

    let mut next_breakdown = 0;
    for (index, card) in section.cards.iter().enumerate() {
        render(b, card, index, next_breakdown, disclosures);
        next_breakdown += card.breakdowns.len();
    }

    if let Some(pending) = section.pending {
        b.paragraph(
            pending,
            2,
            Style::default()
                .fg(theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        );
        b.blank();
    }
}

/// One card. `first_breakdown` is the page-wide index of its first breakdown.
pub fn render(
    b: &mut DocumentBuilder,
    card: &QuestionCard,
    index: usize,
    first_breakdown: usize,
    disclosures: &[Disclosure],
) {
    let mut header = vec![Span::styled(
        format!(" {} ", card.id),
        Style::default()
            .fg(theme::NAV_TEXT)
            .bg(theme::PRIMARY)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(n) = card.respondents {
        header.push(Span::styled(
            format!("  {} respondents", format_count(n)),
            Style::default().fg(theme::TEXT_MUTED),
        ));
    }
    b.push(Line::from(header));
    b.paragraph(
        card.title,
        0,
        Style::default()
            .fg(theme::TEXT)
            .add_modifier(Modifier::BOLD),
    );
    if let Some(subtitle) = card.subtitle {
        b.paragraph(
            subtitle,
            0,
            Style::default()
                .fg(theme::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        );
    }
    b.blank();

    stat_card::render(b, card.stats);

    if let Some(chart) = &card.chart {
        if let Some(heading) = chart.heading {
            b.push(Line::from(Span::styled(
                heading.to_string(),
                Style::default()
                    .fg(theme::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        bar_chart::render(b, chart, index);
        b.blank();
    }

    for (offset, bd) in card.breakdowns.iter().enumerate() {
        let page_index = first_breakdown + offset;
        let visible = disclosures
            .get(page_index)
            .map(Disclosure::is_visible)
            .unwrap_or(false);
        breakdown::render(b, bd, page_index, visible);
    }
    if !card.breakdowns.is_empty() {
        b.blank();
    }

    if !card.insights.is_empty() {
        b.push(Line::from(Span::styled(
            card.insight_heading.to_string(),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        let text_style = Style::default().fg(theme::TEXT);
        let bullets = card.insights.len() > 1;
        for insight in card.insights {
            if bullets {
                let bullet = Style::default().fg(theme::ACCENT);
                b.lead_paragraph("•", bullet, insight, 2, text_style);
            } else {
                b.paragraph(insight, 2, text_style);
            }
        }
    }

    b.push(Line::from(Span::styled(
        "─".repeat(b.width()),
        Style::default().fg(theme::QUINARY),
    )));
    b.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::document::{Anchor, Document};
    use crate::survey::{about_you, satisfaction, values_views};

    fn build(section: &Section, disclosures: &[Disclosure], width: u16) -> Document {
        let mut b = DocumentBuilder::new(width, None);
        render_section(&mut b, section, disclosures);
        b.finish()
    }

    #[test]
    fn test_header_shows_id_and_respondents() {
        let doc = build(&about_you::SECTION, &[Disclosure::default(); 3], 100);
        let text = doc.plain_text();
        assert!(text.contains(" Q1   5,119 respondents"));
        assert!(text.contains("What is your year of birth?"));
        assert!(text.contains("Age Distribution"));
        assert!(text.contains("Key insight:"));
    }

    #[test]
    fn test_cards_render_in_order() {
        let text = build(&about_you::SECTION, &[Disclosure::default(); 3], 100).plain_text();
        let q1 = text.find(" Q1 ").unwrap();
        let q2 = text.find(" Q2 ").unwrap();
        let q3 = text.find(" Q3 ").unwrap();
        assert!(q1 < q2 && q2 < q3);
    }

    #[test]
    fn test_breakdowns_numbered_across_page() {
        let doc = build(&about_you::SECTION, &[Disclosure::default(); 3], 100);
        let toggles: Vec<_> = doc
            .focusables
            .iter()
            .filter_map(|f| match f.anchor {
                Anchor::Toggle(i) => Some(i),
                _ => None,
            })
            .collect();
        assert_eq!(toggles, vec![0, 1, 2]);
    }

    #[test]
    fn test_opening_a_breakdown_only_affects_that_one() {
        let closed = build(&about_you::SECTION, &[Disclosure::default(); 3], 100);
        let mut disclosures = [Disclosure::default(); 3];
        disclosures[2].toggle();
        let open = build(&about_you::SECTION, &disclosures, 100);
        let text = open.plain_text();
        assert!(text.contains("One Nation"));
        assert!(!text.contains("Lyn White"));
        assert_eq!(open.height(), closed.height() + 7);
    }

    #[test]
    fn test_missing_disclosures_render_closed() {
        let text = build(&about_you::SECTION, &[], 100).plain_text();
        assert!(text.contains("▶ \"Other Party\" breakdown (123 responses)"));
    }

    #[test]
    fn test_subtitle_and_bullets() {
        let text = build(&values_views::SECTION, &[], 100).plain_text();
        assert!(text.contains("Respondents could select up to 3 options"));
        assert!(text.contains("Key insights:"));
        assert!(text.contains("  • Factory farming (68.5%)"));
    }

    #[test]
    fn test_pending_note_after_cards() {
        let text = build(&values_views::SECTION, &[], 100).plain_text();
        let note = text.find("have not been published").unwrap();
        assert!(note > text.find(" Q5 ").unwrap());
        assert!(build(&satisfaction::SECTION, &[], 100).height() > 20);
    }

    #[test]
    fn test_bars_tagged_with_card_index() {
        let doc = build(&about_you::SECTION, &[], 100);
        let cards: Vec<_> = doc
            .focusables
            .iter()
            .filter_map(|f| match f.anchor {
                Anchor::Bar { card, .. } => Some(card),
                _ => None,
            })
            .collect();
        assert_eq!(cards.iter().filter(|&&c| c == 0).count(), 5);
        assert_eq!(cards.iter().filter(|&&c| c == 1).count(), 12);
        assert_eq!(cards.iter().filter(|&&c| c == 2).count(), 9);
    }
}
