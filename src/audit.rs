//! Reconciliation report for `survey check`
//!
//! Compares each chart's counts with its respondent total and printed
//! percentages. Purely advisory: figures are reported as published even when
//! they disagree, since several questions were multi-select or rounded on a
//! different base.

use serde::Serialize;
use std::fmt;

use crate::survey::nps::NpsTally;
use crate::survey::{sections, QuestionCard};

/// Printed and recomputed percentages further apart than this are listed
const PCT_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, Serialize)]
pub struct PctMismatch {
    pub label: &'static str,
    pub count: u32,
    pub printed: f64,
    pub computed: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardAudit {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondents: Option<u32>,
    pub items: usize,
    pub count_sum: u32,
    pub mismatches: Vec<PctMismatch>,
    /// Present when the chart is a 0-10 rating table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nps: Option<NpsTally>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Audit {
    pub cards: Vec<CardAudit>,
}

impl Audit {
    #[cfg(test)]
    pub fn card(&self, id: &str) -> Option<&CardAudit> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn mismatch_count(&self) -> usize {
        self.cards.iter().map(|c| c.mismatches.len()).sum()
    }
}

fn is_rating_table(card: &QuestionCard) -> bool {
    card.chart.is_some_and(|chart| {
        !chart.items.is_empty()
            && chart
                .items
                .iter()
                .all(|i| matches!(i.label.trim().parse::<u8>(), Ok(0..=10)))
    })
}

pub fn audit_card(card: &QuestionCard) -> CardAudit {
    let items = card.chart.map(|c| c.items).unwrap_or(&[]);
    let count_sum = items.iter().map(|i| i.count).sum();

    let mismatches = match card.respondents {
        Some(n) if n > 0 => items
            .iter()
            .filter_map(|item| {
                let computed = f64::from(item.count) * 100.0 / f64::from(n);
                ((computed - item.pct).abs() > PCT_TOLERANCE).then_some(PctMismatch {
                    label: item.label,
                    count: item.count,
                    printed: item.pct,
                    computed,
                })
            })
            .collect(),
        _ => Vec::new(),
    };

    let nps = is_rating_table(card).then(|| NpsTally::from_ratings(items));

    tracing::debug!(
        id = card.id,
        count_sum,
        mismatches = mismatches.len(),
        "audited card"
    );

    CardAudit {
        id: card.id,
        respondents: card.respondents,
        items: items.len(),
        count_sum,
        mismatches,
        nps,
    }
}

pub fn run() -> Audit {
    Audit {
        cards: sections()
            .into_iter()
            .flat_map(|s| s.cards.iter())
            .map(audit_card)
            .collect(),
    }
}

impl fmt::Display for Audit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<5} {:>11} {:>9} {:>6} {:>10}", "ID", "Respondents", "Sum", "Items", "Pct diffs")?;
        writeln!(f, "{}", "-".repeat(45))?;
        for card in &self.cards {
            let respondents = card
                .respondents
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<5} {:>11} {:>9} {:>6} {:>10}",
                card.id,
                respondents,
                card.count_sum,
                card.items,
                card.mismatches.len()
            )?;
        }

        for card in self.cards.iter().filter(|c| !c.mismatches.is_empty()) {
            writeln!(f)?;
            writeln!(f, "{}: printed vs count/respondents", card.id)?;
            for m in &card.mismatches {
                writeln!(
                    f,
                    "  {:<36} {:>6} {:>6.1}% {:>6.1}%",
                    m.label, m.count, m.printed, m.computed
                )?;
            }
        }

        for card in &self.cards {
            if let Some(nps) = card.nps {
                writeln!(f)?;
                writeln!(
                    f,
                    "{} NPS: promoters {} / passives {} / detractors {} (total {}) = {:.1}",
                    card.id,
                    nps.promoters,
                    nps.passives,
                    nps.detractors,
                    nps.total(),
                    nps.score()
                )?;
            }
        }

        writeln!(f)?;
        write!(
            f,
            "{} percentage(s) differ from count/respondents by more than {} points. Figures are shown as published.",
            self.mismatch_count(),
            PCT_TOLERANCE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_counts_reconcile() {
        let audit = run();
        let q1 = audit.card("Q1").unwrap();
        assert_eq!(q1.count_sum, 4140);
        assert_eq!(q1.items, 5);
        assert!(q1.nps.is_none());
        // Age pct is printed over valid birth dates, not all respondents
        assert_eq!(q1.mismatches.len(), 4);
        assert_eq!(q1.mismatches[0].label, "19-35");
    }

    #[test]
    fn test_rating_table_gets_nps() {
        let audit = run();
        let q17 = audit.card("Q17").unwrap();
        let nps = q17.nps.unwrap();
        assert_eq!(nps.promoters, 3964);
        assert_eq!(nps.passives, 828);
        assert_eq!(nps.detractors, 232);
        assert_eq!(q17.count_sum, 5024);
        assert_eq!(q17.respondents, Some(5024));
        assert!(audit.cards.iter().filter(|c| c.nps.is_some()).count() == 1);
    }

    #[test]
    fn test_every_card_is_audited() {
        let audit = run();
        let ids: Vec<_> = audit.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, ["Q1", "Q2", "Q3", "Q4", "Q5", "Q10", "Q11", "Q14", "Q17"]);
    }

    #[test]
    fn test_report_text() {
        let text = run().to_string();
        assert!(text.contains("Q17 NPS: promoters 3964 / passives 828 / detractors 232 (total 5024) = 74.3"));
        assert!(text.ends_with("Figures are shown as published."));
    }
}
