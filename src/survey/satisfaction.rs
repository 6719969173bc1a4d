//! Your Satisfaction: Q14-Q18

use super::{
    Breakdown, BreakdownRow, BreakdownStyle, ChartSpec, QuestionCard, ResponseItem, Section,
    StatSpec,
};
use crate::route::Route;
use crate::theme::StatVariant;

// Valid respondents: 4,378 (excludes 44 invalid multi-select, 124 no response and 573 N/A)
pub const EFFECTIVENESS: [ResponseItem; 5] = [
    ResponseItem::with_full("Strongly Agree", "Strongly Agree", 2694, 61.5),
    ResponseItem::with_full("Agree", "Agree", 1449, 33.1),
    ResponseItem::with_full("Neutral", "Neutral", 183, 4.2),
    ResponseItem::with_full("Strongly Disagree", "Strongly Disagree", 39, 0.9),
    ResponseItem::with_full("Disagree", "Disagree", 13, 0.3),
];

/// Likelihood to recommend, highest rating first; labels are the 0-10 rating
pub const RECOMMEND: [ResponseItem; 11] = [
    ResponseItem::with_full("10", "10 - Extremely likely", 3296, 65.6),
    ResponseItem::new("9", 668, 13.3),
    ResponseItem::new("8", 203, 4.0),
    ResponseItem::new("7", 551, 11.0),
    ResponseItem::new("6", 74, 1.5),
    ResponseItem::new("5", 158, 3.1),
    ResponseItem::new("4", 14, 0.3),
    ResponseItem::new("3", 10, 0.2),
    ResponseItem::new("2", 9, 0.2),
    ResponseItem::new("1", 15, 0.3),
    ResponseItem::with_full("0", "0 - Not at all likely", 26, 0.5),
];

const RECOMMEND_GROUPS: [BreakdownRow; 3] = [
    BreakdownRow::share("Promoters (9-10)", 3964, 78.9),
    BreakdownRow::share("Passives (6-8)", 828, 16.5),
    BreakdownRow::share("Detractors (0-5)", 232, 4.6),
];

pub static SECTION: Section = Section {
    route: Route::Satisfaction,
    title: "Your Satisfaction",
    description: "Donor satisfaction and perceptions of organisational effectiveness",
    cards: &[
        QuestionCard {
            id: "Q14",
            title: "Do you agree that donations are used effectively and make a real difference?",
            subtitle: Some("Donors only, single select"),
            respondents: Some(4378),
            // The report left these cards uncoloured, which renders as primary
            stats: &[
                StatSpec::new("2,694", "Strongly Agree (61.5%)", StatVariant::Primary),
                StatSpec::new("1,449", "Agree (33.1%)", StatVariant::Primary),
                StatSpec::new("183", "Neutral (4.2%)", StatVariant::Primary),
            ],
            chart: Some(ChartSpec {
                heading: None,
                items: &EFFECTIVENESS,
                max_value: 3000,
                unit: "respondents",
            }),
            breakdowns: &[],
            insight_heading: "Key Insights:",
            insights: &[
                "94.6% of donors (4,143 of 4,378) agree or strongly agree that their donations are used effectively — an exceptionally strong vote of confidence in the organisation's stewardship.",
                "Only 1.2% expressed disagreement (52 respondents), indicating minimal concerns about donation effectiveness among active donors.",
                "The 4.2% neutral responses (183) may represent newer donors still forming opinions or those seeking more transparency about impact reporting.",
            ],
        },
        QuestionCard {
            id: "Q17",
            title: "How likely are you to recommend Animals Australia to a friend or family member?",
            subtitle: Some("0 = not at all likely, 10 = extremely likely"),
            respondents: Some(5024),
            stats: &[
                StatSpec::new("74", "Net Promoter Score", StatVariant::Primary),
                StatSpec::new("78.9%", "Promoters (9-10)", StatVariant::Secondary),
                StatSpec::new("4.6%", "Detractors (0-5)", StatVariant::Accent),
            ],
            chart: Some(ChartSpec {
                heading: Some("Rating"),
                items: &RECOMMEND,
                max_value: 3600,
                unit: "respondents",
            }),
            breakdowns: &[Breakdown {
                title: "Promoter / Passive / Detractor split",
                stated_total: Some(5024),
                total_noun: "total",
                rows: &RECOMMEND_GROUPS,
                insight: None,
                style: BreakdownStyle::Share,
            }],
            insight_heading: "Key Insights:",
            insights: &[
                "NPS 74 — world-class loyalty: 78.9% of respondents are promoters against 4.6% detractors.",
                "65.6% gave the maximum rating of 10.",
            ],
        },
    ],
    pending: Some("Results for Q15, Q16 and Q18 have not been published yet."),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effectiveness_sums_to_valid_respondents() {
        let total: u32 = EFFECTIVENESS.iter().map(|i| i.count).sum();
        assert_eq!(total, 4378);
    }

    #[test]
    fn test_recommend_groups_match_ratings() {
        let total: u32 = RECOMMEND.iter().map(|i| i.count).sum();
        assert_eq!(total, 5024);
        let grouped: u32 = RECOMMEND_GROUPS.iter().map(|r| r.count).sum();
        assert_eq!(grouped, total);
    }
}
