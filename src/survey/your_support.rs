//! Your Support: Q10-Q13

use super::{
    Breakdown, BreakdownRow, BreakdownStyle, ChartSpec, QuestionCard, ResponseItem, Section,
    StatSpec,
};
use crate::route::Route;
use crate::theme::StatVariant;

pub const ENGAGEMENT: [ResponseItem; 14] = [
    ResponseItem::with_full("Subscribed to emails", "I'm subscribed to read emails", 3948, 77.1),
    ResponseItem::with_full("Sign petitions/actions", "I take actions and sign petitions lobbying decision-makers", 3487, 68.1),
    ResponseItem::with_full("Donate to appeals", "I donate to fundraising appeals", 2590, 50.6),
    ResponseItem::with_full("Read postal publications", "I read postal publications, such as the Supporter Update", 2212, 43.2),
    ResponseItem::with_full("Social media updates", "I keep up to date via social media", 1383, 27.0),
    ResponseItem::with_full("Visit AA website", "I visit the Animals Australia website", 1251, 24.4),
    ResponseItem::with_full("Share social content", "I share social media content", 992, 19.4),
    ResponseItem::with_full("Pledges & resources", "I take pledges and order supportive resources", 831, 16.2),
    ResponseItem::with_full("Purchase merchandise", "I purchase merchandise", 797, 15.6),
    ResponseItem::with_full("Watch YouTube videos", "I watch YouTube videos", 378, 7.4),
    ResponseItem::with_full("Membership portal", "I access the My Animals Australia membership portal", 372, 7.3),
    ResponseItem::with_full("Other", "Other (free-text responses)", 234, 4.6),
    ResponseItem::with_full("Phone support team", "I contact the Supporter Services team via phone", 93, 1.8),
    ResponseItem::with_full("Hold fundraisers", "I hold fundraisers", 19, 0.4),
];

// Categorised from 234 free-text answers; 148 repeated an existing option
const ENGAGEMENT_OTHER: [BreakdownRow; 7] = [
    BreakdownRow::new("Prefer to avoid distressing content", 21),
    BreakdownRow::new("Word of mouth & personal advocacy", 18),
    BreakdownRow::new("Bequest/legacy giving", 16),
    BreakdownRow::new("Direct political action (MPs, letters)", 12),
    BreakdownRow::new("Wildlife rescue/volunteering", 6),
    BreakdownRow::new("Feedback/suggestions", 5),
    BreakdownRow::new("Other minor responses", 8),
];

pub const MONTHLY_GIVING: [ResponseItem; 5] = [
    ResponseItem::with_full("Already a monthly donor", "I'm already a proud monthly donor", 2000, 39.1),
    ResponseItem::with_full("Prefer one-off gifts", "I currently prefer to give one-off gifts", 1888, 36.9),
    ResponseItem::with_full("Not right now", "Not right now", 1060, 20.7),
    ResponseItem::with_full("Yes, would like to help", "Yes, I'd like to help animals all year round", 97, 1.9),
    ResponseItem::with_full("Want more info first", "I would like some more information first", 69, 1.3),
];

pub static SECTION: Section = Section {
    route: Route::YourSupport,
    title: "Your Support",
    description: "How supporters engage with and contribute to Animals Australia",
    cards: &[
        QuestionCard {
            id: "Q10",
            title: "How do you like to keep updated and engaged with AA's work?",
            subtitle: Some("Select all that apply"),
            respondents: Some(5027),
            stats: &[
                StatSpec::new("77.1%", "Subscribed to emails", StatVariant::Primary),
                StatSpec::new("68.1%", "Sign petitions & actions", StatVariant::Secondary),
                StatSpec::new("50.6%", "Donate to appeals", StatVariant::Accent),
            ],
            chart: Some(ChartSpec {
                heading: None,
                items: &ENGAGEMENT,
                max_value: 4200,
                unit: "selections",
            }),
            breakdowns: &[Breakdown {
                title: "\"Other\" Breakdown",
                stated_total: Some(234),
                total_noun: "total",
                rows: &ENGAGEMENT_OTHER,
                insight: Some(
                    "63% of responses (148) duplicated existing options or were general statements, suggesting the survey options were comprehensive but perhaps unclear. Key unique themes: many supporters actively avoid distressing content due to emotional impact (21), engage in personal word-of-mouth advocacy (18), and have included AA in their wills (16). Bequest/legacy giving represents a notable gap — it's clearly important to supporters but isn't captured as a formal engagement option.",
                ),
                style: BreakdownStyle::List,
            }],
            insight_heading: "Key insights:",
            insights: &[
                "Email dominates engagement — over three-quarters (77.1%) of supporters stay connected through email subscriptions, making it the single most important communication channel. This aligns with the older demographic profile and suggests email campaigns remain highly effective.",
                "Active advocacy is strong — 68.1% take actions and sign petitions, demonstrating that AA supporters are not passive donors but engaged advocates willing to lobby decision-makers. Combined with the 50.6% who donate to appeals, this shows a highly committed supporter base.",
                "Traditional channels remain relevant — postal publications reach 43.2% of supporters, reinforcing that print communications still matter for this demographic despite digital alternatives.",
                "Untapped potential in digital/community — membership portal (7.3%), YouTube (7.4%), and fundraising (0.4%) show low engagement, suggesting opportunities to grow these channels or reconsider their prominence.",
            ],
        },
        QuestionCard {
            id: "Q11",
            title: "Would you consider becoming a monthly donor to help support future AA work?",
            subtitle: Some("Select one"),
            respondents: Some(5114),
            stats: &[
                StatSpec::new("39.1%", "Already monthly donors", StatVariant::Primary),
                StatSpec::new("36.9%", "Prefer one-off gifts", StatVariant::Secondary),
                StatSpec::new("20.7%", "Not right now", StatVariant::Accent),
            ],
            chart: Some(ChartSpec {
                heading: None,
                items: &MONTHLY_GIVING,
                max_value: 2200,
                unit: "selections",
            }),
            breakdowns: &[],
            insight_heading: "Key insights:",
            insights: &[
                "Strong existing monthly donor base — 39.1% are already proud monthly donors, indicating AA has successfully converted a significant portion of supporters to recurring giving.",
                "One-off giving preference is substantial — 36.9% prefer one-off gifts, suggesting many supporters value flexibility in their giving or may be on fixed incomes (consistent with the older demographic).",
                "Conversion opportunity is modest — only 3.2% combined are open to becoming monthly donors (1.9% ready, 1.3% want more info). The 20.7% saying \"not right now\" may represent future potential with the right timing or approach.",
                "Combined giving commitment is high — 76% are either already monthly donors (39.1%) or prefer one-off giving (36.9%), demonstrating strong overall financial support regardless of frequency preference.",
            ],
        },
    ],
    pending: Some("Results for Q12-Q13 have not been published yet."),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_select_sums_to_respondents() {
        let total: u32 = MONTHLY_GIVING.iter().map(|i| i.count).sum();
        assert_eq!(total, 5114);
        assert_eq!(SECTION.cards[1].respondents, Some(total));
    }

    #[test]
    fn test_other_option_matches_breakdown_toggle() {
        let other = ENGAGEMENT.iter().find(|i| i.label == "Other").unwrap();
        assert_eq!(SECTION.cards[0].breakdowns[0].total(), other.count);
    }
}
