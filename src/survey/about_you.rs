//! About You: Q1-Q3, demographic profile of respondents

use super::{
    Breakdown, BreakdownRow, BreakdownStyle, ChartSpec, QuestionCard, ResponseItem, Section,
    StatSpec,
};
use crate::route::Route;
use crate::theme::StatVariant;

pub const AGE: [ResponseItem; 5] = [
    ResponseItem::new("Up to 18", 2, 0.0),
    ResponseItem::new("19-35", 128, 3.1),
    ResponseItem::new("36-55", 927, 22.4),
    ResponseItem::new("56-75", 2365, 57.1),
    ResponseItem::new("Over 75", 718, 17.3),
];

pub const DISCOVERY: [ResponseItem; 12] = [
    ResponseItem::new("Don't remember", 1690, 33.0),
    ResponseItem::new("TV/News/Media", 1599, 31.2),
    ResponseItem::new("Social media", 989, 19.3),
    ResponseItem::new("Friend or family", 509, 9.9),
    ResponseItem::new("AA Website", 388, 7.6),
    ResponseItem::new("Email from AA", 353, 6.9),
    ResponseItem::new("Online search", 294, 5.7),
    ResponseItem::new("Postal mail", 280, 5.5),
    ResponseItem::new("Outdoor ads", 263, 5.1),
    ResponseItem::new("Online ad", 237, 4.6),
    ResponseItem::new("Other", 195, 3.8),
    ResponseItem::new("VegKit", 131, 2.6),
];

const SOCIAL_MEDIA: [BreakdownRow; 5] = [
    BreakdownRow::share("Unspecified", 662, 66.9),
    BreakdownRow::share("Facebook", 211, 21.3),
    BreakdownRow::share("Instagram", 82, 8.3),
    BreakdownRow::share("YouTube", 58, 5.9),
    BreakdownRow::share("TikTok", 6, 0.6),
];

const OTHER_DISCOVERY: [BreakdownRow; 7] = [
    BreakdownRow::new("Other Animal Organisations", 25),
    BreakdownRow::new("Event/Stall/Stand", 21),
    BreakdownRow::new("Lyn White / Peter Singer", 16),
    BreakdownRow::new("Live Export Campaign", 9),
    BreakdownRow::new("Rally/Protest", 7),
    BreakdownRow::new("Print Materials", 7),
    BreakdownRow::new("Other minor channels", 7),
];

pub const POLITICAL: [ResponseItem; 9] = [
    ResponseItem::new("Animal Justice Party", 1788, 34.9),
    ResponseItem::new("Greens", 1030, 20.1),
    ResponseItem::new("Labor", 1010, 19.7),
    ResponseItem::new("Swinging Voter", 470, 9.2),
    ResponseItem::new("Independents", 301, 5.9),
    ResponseItem::new("Liberal", 297, 5.8),
    ResponseItem::new("Don't follow politics", 200, 3.9),
    ResponseItem::new("Prefer not to say", 197, 3.8),
    ResponseItem::new("Nationals", 28, 0.5),
];

const OTHER_PARTIES: [BreakdownRow; 6] = [
    BreakdownRow::new("Socialist/Far Left", 36),
    BreakdownRow::new("One Nation", 34),
    BreakdownRow::new("Libertarian/Conservative", 20),
    BreakdownRow::new("Non-voter", 10),
    BreakdownRow::new("Sustainable Australia", 6),
    BreakdownRow::new("Other minor parties", 17),
];

pub static SECTION: Section = Section {
    route: Route::AboutYou,
    title: "About You",
    description: "Demographic profile and background of survey respondents",
    cards: &[
        QuestionCard {
            id: "Q1",
            title: "What is your year of birth?",
            subtitle: None,
            respondents: Some(5119),
            stats: &[
                StatSpec::with_subtext("80.9%", "Valid DOB", "4,140 respondents", StatVariant::Primary),
                StatSpec::with_subtext("4.9%", "Invalid DOB", "250 respondents", StatVariant::Secondary),
                StatSpec::with_subtext("14.2%", "Not provided", "729 respondents", StatVariant::Accent),
            ],
            chart: Some(ChartSpec {
                heading: Some("Age Distribution"),
                items: &AGE,
                max_value: 2400,
                unit: "respondents",
            }),
            breakdowns: &[],
            insight_heading: "Key insight:",
            insights: &[
                "74.4% of respondents are aged 56 or older, indicating a mature supporter base.",
            ],
        },
        QuestionCard {
            id: "Q2",
            title: "How did you first learn about Animals Australia?",
            subtitle: None,
            respondents: Some(5119),
            stats: &[
                StatSpec::with_subtext("33.0%", "Top Channel", "Don't remember", StatVariant::Primary),
                StatSpec::with_subtext("31.2%", "TV/News/Media", "1,599 respondents", StatVariant::Secondary),
            ],
            chart: Some(ChartSpec {
                heading: None,
                items: &DISCOVERY,
                max_value: 1800,
                unit: "respondents",
            }),
            breakdowns: &[
                Breakdown {
                    title: "Social Media Breakdown",
                    stated_total: Some(989),
                    total_noun: "total",
                    rows: &SOCIAL_MEDIA,
                    insight: None,
                    style: BreakdownStyle::Share,
                },
                Breakdown {
                    title: "\"Other\" Breakdown",
                    stated_total: Some(195),
                    total_noun: "total",
                    rows: &OTHER_DISCOVERY,
                    insight: Some(
                        "Cross-pollination from other animal organisations (Animal Liberation, Animals Asia, RSPCA, AJP) was the leading source, followed by event stalls and market stands. Notably, 16 respondents specifically credited Lyn White or Peter Singer as their introduction to AA, demonstrating the power of personal brand, while 9 cited the live export campaigns as their gateway.",
                    ),
                    style: BreakdownStyle::List,
                },
            ],
            insight_heading: "Key insight:",
            insights: &[
                "Traditional media (TV/News) remains the top identifiable channel at 31.2%, aligning with the older demographic. Social media accounts for 19.3% with Facebook dominating.",
            ],
        },
        QuestionCard {
            id: "Q3",
            title: "How would you describe your political leanings?",
            subtitle: None,
            respondents: Some(5119),
            stats: &[],
            chart: Some(ChartSpec {
                heading: None,
                items: &POLITICAL,
                max_value: 1788,
                unit: "respondents",
            }),
            breakdowns: &[Breakdown {
                title: "\"Other Party\" breakdown",
                stated_total: None,
                total_noun: "responses",
                rows: &OTHER_PARTIES,
                insight: None,
                style: BreakdownStyle::List,
            }],
            insight_heading: "Key insight:",
            insights: &[
                "74.7% lean left (AJP + Greens + Labor), with Animal Justice Party being the dominant affiliation.",
            ],
        },
    ],
    pending: None,
};
