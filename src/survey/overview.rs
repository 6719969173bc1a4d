//! Overview: headline figures and links into each section

use serde::Serialize;

use super::{StatSpec, TOTAL_RESPONDENTS};
use crate::route::Route;
use crate::theme::StatVariant;

/// How a survey was returned
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Channel {
    pub icon: &'static str,
    pub label: &'static str,
    pub count: u32,
    pub pct: f64,
}

/// Summary card linking to a section page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pillar {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub route: Route,
    /// `#RRGGBB`
    pub accent: &'static str,
    pub highlights: &'static [&'static str],
}

/// An insight paragraph with a bold lead-in
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LeadInsight {
    pub lead: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub title: &'static str,
    pub description: &'static str,
    pub total_respondents: u32,
    pub channels: &'static [Channel],
    pub metrics: &'static [StatSpec],
    pub pillars: &'static [Pillar],
    pub insights: &'static [LeadInsight],
}

pub static OVERVIEW: Overview = Overview {
    title: "2024 Supporter Survey Results",
    description: "Executive summary and key findings across 18 questions",
    total_respondents: TOTAL_RESPONDENTS,
    channels: &[
        Channel {
            icon: "💻",
            label: "Online",
            count: 2779,
            pct: 54.3,
        },
        Channel {
            icon: "📮",
            label: "Printed",
            count: 2340,
            pct: 45.7,
        },
    ],
    metrics: &[
        StatSpec::new("74", "Net Promoter Score", StatVariant::Primary),
        StatSpec::new("94.6%", "Trust donations used well", StatVariant::Secondary),
        StatSpec::new("41%", "Vegan or vegetarian", StatVariant::Accent),
        StatSpec::new("77.1%", "Email subscribers", StatVariant::Primary),
        StatSpec::new("68.1%", "Take actions/petitions", StatVariant::Secondary),
        StatSpec::new("74.4%", "Aged 56 or older", StatVariant::Accent),
    ],
    pillars: &[
        Pillar {
            title: "Who are our supporters?",
            subtitle: "About You · Q1-3",
            route: Route::AboutYou,
            accent: "#2D5A47",
            highlights: &[
                "74.4% aged 56 or older",
                "75% align with AJP, Greens, or Labor",
                "TV/News top discovery channel (31.2%)",
            ],
        },
        Pillar {
            title: "What do they value?",
            subtitle: "Values & Views · Q4-9",
            route: Route::ValuesViews,
            accent: "#1E7B8C",
            highlights: &[
                "41% fully vegan or vegetarian",
                "52.5% actively transitioning diets",
                "90.7% aware of factory farm cruelty",
            ],
        },
        Pillar {
            title: "How do they engage?",
            subtitle: "Your Support · Q10-13",
            route: Route::YourSupport,
            accent: "#E8724A",
            highlights: &[
                "77.1% subscribe to emails",
                "68.1% sign petitions and take action",
                "31.3% considering bequest giving",
            ],
        },
        Pillar {
            title: "How satisfied are they?",
            subtitle: "Your Satisfaction · Q14-17",
            route: Route::Satisfaction,
            accent: "#8B5CF6",
            highlights: &[
                "NPS 74 — world-class loyalty",
                "65.6% gave maximum rating of 10",
                "82.4% want more factory farm exposés",
            ],
        },
    ],
    insights: &[
        LeadInsight {
            lead: "Channel alignment:",
            text: "The high printed survey response (45.7%) directly reflects the mature demographic — postal communications remain highly effective for the 74.4% of supporters aged 56+.",
        },
        LeadInsight {
            lead: "Bequest opportunity:",
            text: "85.5% of those requesting bequest information came from actionable segments — a warm pipeline for legacy giving outreach.",
        },
        LeadInsight {
            lead: "Awareness-action gap:",
            text: "Fish farm awareness is relatively high (72.3%) yet ranked last for donation priority (4.7%) — awareness alone doesn't drive giving.",
        },
    ],
};
