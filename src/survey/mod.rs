//! The 2024 supporter survey, as published
//!
//! Every figure is a literal copied from the survey report. Percentages are
//! stored as printed and are never recomputed from counts: several questions
//! are multi-select, and others were rounded independently.

pub mod about_you;
pub mod nps;
pub mod overview;
pub mod satisfaction;
pub mod values_views;
pub mod your_support;

use serde::Serialize;

use crate::error::LookupError;
use crate::route::Route;
use crate::theme::StatVariant;

pub use overview::Overview;

/// Total number of people who returned the survey
pub const TOTAL_RESPONDENTS: u32 = 5119;

/// One answer option and how many respondents chose it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseItem {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_label: Option<&'static str>,
    pub count: u32,
    pub pct: f64,
}

impl ResponseItem {
    pub const fn new(label: &'static str, count: u32, pct: f64) -> Self {
        Self {
            label,
            full_label: None,
            count,
            pct,
        }
    }

    pub const fn with_full(
        label: &'static str,
        full_label: &'static str,
        count: u32,
        pct: f64,
    ) -> Self {
        Self {
            label,
            full_label: Some(full_label),
            count,
            pct,
        }
    }

    /// Long form when the option has one
    pub fn display_label(&self) -> &'static str {
        self.full_label.unwrap_or(self.label)
    }
}

/// A row of a breakdown panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,
}

impl BreakdownRow {
    pub const fn new(label: &'static str, count: u32) -> Self {
        Self {
            label,
            count,
            pct: None,
        }
    }

    pub const fn share(label: &'static str, count: u32, pct: f64) -> Self {
        Self {
            label,
            count,
            pct: Some(pct),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownStyle {
    /// Label and count per row
    List,
    /// Rows with a proportional mini-bar
    Share,
}

/// A secondary table that explains an aggregate bucket, hidden until toggled
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Breakdown {
    pub title: &'static str,
    /// Figure printed on the toggle; falls back to the sum of the rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stated_total: Option<u32>,
    pub total_noun: &'static str,
    pub rows: &'static [BreakdownRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<&'static str>,
    pub style: BreakdownStyle,
}

impl Breakdown {
    pub fn total(&self) -> u32 {
        self.stated_total
            .unwrap_or_else(|| self.rows.iter().map(|r| r.count).sum())
    }
}

/// One emphasised figure
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatSpec {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<&'static str>,
    pub variant: StatVariant,
}

impl StatSpec {
    pub const fn new(value: &'static str, label: &'static str, variant: StatVariant) -> Self {
        Self {
            value,
            label,
            subtext: None,
            variant,
        }
    }

    pub const fn with_subtext(
        value: &'static str,
        label: &'static str,
        subtext: &'static str,
        variant: StatVariant,
    ) -> Self {
        Self {
            value,
            label,
            subtext: Some(subtext),
            variant,
        }
    }
}

/// Bar chart configuration; `max_value` is the full-track scale
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChartSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub items: &'static [ResponseItem],
    pub max_value: u32,
    /// "respondents" or "selections", used in the focus tooltip
    pub unit: &'static str,
}

/// Everything needed to render one question
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionCard {
    pub id: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respondents: Option<u32>,
    pub stats: &'static [StatSpec],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
    pub breakdowns: &'static [Breakdown],
    pub insight_heading: &'static str,
    pub insights: &'static [&'static str],
}

/// A page of question cards
#[derive(Debug, Serialize)]
pub struct Section {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
    pub cards: &'static [QuestionCard],
    /// Shown below the cards for questions not yet published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<&'static str>,
}

impl Section {
    pub fn breakdown_count(&self) -> usize {
        self.cards.iter().map(|c| c.breakdowns.len()).sum()
    }
}

/// What a route renders
#[derive(Debug, Clone, Copy)]
pub enum Page {
    Overview(&'static Overview),
    Section(&'static Section),
}

impl Page {
    pub fn for_route(route: Route) -> Page {
        match route {
            Route::Overview => Page::Overview(&overview::OVERVIEW),
            Route::AboutYou => Page::Section(&about_you::SECTION),
            Route::ValuesViews => Page::Section(&values_views::SECTION),
            Route::YourSupport => Page::Section(&your_support::SECTION),
            Route::Satisfaction => Page::Section(&satisfaction::SECTION),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview(o) => o.title,
            Page::Section(s) => s.title,
        }
    }

    pub fn breakdown_count(&self) -> usize {
        match self {
            Page::Overview(_) => 0,
            Page::Section(s) => s.breakdown_count(),
        }
    }
}

/// The four question pages, in navigation order
pub fn sections() -> [&'static Section; 4] {
    [
        &about_you::SECTION,
        &values_views::SECTION,
        &your_support::SECTION,
        &satisfaction::SECTION,
    ]
}

/// Look up a question by id (`Q4`, `q4` or `4`)
pub fn find_question(id: &str) -> Result<(&'static Section, &'static QuestionCard), LookupError> {
    let wanted = id.trim().trim_start_matches(['Q', 'q']);
    sections()
        .into_iter()
        .flat_map(|s| s.cards.iter().map(move |c| (s, c)))
        .find(|(_, c)| c.id.trim_start_matches('Q') == wanted)
        .ok_or_else(|| LookupError::UnknownQuestion(id.to_string()))
}
