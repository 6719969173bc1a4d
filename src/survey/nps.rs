//! Net Promoter Score grouping of 0-10 ratings
//!
//! The published score is a literal on the Q17 card. This module only
//! re-derives the grouping so `survey check` can show that the rating table
//! and the headline figure agree.

use serde::Serialize;

use super::ResponseItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NpsGroup {
    Promoter,
    Passive,
    Detractor,
}

impl NpsGroup {
    /// Bands used by the report: 9-10, 6-8 and 0-5
    pub fn for_rating(rating: u8) -> Option<NpsGroup> {
        match rating {
            9 | 10 => Some(NpsGroup::Promoter),
            6..=8 => Some(NpsGroup::Passive),
            0..=5 => Some(NpsGroup::Detractor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NpsTally {
    pub promoters: u32,
    pub passives: u32,
    pub detractors: u32,
}

impl NpsTally {
    /// Tally a rating table whose labels are the ratings themselves.
    /// Rows whose label is not a 0-10 rating are skipped.
    pub fn from_ratings(items: &[ResponseItem]) -> Self {
        let mut tally = NpsTally::default();
        for item in items {
            let group = item
                .label
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(NpsGroup::for_rating);
            match group {
                Some(NpsGroup::Promoter) => tally.promoters += item.count,
                Some(NpsGroup::Passive) => tally.passives += item.count,
                Some(NpsGroup::Detractor) => tally.detractors += item.count,
                None => tracing::debug!(label = item.label, "skipping non-rating row"),
            }
        }
        tally
    }

    pub fn total(&self) -> u32 {
        self.promoters + self.passives + self.detractors
    }

    /// Percentage of promoters minus percentage of detractors
    pub fn score(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.promoters as f64 - self.detractors as f64) * 100.0 / total as f64
    }
}
