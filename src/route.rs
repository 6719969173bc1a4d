//! The five dashboard pages and their paths

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// A dashboard page, addressed the same way as the published web version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Overview,
    AboutYou,
    ValuesViews,
    YourSupport,
    Satisfaction,
}

impl Route {
    /// Navigation order
    pub const ALL: [Route; 5] = [
        Route::Overview,
        Route::AboutYou,
        Route::ValuesViews,
        Route::YourSupport,
        Route::Satisfaction,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Overview => "/",
            Route::AboutYou => "/about-you",
            Route::ValuesViews => "/values-views",
            Route::YourSupport => "/your-support",
            Route::Satisfaction => "/satisfaction",
        }
    }

    /// Label shown in the navigation bar
    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::AboutYou => "About You",
            Route::ValuesViews => "Values & Views",
            Route::YourSupport => "Your Support",
            Route::Satisfaction => "Satisfaction",
        }
    }

    pub fn index(self) -> usize {
        Route::ALL
            .iter()
            .position(|r| *r == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn previous(self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }

    /// Route for a 1-based page number (the `1`-`5` keys)
    pub fn from_number(n: usize) -> Option<Route> {
        n.checked_sub(1).and_then(|i| Route::ALL.get(i).copied())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = LookupError;

    /// Accepts a path (`/about-you`), a bare slug (`about-you`) or `overview`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let slug = normalized.trim_start_matches('/');
        match slug {
            "" | "overview" => Ok(Route::Overview),
            "about-you" => Ok(Route::AboutYou),
            "values-views" => Ok(Route::ValuesViews),
            "your-support" => Ok(Route::YourSupport),
            "satisfaction" => Ok(Route::Satisfaction),
            _ => Err(LookupError::UnknownRoute(s.to_string())),
        }
    }
}
