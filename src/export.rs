//! JSON export of the survey figures

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::route::Route;
use crate::survey::{overview::OVERVIEW, sections, Overview, Section, TOTAL_RESPONDENTS};

#[derive(Debug, Serialize)]
pub struct Export {
    pub title: &'static str,
    pub generated_at: String,
    pub total_respondents: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<&'static Overview>,
    pub sections: Vec<&'static Section>,
}

/// Everything, or just the page for `route`
pub fn build(route: Option<Route>) -> Export {
    let overview = match route {
        None | Some(Route::Overview) => Some(&OVERVIEW),
        Some(_) => None,
    };
    let sections = sections()
        .into_iter()
        .filter(|s| route.map_or(true, |r| s.route == r))
        .collect();

    Export {
        title: OVERVIEW.title,
        generated_at: chrono::Local::now().to_rfc3339(),
        total_respondents: TOTAL_RESPONDENTS,
        overview,
        sections,
    }
}

/// Pretty JSON to `output`, or stdout when none is given
pub fn write(export: &Export, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(export)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::info!(path = %path.display(), sections = export.sections.len(), "wrote export");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}
