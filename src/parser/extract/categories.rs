use scraper::ElementRef;

use super::notes;
use crate::model::CategoryStats;
use crate::parser::error::ParseError;
use crate::parser::panels::PanelKind;
use crate::parser::stats::extract_stats;

/// Stat-row panels: the shared row parser plus the panel's legend text.
pub fn extract(kind: PanelKind, content: ElementRef) -> Result<CategoryStats, ParseError> {
    let mut stats = extract_stats(content)?;
    match kind {
        PanelKind::Financials => stats.metric = Some(notes::FINANCIALS_METRIC.to_string()),
        PanelKind::Geography => stats.metric = Some(notes::GEOGRAPHY_METRIC.to_string()),
        PanelKind::Manpower => stats.description = Some(notes::MANPOWER_DESCRIPTION.to_string()),
        PanelKind::Airpower => stats.description = Some(notes::AIRPOWER_DESCRIPTION.to_string()),
        PanelKind::LandForces => {
            stats.description = Some(notes::LAND_FORCES_DESCRIPTION.to_string())
        }
        PanelKind::NaturalResources => {
            stats.metrics = Some(notes::NATURAL_RESOURCES_METRICS.to_string())
        }
        _ => {}
    }
    Ok(stats)
}

// ── Tests ──
