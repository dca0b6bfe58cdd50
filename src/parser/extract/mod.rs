pub mod capital;
pub mod categories;
pub mod glance;
pub mod naval;
pub mod notes;
pub mod overview;
pub mod powers;
pub mod products;

use scraper::{ElementRef, Html};
use tracing::{debug, warn};

use super::error::ParseError;
use super::panels::{discover_panels, PanelKind};
use crate::model::*;

/// One panel's finished sub-record.
#[derive(Debug, Clone)]
pub enum Section {
    AtAGlance(AtAGlance),
    Overview(Overview),
    Capital(Capital),
    Category(PanelKind, CategoryStats),
    EndUseProducts(EndUseProducts),
}

/// Collects finished sections into a `Report`. A panel that failed never
/// reaches the builder, so no half-written section can leak into the output.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    report: Report,
}

impl ReportBuilder {
    pub fn insert(&mut self, section: Section) {
        let r = &mut self.report;
        match section {
            Section::AtAGlance(s) => r.at_a_glance = Some(s),
            Section::Overview(s) => r.overview = Some(s),
            Section::Capital(s) => r.capital = Some(s),
            Section::EndUseProducts(s) => r.end_use_products = Some(s),
            Section::Category(kind, stats) => {
                let slot = match kind {
                    PanelKind::Financials => &mut r.financials,
                    PanelKind::Geography => &mut r.geography,
                    PanelKind::Manpower => &mut r.manpower,
                    PanelKind::Airpower => &mut r.air_power,
                    PanelKind::LandForces => &mut r.land_forces,
                    PanelKind::NavalForces => &mut r.naval_forces,
                    PanelKind::NaturalResources => &mut r.natural_resources,
                    PanelKind::Logistics => &mut r.logistics,
                    other => {
                        warn!("No category slot for panel '{}'", other.key());
                        return;
                    }
                };
                *slot = Some(stats);
            }
        }
    }

    pub fn finish(self, comparable_powers: Vec<String>, neighbouring_powers: Vec<String>) -> Report {
        Report {
            comparable_powers,
            neighbouring_powers,
            ..self.report
        }
    }
}

/// Run the handler registered for `kind` against the panel body.
pub fn extract_panel(
    kind: PanelKind,
    content: ElementRef,
    document: &Html,
) -> Result<Section, ParseError> {
    let section = match kind {
        PanelKind::AtAGlance => Section::AtAGlance(glance::extract(content, document)?),
        PanelKind::Overview => Section::Overview(overview::extract(content)?),
        PanelKind::Capital => Section::Capital(capital::extract(content)?),
        PanelKind::NavalForces => Section::Category(kind, naval::extract(content)?),
        PanelKind::EndUseProducts => Section::EndUseProducts(products::extract(document)),
        PanelKind::Financials
        | PanelKind::Geography
        | PanelKind::Manpower
        | PanelKind::Airpower
        | PanelKind::LandForces
        | PanelKind::NaturalResources
        | PanelKind::Logistics => Section::Category(kind, categories::extract(kind, content)?),
    };
    Ok(section)
}

/// Walk the panels present on the page, extract each known one, then attach
/// the page-wide power lists. Panel failures drop that panel only.
pub fn extract_all(document: &Html) -> Report {
    let panels = discover_panels(document);
    if panels.is_empty() {
        debug!("No panel headers on page");
    }

    let mut builder = ReportBuilder::default();
    for panel in &panels {
        let Some(kind) = panel.kind else {
            debug!("Skipping unrecognised panel '{}'", panel.key);
            continue;
        };

        let result = panel
            .content
            .ok_or(ParseError::SectionUnavailable { panel: kind.key() })
            .and_then(|content| extract_panel(kind, content, document));

        match result {
            Ok(section) => {
                debug!("Extracted panel '{}'", kind.output_key());
                builder.insert(section);
            }
            Err(e) => warn!("Dropping panel '{}': {}", kind.output_key(), e),
        }
    }

    builder.finish(powers::comparable(document), powers::neighbouring(document))
}

// ── Tests ──
