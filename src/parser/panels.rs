use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::dom::{next_sibling_div, sel, text_of};
use super::text::header_key;

static HEADER: LazyLock<Selector> = LazyLock::new(|| sel(".contentStripInner .collapsible"));

/// Panels the extractor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    AtAGlance,
    Overview,
    Capital,
    Financials,
    Geography,
    Manpower,
    Airpower,
    LandForces,
    NavalForces,
    EndUseProducts,
    NaturalResources,
    Logistics,
}

impl PanelKind {
    pub const ALL: [PanelKind; 12] = [
        PanelKind::AtAGlance,
        PanelKind::Overview,
        PanelKind::Capital,
        PanelKind::Financials,
        PanelKind::Geography,
        PanelKind::Manpower,
        PanelKind::Airpower,
        PanelKind::LandForces,
        PanelKind::NavalForces,
        PanelKind::EndUseProducts,
        PanelKind::NaturalResources,
        PanelKind::Logistics,
    ];

    /// Normalized header label, as produced by `text::header_key`.
    pub fn key(self) -> &'static str {
        match self {
            PanelKind::AtAGlance => "at-a-glance",
            PanelKind::Overview => "overview",
            PanelKind::Capital => "capital",
            PanelKind::Financials => "financials",
            PanelKind::Geography => "geography",
            PanelKind::Manpower => "manpower",
            PanelKind::Airpower => "airpower",
            PanelKind::LandForces => "land forces",
            PanelKind::NavalForces => "naval forces",
            PanelKind::EndUseProducts => "end-use products",
            PanelKind::NaturalResources => "natural resources",
            PanelKind::Logistics => "logistics",
        }
    }

    /// Key the panel is reported under in the output.
    pub fn output_key(self) -> &'static str {
        match self {
            PanelKind::Airpower => "air-power",
            other => other.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<PanelKind> {
        PanelKind::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// One collapsible panel found on the page.
#[derive(Debug, Clone)]
pub struct Panel<'a> {
    pub key: String,
    pub kind: Option<PanelKind>,
    /// The first `<div>` following the header at the same level, if any.
    pub content: Option<ElementRef<'a>>,
}

/// Collect the page's panel headers in document order.
pub fn discover_panels(document: &Html) -> Vec<Panel<'_>> {
    document
        .select(&HEADER)
        .map(|header| {
            let key = header_key(&text_of(header));
            Panel {
                kind: PanelKind::from_key(&key),
                content: next_sibling_div(header),
                key,
            }
        })
        .collect()
}

// ── Tests ──
