use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::model::AtAGlance;
use crate::parser::dom::{all_text, first_text, sel};
use crate::parser::error::ParseError;
use crate::parser::graph::extract_graph_data;
use crate::parser::text::{label, normalize_ws};

static GRAPH_INFO: LazyLock<Selector> = LazyLock::new(|| sel(".textSmall2"));
static COUNTRY_INFO: LazyLock<Selector> = LazyLock::new(|| sel(".textNormal"));
static QUICK_FACT: LazyLock<Selector> = LazyLock::new(|| sel(".glanceDescription"));

pub fn extract(content: ElementRef, document: &Html) -> Result<AtAGlance, ParseError> {
    let graph_data = extract_graph_data(document);
    if graph_data.is_none() {
        debug!("{}", ParseError::GraphDataNotFound);
    }

    let graph_info = first_text(content, &GRAPH_INFO).ok_or(ParseError::MissingElement {
        panel: "at-a-glance",
        selector: ".textSmall2",
    })?;
    let country_info = first_text(content, &COUNTRY_INFO).ok_or(ParseError::MissingElement {
        panel: "at-a-glance",
        selector: ".textNormal",
    })?;

    Ok(AtAGlance {
        graph_data,
        graph_info: normalize_ws(&graph_info),
        country_info,
        quick_facts: all_text(content, &QUICK_FACT).iter().map(|f| label(f)).collect(),
    })
}

// ── Tests ──
