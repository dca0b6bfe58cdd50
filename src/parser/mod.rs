pub mod dom;
pub mod error;
pub mod extract;
pub mod graph;
pub mod panels;
pub mod stats;
pub mod text;

use scraper::Html;
use tracing::info;

use crate::model::Report;
use error::ParseError;

/// Pipeline: markup → panels → per-panel records → report.
pub fn process_page(html: &str) -> Result<Report, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::EmptyDocument);
    }
    let document = Html::parse_document(html);
    let report = extract::extract_all(&document);
    info!(
        "Extracted {} panels, {} comparable and {} neighbouring powers",
        report.section_count(),
        report.comparable_powers.len(),
        report.neighbouring_powers.len()
    );
    Ok(report)
}

// ── Tests ──
