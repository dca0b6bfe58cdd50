use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Selector};

use crate::model::CategoryStats;
use crate::parser::dom::{descendants, first_text, sel};
use crate::parser::error::ParseError;
use crate::parser::stats::extract_stats;

static HULL: LazyLock<Selector> = LazyLock::new(|| sel(".hullClassContainers"));
static HULL_TYPE: LazyLock<Selector> = LazyLock::new(|| sel(".textNormal"));
static HULL_TEXT: LazyLock<Selector> = LazyLock::new(|| sel(".textSmall1"));

pub fn extract(content: ElementRef) -> Result<CategoryStats, ParseError> {
    let mut stats = extract_stats(content)?;

    let hulls: IndexMap<String, String> = descendants(content, &HULL)
        .filter_map(|hull| Some((first_text(hull, &HULL_TYPE)?, first_text(hull, &HULL_TEXT)?)))
        .collect();
    if !hulls.is_empty() {
        stats.hull_types_descriptions = Some(hulls);
    }

    Ok(stats)
}

// ── Tests ──
