use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Selector};

use super::notes;
use crate::model::Capital;
use crate::parser::dom::{descendants, first, first_text, sel, text_of};
use crate::parser::error::ParseError;
use crate::parser::text::{month_key, value_after_colon};

static NAME_LINE: LazyLock<Selector> = LazyLock::new(|| sel("div:nth-of-type(1)"));
static POPULATION_LINE: LazyLock<Selector> = LazyLock::new(|| sel("div:nth-of-type(2)"));
static MONTH: LazyLock<Selector> = LazyLock::new(|| sel(".calenderContainers"));
static MONTH_NAME: LazyLock<Selector> = LazyLock::new(|| sel(".textNormal"));
static MONTH_TEMP: LazyLock<Selector> = LazyLock::new(|| sel(".textBold"));

fn missing(selector: &'static str) -> ParseError {
    ParseError::MissingElement {
        panel: "capital",
        selector,
    }
}

/// Value of a `"Label: value"` line.
fn line_value(content: ElementRef, selector: &Selector, css: &'static str) -> Result<String, ParseError> {
    first(content, selector)
        .and_then(|line| value_after_colon(&text_of(line)))
        .ok_or_else(|| missing(css))
}

pub fn extract(content: ElementRef) -> Result<Capital, ParseError> {
    let capital_name = line_value(content, &NAME_LINE, "div:nth-of-type(1)")?;
    let capital_population = line_value(content, &POPULATION_LINE, "div:nth-of-type(2)")?;

    // an incomplete month card fails the section
    let mut temperatures = IndexMap::new();
    for month in descendants(content, &MONTH) {
        let name = first_text(month, &MONTH_NAME).ok_or_else(|| missing(".textNormal"))?;
        let temp = first_text(month, &MONTH_TEMP).ok_or_else(|| missing(".textBold"))?;
        temperatures.insert(month_key(&name), temp);
    }

    Ok(Capital {
        capital_name,
        capital_population,
        average_monthly_temperatures: temperatures,
        metric: notes::CAPITAL_METRIC.to_string(),
    })
}

// ── Tests ──
