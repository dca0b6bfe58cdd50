use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::dom::{descendants, first_text, sel, text_of};
use super::error::ParseError;
use super::text::clean_quantity;
use crate::model::{CategoryStats, Quantity, StatEntry};

static ROW: LazyLock<Selector> = LazyLock::new(|| sel(".specsGenContainers"));
static CELL: LazyLock<Selector> = LazyLock::new(|| sel(".textLarge"));
static RANK_BADGE: LazyLock<Selector> = LazyLock::new(|| sel(".specsRankBox"));

/// Parse the repeated stat rows of a category panel.
///
/// Each row holds a label cell, a value cell, an optional secondary value cell
/// and an optional rank badge. The first row without a rank badge is kept
/// (with `rank: None`) and ends the category: rows after it are not read.
pub fn extract_stats(content: ElementRef) -> Result<CategoryStats, ParseError> {
    let mut out = CategoryStats::default();

    for (index, row) in descendants(content, &ROW).enumerate() {
        let cells: Vec<ElementRef> = descendants(row, &CELL).collect();

        let title = cells
            .first()
            .map(|c| text_of(*c).trim().to_string())
            .ok_or(ParseError::MalformedRow { index, missing: "label" })?;
        let primary = cells
            .get(1)
            .map(|c| clean_quantity(&text_of(*c)))
            .ok_or(ParseError::MalformedRow { index, missing: "value" })?;

        let quantity = match cells.get(2) {
            Some(secondary) => Quantity::Pair(primary, text_of(*secondary).trim().to_string()),
            None => Quantity::Single(primary),
        };

        let rank = first_text(row, &RANK_BADGE);
        let stop = rank.is_none();
        out.stats.insert(title, StatEntry { quantity, rank });
        if stop {
            break;
        }
    }

    Ok(out)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn row(title: &str, value: &str, rank: Option<&str>) -> String {
        let badge = rank
            .map(|r| format!("<div class=\"specsRankBox\"> {} </div>", r))
            .unwrap_or_default();
        format!(
            "<div class=\"specsGenContainers\"><span class=\"textLarge\">{}</span><span class=\"textLarge\">{}</span>{}</div>",
            title, value, badge
        )
    }

    fn stats_for(body: &str) -> Result<CategoryStats, ParseError> {
        let doc = Html::parse_document(&format!("<div class=\"content\">{}</div>", body));
        let content = doc.select(&sel(".content")).next().unwrap();
        extract_stats(content)
    }

    #[test]
    fn stops_at_first_unranked_row() {
        let body = [
            row("A", "1", Some("1")),
            row("B", "2", Some("2")),
            row("C", "3", None),
            row("D", "4", Some("3")),
        ]
        .concat();
        let stats = stats_for(&body).unwrap();
        let keys: Vec<&str> = stats.stats.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert_eq!(stats.stats["A"].rank.as_deref(), Some("1"));
        assert_eq!(stats.stats["C"].rank, None);
        assert_eq!(stats.stats["C"].quantity, Quantity::Single("3".into()));
    }

    #[test]
    fn unranked_first_row_ends_category() {
        let body = [row("Only", "9", None), row("Never", "1", Some("1"))].concat();
        let stats = stats_for(&body).unwrap();
        assert_eq!(stats.stats.len(), 1);
        assert!(stats.stats.contains_key("Only"));
    }

    #[test]
    fn third_cell_makes_pair() {
        let body = "<div class=\"specsGenContainers\">\
            <span class=\"textLarge\">Total Population:</span>\
            <span class=\"textLarge\">\n\t\t339,665,118\n\t</span>\
            <span class=\"textLarge\"> 4.3% </span>\
            <div class=\"specsRankBox\">3</div></div>";
        let stats = stats_for(body).unwrap();
        let entry = &stats.stats["Total Population:"];
        assert_eq!(entry.quantity, Quantity::Pair("339,665,118".into(), "4.3%".into()));
        assert_eq!(entry.rank.as_deref(), Some("3"));
    }

    #[test]
    fn missing_value_cell_is_malformed() {
        let body = [
            row("A", "1", Some("1")),
            "<div class=\"specsGenContainers\"><span class=\"textLarge\">Broken</span></div>".to_string(),
        ]
        .concat();
        let err = stats_for(&body).unwrap_err();
        assert!(matches!(err, ParseError::MalformedRow { index: 1, missing: "value" }));
    }

    #[test]
    fn no_rows_is_empty_category() {
        let stats = stats_for("<p>nothing here</p>").unwrap();
        assert!(stats.stats.is_empty());
    }
}
