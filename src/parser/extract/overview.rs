use std::sync::LazyLock;

use indexmap::IndexMap;
use scraper::{ElementRef, Selector};

use crate::model::Overview;
use crate::parser::dom::{all_text, descendants, first_text, sel};
use crate::parser::error::ParseError;
use crate::parser::text::label;

static RANK_CARD: LazyLock<Selector> = LazyLock::new(|| sel(".rankBaseContainer"));
static RANK_TITLE: LazyLock<Selector> = LazyLock::new(|| sel(".textNormal"));
static RANK_NUMBER: LazyLock<Selector> = LazyLock::new(|| sel(".textJumbo"));
static RANK_SUFFIX: LazyLock<Selector> = LazyLock::new(|| sel(".textSmall1"));
static CAPABILITY: LazyLock<Selector> = LazyLock::new(|| sel(".capabilitiesBoxes"));

fn missing(selector: &'static str) -> ParseError {
    ParseError::MissingElement {
        panel: "overview",
        selector,
    }
}

pub fn extract(content: ElementRef) -> Result<Overview, ParseError> {
    let mut ranks = IndexMap::new();
    for card in descendants(content, &RANK_CARD) {
        let title = first_text(card, &RANK_TITLE).ok_or_else(|| missing(".textNormal"))?;
        let number = first_text(card, &RANK_NUMBER).ok_or_else(|| missing(".textJumbo"))?;
        let suffix = first_text(card, &RANK_SUFFIX).ok_or_else(|| missing(".textSmall1"))?;
        ranks.insert(title, format!("{}{}", number, suffix));
    }

    Ok(Overview {
        ranks,
        capabilities: all_text(content, &CAPABILITY).iter().map(|c| label(c)).collect(),
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn card(title: &str, number: &str, suffix: &str) -> String {
        format!(
            "<div class=\"rankBaseContainer\"><span class=\"textNormal\"> {} </span><span class=\"textJumbo\"> {} </span><span class=\"textSmall1\"> {} </span></div>",
            title, number, suffix
        )
    }

    fn overview(body: &str) -> Result<Overview, ParseError> {
        let doc = Html::parse_document(&format!("<div class=\"content\">{}</div>", body));
        let content = doc.select(&sel(".content")).next().unwrap();
        extract(content)
    }

    #[test]
    fn joins_rank_number_and_suffix() {
        let body = [
            card("GFP Ranking", "1", "st"),
            card("PwrIndx", "0.0699", "(0.0000 is perfect)"),
            "<div class=\"capabilitiesBoxes\"> Nuclear Triad </div><div class=\"capabilitiesBoxes\">Space Force</div>".to_string(),
        ]
        .concat();
        let o = overview(&body).unwrap();
        assert_eq!(o.ranks["GFP Ranking"], "1st");
        assert_eq!(o.ranks["PwrIndx"], "0.0699(0.0000 is perfect)");
        assert_eq!(o.capabilities, vec!["nuclear triad", "space force"]);
    }

    #[test]
    fn incomplete_card_fails_section() {
        let body = "<div class=\"rankBaseContainer\"><span class=\"textNormal\">GFP Ranking</span></div>";
        assert!(matches!(
            overview(body).unwrap_err(),
            ParseError::MissingElement { selector: ".textJumbo", .. }
        ));
    }
}
