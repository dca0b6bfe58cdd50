use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::dom::{doc_text, sel};

static COMPARABLE: LazyLock<Selector> = LazyLock::new(|| sel(".moreLikePanel .textLargest"));
static NEIGHBOURING: LazyLock<Selector> = LazyLock::new(|| sel(".neighborPanel .textLargest"));

pub fn comparable(document: &Html) -> Vec<String> {
    doc_text(document, &COMPARABLE)
}

pub fn neighbouring(document: &Html) -> Vec<String> {
    doc_text(document, &NEIGHBOURING)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_scoped_to_their_panels() {
        let doc = Html::parse_document(
            r#"<div class="moreLikePanel"><span class="textLargest"> China </span><span class="textLargest">Russia</span></div>
               <div class="neighborPanel"><span class="textLargest">Canada</span></div>
               <span class="textLargest">Stray</span>"#,
        );
        assert_eq!(comparable(&doc), vec!["China", "Russia"]);
        assert_eq!(neighbouring(&doc), vec!["Canada"]);
    }

    #[test]
    fn empty_when_panels_absent() {
        let doc = Html::parse_document("<p>nothing</p>");
        assert!(comparable(&doc).is_empty());
        assert!(neighbouring(&doc).is_empty());
    }
}
