use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::notes;
use crate::model::EndUseProducts;
use crate::parser::dom::{doc_text, sel};
use crate::parser::text::label;

// Product tiles are matched across the whole page, not just the panel body.
static PRODUCT: LazyLock<Selector> = LazyLock::new(|| sel(".prodTitleContainer"));

pub fn extract(document: &Html) -> EndUseProducts {
    EndUseProducts {
        description: notes::END_USE_PRODUCTS_DESCRIPTION.to_string(),
        products: doc_text(document, &PRODUCT).iter().map(|p| label(p)).collect(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_products_page_wide() {
        let doc = Html::parse_document(
            r#"<div class="panel"><div class="prodTitleContainer"> Petroleum </div></div>
               <div class="elsewhere"><div class="prodTitleContainer">AIRCRAFT</div></div>"#,
        );
        let p = extract(&doc);
        assert_eq!(p.products, vec!["petroleum", "aircraft"]);
        assert_eq!(p.description, notes::END_USE_PRODUCTS_DESCRIPTION);
    }
}
