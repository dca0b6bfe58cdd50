use scraper::{ElementRef, Html, Selector};

/// Parse a selector known at compile time. Used from `LazyLock` statics only.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Concatenated text of an element and all its descendants.
pub fn text_of(element: ElementRef) -> String {
    element.text().collect()
}

/// Matches strictly inside `scope`; the scope element itself never matches.
pub fn descendants<'a, 'b>(
    scope: ElementRef<'a>,
    selector: &'b Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'b
where
    'a: 'b,
{
    scope.select(selector).filter(move |e| e.id() != scope.id())
}

pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    descendants(scope, selector).next()
}

/// Trimmed text of the first match inside `scope`.
pub fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    first(scope, selector).map(|e| text_of(e).trim().to_string())
}

/// Trimmed text of every match inside `scope`, in document order.
pub fn all_text(scope: ElementRef, selector: &Selector) -> Vec<String> {
    descendants(scope, selector)
        .map(|e| text_of(e).trim().to_string())
        .collect()
}

/// Trimmed text of every match in the whole document.
pub fn doc_text(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .map(|e| text_of(e).trim().to_string())
        .collect()
}

/// First `<div>` among the following siblings. Text, comments and other
/// elements in between are skipped.
pub fn next_sibling_div(element: ElementRef) -> Option<ElementRef> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "div")
}

// ── Tests ──
