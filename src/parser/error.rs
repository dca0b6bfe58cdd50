#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("document is empty")]
    EmptyDocument,
    #[error("panel '{panel}' has no content block after its header")]
    SectionUnavailable { panel: &'static str },
    #[error("panel '{panel}' is missing element '{selector}'")]
    MissingElement {
        panel: &'static str,
        selector: &'static str,
    },
    #[error("stat row {index} has no {missing}")]
    MalformedRow { index: usize, missing: &'static str },
    #[error("no chart data literal found in page scripts")]
    GraphDataNotFound,
}
