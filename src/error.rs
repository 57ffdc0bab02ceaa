use thiserror::Error;

/// Everything that can stop a conversion.
///
/// Every variant is fatal to the call that raised it; there is no partial
/// output. Structural errors point at authoring mistakes in the document and
/// are meant to be surfaced to whoever wrote it.
#[derive(Debug, Error)]
pub enum Error {
    /// The markup parser rejected the byte stream, propagated verbatim.
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),

    #[error("root element is <{0}>, expected <message>")]
    WrongRoot(String),

    #[error("message contains no <t> segments")]
    EmptyMessage,

    #[error("unknown tag <{0}>")]
    UnknownTag(String),

    #[error("missing or invalid action on click event")]
    InvalidClickAction,

    #[error("hover event has no usable content")]
    InvalidHover,

    #[error("item hover content is not supported")]
    UnsupportedItem,

    #[error("failed to serialize component tree: {0}")]
    Json(#[from] serde_json::Error),
}
