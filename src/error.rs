use thiserror::Error;

/// Invalid input reaching the page from the DOM. Every variant is logged and ignored
/// at the event boundary; none of them mutate state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("unknown color `{0}`")]
    UnknownColor(String),
    #[error("unknown concept `{0}`")]
    UnknownConcept(String),
    #[error("drop is missing the {0} identifier")]
    MissingDropData(&'static str),
    #[error("element `{0}` not available")]
    MissingElement(&'static str),
}
