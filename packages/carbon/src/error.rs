use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot find the trigger button (`{selector}`)")]
    TriggerNotFound { selector: &'static str },
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("Elements are built as `<{expected}-*>`, so they can't be defined with prefix `{prefix}`")]
    UnsupportedPrefix {
        prefix: String,
        expected: &'static str,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
