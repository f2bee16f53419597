#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("missing required parameters for {operation}: {}", .missing.join(", "))]
    Validation {
        operation: &'static str,
        missing: Vec<String>,
    },
    #[error("build request error: {0}")]
    Request(#[source] lt_sdk_common::Error),
    #[error(transparent)]
    Transport(#[from] lt_sdk_common::Error),
}
