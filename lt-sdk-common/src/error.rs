#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error: {0}")]
    Common(String),
    #[error("missing path parameter: {0}")]
    MissingPathParameter(String),
    #[error("authentication error: {0}")]
    Authentication(String),
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: u16, message: String },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
