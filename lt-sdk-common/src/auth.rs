//! Authenticator trait and the simple header-based schemes.
//!
//! The transport calls [`Authenticator::authenticate`] right before sending,
//! so implementations that fetch or refresh tokens can do so asynchronously.
//!
//! # Example
//! ```no_run
//! use lt_sdk_common::auth::{Authenticator, BasicAuth};
//! use lt_sdk_common::transport::ReqwestTransport;
//! use std::sync::Arc;
//!
//! let auth: Arc<dyn Authenticator> = Arc::new(BasicAuth::new("apikey", "my-api-key"));
//! let transport = ReqwestTransport::builder().authenticator(auth).build();
//! ```

use crate::Error;
use base64::Engine;
use base64::engine::general_purpose;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), Error>;
}

/// Sends requests as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

#[async_trait::async_trait]
impl Authenticator for NoAuth {
    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<(), Error> {
        Ok(())
    }
}

#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for BasicAuth {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(Error::Authentication(
                "username and password must not be empty".to_owned(),
            ));
        }
        let encoded =
            general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.password));
        headers.insert(AUTHORIZATION, sensitive_value(&format!("Basic {encoded}"))?);
        Ok(())
    }
}

/// A pre-obtained bearer token. Refreshing it is up to the caller.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for BearerToken {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), Error> {
        if self.token.is_empty() {
            return Err(Error::Authentication("bearer token is empty".to_owned()));
        }
        headers.insert(AUTHORIZATION, sensitive_value(&format!("Bearer {}", self.token))?);
        Ok(())
    }
}

fn sensitive_value(s: &str) -> Result<HeaderValue, Error> {
    let mut v = HeaderValue::from_str(s)
        .map_err(|e| Error::Authentication(format!("invalid credentials: {e}")))?;
    v.set_sensitive(true);
    Ok(v)
}
