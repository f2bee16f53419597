//! Language Translator v3
//!
//! Every operation is started from [`Client`], filled in through its builder
//! and executed with `send()` (typed result) or `send_with_response()` (result
//! plus status and headers):
//!
//! ```no_run
//! use lt_sdk::translator::Client;
//! use lt_sdk_common::auth::BasicAuth;
//! use lt_sdk_common::transport::ReqwestTransport;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), lt_sdk::translator::Error> {
//! let transport = ReqwestTransport::builder()
//!     .authenticator(Arc::new(BasicAuth::new("apikey", "my-api-key")))
//!     .build();
//! let client = Client::builder()
//!     .version("2018-05-01")
//!     .transport(Arc::new(transport))
//!     .build()?;
//!
//! let res = client
//!     .translate()
//!     .text("hello")
//!     .source("en")
//!     .target("es")
//!     .build()
//!     .send()
//!     .await?;
//! println!("{}", res.translations[0].translation);
//! # Ok(())
//! # }
//! ```

mod documents;
mod error;
mod languages;
mod models;
mod translate;
mod types_rs;
mod utils;

pub use documents::*;
pub use error::Error;
pub use languages::*;
pub use models::*;
pub use translate::*;
pub use types_rs::*;

pub use lt_sdk_common::params::FileParam;

use bon::bon;
use lt_sdk_common::helper::override_headers;
use lt_sdk_common::params::{Params, missing_params};
use lt_sdk_common::request::{Operation, RequestBase, RequestDescriptor, build_request};
use lt_sdk_common::transport::{Response, Transport};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/language-translator/api";

const SERVICE_NAME: &str = "language_translator";
const SERVICE_VERSION: &str = "V3";

pub struct Client {
    transport: Arc<dyn Transport>,
    version: String,
    base: RequestBase,
}

#[bon]
impl Client {
    /// `version` is the api version date, e.g. `2018-05-01`, sent as the
    /// `version` query parameter with every request.
    #[builder(on(String, into))]
    pub fn new(
        version: String,
        transport: Arc<dyn Transport>,
        #[builder(default = DEFAULT_SERVICE_URL.to_owned())] service_url: String,
        /// Sent with every request, lowest precedence.
        #[builder(default)]
        default_headers: HeaderMap,
    ) -> Result<Self, Error> {
        let version = version.trim().to_owned();
        if version.is_empty() {
            return Err(Error::Configuration("version is required".to_owned()));
        }
        url::Url::parse(&service_url)
            .map_err(|e| Error::Configuration(format!("invalid service_url `{service_url}`: {e}")))?;

        let base = RequestBase {
            service_url: service_url.trim_end_matches('/').to_owned(),
            service_name: SERVICE_NAME,
            service_version: SERVICE_VERSION,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            default_query: vec![("version".to_owned(), version.clone())],
            default_headers,
        };

        Ok(Self {
            transport,
            version,
            base,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn service_url(&self) -> &str {
        &self.base.service_url
    }

    /// Validates `params` against the operation and assembles the request.
    /// Nothing is sent.
    pub(crate) fn prepare<P: Params + ?Sized>(
        &self,
        op: &Operation,
        params: &P,
        headers: &HeaderMap,
    ) -> Result<RequestDescriptor, Error> {
        let missing = missing_params(params, op.required);
        if !missing.is_empty() {
            warn!(operation = op.name, ?missing, "missing required parameters");
            return Err(Error::Validation {
                operation: op.name,
                missing: missing.into_iter().map(str::to_owned).collect(),
            });
        }
        build_request(&self.base, op, params, Some(headers)).map_err(Error::Request)
    }

    pub(crate) async fn execute<P: Params + ?Sized>(
        &self,
        op: &Operation,
        params: &P,
        headers: &HeaderMap,
    ) -> Result<Response, Error> {
        let request = self.prepare(op, params, headers)?;
        debug!(
            operation = op.name,
            method = request.method.as_str(),
            path = %request.path,
            "dispatching request"
        );
        Ok(self.transport.send_request(request).await?)
    }
}

/// Per-call headers, applied last so they override everything else.
///
/// Implemented by every operation builder.
pub trait HeadersExt: Sized {
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers_mut().insert(name, value);
        self
    }

    /// 同名头整体替换，多值头的每个值都会保留
    fn headers(mut self, headers: HeaderMap) -> Self {
        override_headers(self.headers_mut(), &headers);
        self
    }
}
