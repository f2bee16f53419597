//! The transport seam and its reqwest implementation.

use crate::Error;
use crate::auth::{Authenticator, NoAuth};
use crate::helper::into_request_failed_error;
use crate::request::{Body, FormPart, FormValue, RequestDescriptor};
use bon::Builder;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::multipart::{Form, Part};
use std::sync::Arc;
use tracing::debug;

/// A successful HTTP exchange. Non-2xx statuses are reported as
/// [`Error::RequestAPIFailed`] instead.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Performs authenticated HTTP I/O for a [`RequestDescriptor`].
///
/// Anything that retries, refreshes tokens or records traffic belongs in an
/// implementation of this trait.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send_request(&self, request: RequestDescriptor) -> Result<Response, Error>;
}

#[derive(Builder, Clone)]
pub struct ReqwestTransport {
    #[builder(default = Arc::new(NoAuth))]
    authenticator: Arc<dyn Authenticator>,
    #[builder(default)]
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Converts a descriptor into a reqwest request, authentication included.
    pub async fn to_request(&self, req: RequestDescriptor) -> Result<reqwest::Request, Error> {
        let url = req.full_url()?;
        let mut headers = req.headers;
        // reqwest生成带boundary的Content-Type
        if matches!(req.body, Body::Multipart(_)) {
            headers.remove(CONTENT_TYPE);
        }
        self.authenticator.authenticate(&mut headers).await?;

        let builder = self
            .http_client
            .request(req.method.into(), url)
            .headers(headers);
        let builder = match req.body {
            Body::Empty => builder,
            Body::Json(v) => {
                let bytes = serde_json::to_vec(&v)
                    .map_err(|e| Error::Common(format!("JSON serialize error: {e}")))?;
                builder.body(bytes)
            }
            Body::Text(s) => builder.body(s),
            Body::Multipart(parts) => builder.multipart(into_form(parts)?),
        };
        Ok(builder.build()?)
    }
}

fn into_form(parts: Vec<FormPart>) -> Result<Form, Error> {
    let mut form = Form::new();
    for FormPart { name, value } in parts {
        let part = match value {
            FormValue::Text(s) => Part::text(s),
            FormValue::File {
                data,
                filename,
                content_type,
            } => Part::bytes(data.to_vec())
                .file_name(filename)
                .mime_str(&content_type)?,
        };
        form = form.part(name, part);
    }
    Ok(form)
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send_request(&self, request: RequestDescriptor) -> Result<Response, Error> {
        let operation = request.operation;
        let request = self.to_request(request).await?;
        debug!(
            operation,
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );

        let resp = self.http_client.execute(request).await?;
        let status = resp.status();
        debug!(operation, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(into_request_failed_error(resp).await);
        }

        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
