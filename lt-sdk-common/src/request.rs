//! Operation descriptors and request assembly.
//!
//! [`build_request`] is pure: it turns an [`Operation`] plus the caller's
//! [`Params`] into a [`RequestDescriptor`] without touching the network.

use crate::Error;
use crate::helper::override_headers;
use crate::params::{ParamValue, Params};
use bytes::Bytes;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::{Map, Value};

pub const APPLICATION_JSON: &str = "application/json";
pub const TEXT_PLAIN: &str = "text/plain";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const OCTET_STREAM: &str = "application/octet-stream";

pub const SDK_ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

// 一个完整的path segment，`/`也要编码
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A field of a multipart body.
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    /// Fixed content type for file parts, overriding whatever the file says.
    pub content_type: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub enum BodyStyle {
    None,
    /// JSON object built from the listed fields that are set.
    Json(&'static [&'static str]),
    /// The raw string value of one parameter.
    Text(&'static str),
    Multipart(&'static [FormField]),
}

/// Static shape of one API operation.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path template, placeholders written as `{name}`.
    pub path: &'static str,
    pub required: &'static [&'static str],
    pub path_params: &'static [&'static str],
    pub query_params: &'static [&'static str],
    pub body: BodyStyle,
    /// `None` leaves `Accept` to the caller.
    pub accept: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File {
        data: Bytes,
        filename: String,
        content_type: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(Value),
    Text(String),
    Multipart(Vec<FormPart>),
}

/// A fully assembled request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Service url joined with the substituted path, without query.
    pub url: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Body,
}

impl RequestDescriptor {
    /// The url with the query string appended.
    pub fn full_url(&self) -> Result<url::Url, Error> {
        url::Url::parse_with_params(&self.url, &self.query)
            .map_err(|e| Error::Common(format!("invalid url `{}`: {}", self.url, e)))
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Client-wide settings that go into every request.
#[derive(Debug, Clone)]
pub struct RequestBase {
    pub service_url: String,
    pub service_name: &'static str,
    pub service_version: &'static str,
    pub user_agent: String,
    /// Query pairs sent with every call, e.g. the api version.
    pub default_query: Vec<(String, String)>,
    pub default_headers: HeaderMap,
}

pub fn build_request<P: Params + ?Sized>(
    base: &RequestBase,
    op: &Operation,
    params: &P,
    custom_headers: Option<&HeaderMap>,
) -> Result<RequestDescriptor, Error> {
    let path = substitute_path(op, params)?;
    let url = format!("{}{}", base.service_url.trim_end_matches('/'), path);

    let mut query = base.default_query.clone();
    for name in op.query_params {
        if let Some(v) = params.param(name) {
            query.push(((*name).to_owned(), query_value(name, v)?));
        }
    }

    let body = build_body(op, params)?;

    // 后面的覆盖前面的
    let mut headers = base.default_headers.clone();
    headers.extend(sdk_headers(base, op.name)?);
    if let Some(accept) = op.accept {
        headers.insert(ACCEPT, HeaderValue::from_static(accept));
    }
    if let Some(ct) = body_content_type(&body) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
    }
    if let Some(custom) = custom_headers {
        override_headers(&mut headers, custom);
    }

    Ok(RequestDescriptor {
        operation: op.name,
        method: op.method,
        url,
        path,
        query,
        headers,
        body,
    })
}

fn substitute_path<P: Params + ?Sized>(op: &Operation, params: &P) -> Result<String, Error> {
    let mut path = op.path.to_owned();
    for name in op.path_params {
        let value = match params.param(name) {
            Some(ParamValue::Str(s)) if !s.is_empty() => s,
            _ => return Err(Error::MissingPathParameter((*name).to_owned())),
        };
        // `.`和`..`会被url规范化掉
        if value == "." || value == ".." {
            return Err(Error::Common(format!(
                "path parameter `{name}` cannot be `{value}`"
            )));
        }
        let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
        path = path.replace(&format!("{{{name}}}"), &encoded);
    }
    if let Some(start) = path.find('{') {
        let name = path[start + 1..].split('}').next().unwrap_or_default();
        return Err(Error::MissingPathParameter(name.to_owned()));
    }
    Ok(path)
}

fn query_value(name: &str, v: ParamValue<'_>) -> Result<String, Error> {
    match v {
        ParamValue::Str(s) => Ok(s.to_owned()),
        ParamValue::StrList(list) => Ok(list.join(",")),
        ParamValue::Bool(b) => Ok(b.to_string()),
        ParamValue::File(_) => Err(Error::Common(format!(
            "`{name}` is a file and cannot be sent in the query string"
        ))),
    }
}

fn build_body<P: Params + ?Sized>(op: &Operation, params: &P) -> Result<Body, Error> {
    match op.body {
        BodyStyle::None => Ok(Body::Empty),
        BodyStyle::Json(fields) => {
            let mut obj = Map::new();
            for name in fields {
                let value = match params.param(name) {
                    None => continue,
                    Some(ParamValue::Str(s)) => Value::String(s.to_owned()),
                    Some(ParamValue::StrList(list)) => {
                        Value::Array(list.iter().cloned().map(Value::String).collect())
                    }
                    Some(ParamValue::Bool(b)) => Value::Bool(b),
                    Some(ParamValue::File(_)) => {
                        return Err(Error::Common(format!(
                            "`{name}` is a file and cannot be sent in a json body"
                        )));
                    }
                };
                obj.insert((*name).to_owned(), value);
            }
            Ok(Body::Json(Value::Object(obj)))
        }
        BodyStyle::Text(name) => match params.param(name) {
            Some(ParamValue::Str(s)) => Ok(Body::Text(s.to_owned())),
            _ => Err(Error::Common(format!("text body `{name}` is not set"))),
        },
        BodyStyle::Multipart(fields) => {
            let mut parts = Vec::with_capacity(fields.len());
            for field in fields {
                let value = match params.param(field.name) {
                    None => continue,
                    Some(ParamValue::File(f)) => FormValue::File {
                        data: f.data.clone(),
                        filename: f.filename.clone().unwrap_or_else(|| field.name.to_owned()),
                        content_type: field
                            .content_type
                            .map(str::to_owned)
                            .or_else(|| f.content_type.clone())
                            .unwrap_or_else(|| OCTET_STREAM.to_owned()),
                    },
                    Some(other) => FormValue::Text(query_value(field.name, other)?),
                };
                parts.push(FormPart {
                    name: field.name.to_owned(),
                    value,
                });
            }
            Ok(Body::Multipart(parts))
        }
    }
}

fn body_content_type(body: &Body) -> Option<&'static str> {
    match body {
        Body::Empty => None,
        Body::Json(_) => Some(APPLICATION_JSON),
        Body::Text(_) => Some(TEXT_PLAIN),
        Body::Multipart(_) => Some(MULTIPART_FORM_DATA),
    }
}

/// `User-Agent` and the analytics header naming service, version and operation.
pub fn sdk_headers(base: &RequestBase, operation: &str) -> Result<HeaderMap, Error> {
    let analytics = format!(
        "service_name={};service_version={};operation_id={}",
        base.service_name, base.service_version, operation
    );
    let mut map = HeaderMap::new();
    map.insert(USER_AGENT, header_value(&base.user_agent)?);
    map.insert(
        HeaderName::from_static(SDK_ANALYTICS_HEADER),
        header_value(&analytics)?,
    );
    Ok(map)
}

fn header_value(s: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(s).map_err(|e| Error::Common(format!("invalid header value `{s}`: {e}")))
}
