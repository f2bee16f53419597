use crate::Error;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

pub fn into_header_map<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<HeaderMap, Error> {
    pairs
        .into_iter()
        .map(|(k, v)| {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| Error::Common(format!("invalid header name `{k}`: {e}")))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| Error::Common(format!("invalid header value for `{k}`: {e}")))?;
            Ok((name, value))
        })
        .collect()
}

/// 用`src`中的头整体替换`dst`中的同名头，多值头保留全部值
pub fn override_headers(dst: &mut HeaderMap, src: &HeaderMap) {
    for name in src.keys() {
        dst.remove(name);
        for value in src.get_all(name) {
            dst.append(name.clone(), value.clone());
        }
    }
}

pub async fn into_request_failed_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    let body = resp.text().await;
    match body {
        Ok(message) => Error::RequestAPIFailed {
            status: status.as_u16(),
            message,
        },
        Err(e) => Error::Reqwest(e),
    }
}

pub fn parse_json_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|e| {
        Error::Common(format!(
            "JSON parse error: {}, response text: {}",
            e,
            String::from_utf8_lossy(body)
        ))
    })
}
