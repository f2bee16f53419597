use super::Error;
use super::types_rs::DetailedResponse;
use lt_sdk_common::helper::parse_json_body;
use lt_sdk_common::transport::Response;

pub(crate) fn into_json_response<T: serde::de::DeserializeOwned>(
    resp: Response,
) -> Result<DetailedResponse<T>, Error> {
    let result = parse_json_body(&resp.body)?;
    Ok(DetailedResponse {
        status: resp.status,
        headers: resp.headers,
        result,
    })
}

pub(crate) fn into_bytes_response(resp: Response) -> DetailedResponse<bytes::Bytes> {
    DetailedResponse {
        status: resp.status,
        headers: resp.headers,
        result: resp.body,
    }
}

pub(crate) fn into_empty_response(resp: Response) -> DetailedResponse<()> {
    DetailedResponse {
        status: resp.status,
        headers: resp.headers,
        result: (),
    }
}
