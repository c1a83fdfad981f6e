use http::header::CONTENT_TYPE;
use http::{Method, Request, Response};
use serde::de::DeserializeOwned;

use crate::core::errors::{ClientError, Result};

/// Builds a request carrying the JSON content type every endpoint expects.
pub fn json_request(method: Method, path: &str, body: Vec<u8>) -> Result<Request<Vec<u8>>> {
    Ok(Request::builder()
        .method(method)
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(body)?)
}

/// Any non-2xx status is a failed request; the body is not inspected.
pub fn ensure_success(response: Response<Vec<u8>>) -> Result<Response<Vec<u8>>> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ClientError::RequestFailed {
            status: response.status(),
        })
    }
}

pub fn decode_json<T: DeserializeOwned>(response: &Response<Vec<u8>>) -> Result<T> {
    Ok(serde_json::from_slice(response.body())?)
}

/// The last path segment of a page URL, with query and fragment removed and
/// percent-escapes decoded. `/profiles/42?tab=posts` yields `42`.
pub fn trailing_segment(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let raw = path.rsplit('/').next().unwrap_or_default();
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
