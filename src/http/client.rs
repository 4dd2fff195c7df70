use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::error::CheckError;

use super::request::CheckRequest;
use super::response::{HttpResponse, ResponseBody};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the shared client. `None` leaves requests unbounded.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// `<base>/<path>` with any trailing slash on the base collapsed, so the
/// root check targets `<base>/`.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

pub async fn send_request(
    client: &reqwest::Client,
    base_url: &str,
    request: &CheckRequest,
) -> Result<HttpResponse, CheckError> {
    let target = join_url(base_url, &request.path);
    let mut url = reqwest::Url::parse(&target).map_err(|e| CheckError::InvalidUrl {
        url: target.clone(),
        reason: e.to_string(),
    })?;

    if !request.method.sends_body() && !request.query.is_empty() {
        let mut query_pairs = url.query_pairs_mut();
        for (key, value) in &request.query {
            query_pairs.append_pair(key, value);
        }
    }

    let mut req_builder = client
        .request(request.method.into(), url.clone())
        .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    if request.method.sends_body() {
        if let Some(body) = &request.body {
            req_builder = req_builder.body(serde_json::to_string(body)?);
        }
    }

    debug!(method = %request.method, url = %url, "sending request");

    let started = Instant::now();
    let response = req_builder.send().await.map_err(CheckError::Transport)?;
    let elapsed = started.elapsed().as_millis();

    let status = response.status();
    let bytes = response.bytes().await.map_err(CheckError::ReadBody)?;

    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        duration_ms: elapsed,
        size_bytes: bytes.len(),
        body: ResponseBody::decode(&bytes),
    })
}
