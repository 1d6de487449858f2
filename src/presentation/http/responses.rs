//! Response helpers shared by the controllers.

use axum::{
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{CONTENT_TYPE, IF_MODIFIED_SINCE, LAST_MODIFIED, LOCATION},
    },
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::presentation::syndication::SyndicationDocument;

/// `302 Found` to `location`.
pub fn found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(LOCATION, value)]).into_response(),
        Err(_) => (StatusCode::FOUND, [(LOCATION, HeaderValue::from_static("/"))]).into_response(),
    }
}

/// Serves a rendered export as UTF-8 with its media type, honouring
/// `If-Modified-Since` when `last_modified` is known.
pub fn document(
    request_headers: &HeaderMap,
    doc: SyndicationDocument,
    last_modified: Option<DateTime<Utc>>,
) -> Response {
    let last_modified = last_modified.and_then(http_date);

    if let Some((stamp, _)) = &last_modified {
        if not_modified_since(request_headers, *stamp) {
            let mut response = StatusCode::NOT_MODIFIED.into_response();
            if let Some((_, value)) = last_modified {
                response.headers_mut().insert(LAST_MODIFIED, value);
            }
            return response;
        }
    }

    let content_type = HeaderValue::from_str(&format!("{}; charset=utf-8", doc.content_type))
        .unwrap_or_else(|_| HeaderValue::from_static("text/plain; charset=utf-8"));
    let mut response = ([(CONTENT_TYPE, content_type)], doc.body).into_response();
    if let Some((_, value)) = last_modified {
        response.headers_mut().insert(LAST_MODIFIED, value);
    }
    response
}

/// Timestamps before the epoch have no HTTP date.
fn http_date(at: DateTime<Utc>) -> Option<(SystemTime, HeaderValue)> {
    let secs = u64::try_from(at.timestamp()).ok()?;
    let stamp = UNIX_EPOCH + Duration::from_secs(secs);
    let value = HeaderValue::from_str(&httpdate::fmt_http_date(stamp)).ok()?;
    Some((stamp, value))
}

fn not_modified_since(headers: &HeaderMap, last_modified: SystemTime) -> bool {
    headers
        .get(IF_MODIFIED_SINCE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| httpdate::parse_http_date(value).ok())
        .is_some_and(|since| last_modified <= since)
}
