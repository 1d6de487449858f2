// src/presentation/http/extractors.rs
use crate::{domain::locale::Locale, presentation::http::state::HttpState};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::ACCEPT_LANGUAGE, request::Parts},
};

use super::error::HttpError;

/// Locale of the caller: the best `Accept-Language` entry, else the
/// configured default.
#[derive(Debug, Clone)]
pub struct RequestLocale(pub Locale);

impl<S: Send + Sync> FromRequestParts<S> for RequestLocale {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(locale) = accept_language(&parts.headers) {
            return Ok(Self(locale));
        }

        let app_state = parts
            .extensions
            .get::<HttpState>()
            .ok_or_else(|| HttpError::internal("application state missing"))?;
        Ok(Self(app_state.default_locale.clone()))
    }
}

fn accept_language(headers: &HeaderMap) -> Option<Locale> {
    headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Locale::from_accept_language)
}

/// Originating client address as reported by a fronting proxy.
#[derive(Debug, Clone, Default)]
pub struct ClientAddress(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for ClientAddress {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let forwarded = header("x-forwarded-for").and_then(|value| {
            value
                .split(',')
                .map(str::trim)
                .find(|addr| !addr.is_empty())
                .map(str::to_string)
        });

        Ok(Self(forwarded.or_else(|| header("x-real-ip"))))
    }
}
