//! One-time state carried across the post/redirect/get of a registration.
//!
//! The flash travels in a signed cookie: a value the server did not sign, or
//! one issued for another event, is ignored.

use axum::http::{HeaderMap, HeaderValue, header::SET_COOKIE};
use cookie::{CookieJar, Key, SameSite};
use headers::{Cookie as CookieHeader, HeaderMapExt};
use serde::{Deserialize, Serialize};

use crate::application::dto::RegistrationDto;

pub const FLASH_COOKIE: &str = "flash";
const FLASH_PATH: &str = "/register";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flash {
    pub event_id: i64,
    pub alert: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
}

impl Flash {
    pub fn registered(alert: &str, registration: &RegistrationDto) -> Self {
        Self {
            event_id: registration.event_id,
            alert: alert.to_string(),
            registration_id: Some(registration.id),
            email: Some(registration.email.clone()),
            name: Some(registration.name.clone()),
            first_name: Some(registration.first_name.clone()),
        }
    }

    /// Signed `Set-Cookie` value carrying this flash.
    pub fn to_cookie(&self, key: &Key) -> Option<HeaderValue> {
        let payload = match serde_urlencoded::to_string(self) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode flash");
                return None;
            }
        };

        let mut jar = CookieJar::new();
        jar.signed_mut(key).add(flash_cookie(payload));
        let signed = jar.get(FLASH_COOKIE)?;
        HeaderValue::from_str(&signed.encoded().to_string()).ok()
    }

    /// Reads the flash left for `event_id`. Unsigned, tampered or
    /// undecodable cookies and flashes for other events are dropped.
    pub fn from_headers(headers: &HeaderMap, key: &Key, event_id: i64) -> Option<Self> {
        let raw = headers.typed_get::<CookieHeader>()?.get(FLASH_COOKIE)?.to_string();
        let cookie = match cookie::Cookie::parse_encoded(format!("{FLASH_COOKIE}={raw}")) {
            Ok(cookie) => cookie.into_owned(),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring unparsable flash cookie");
                return None;
            }
        };

        let mut jar = CookieJar::new();
        jar.add_original(cookie);
        let Some(verified) = jar.signed(key).get(FLASH_COOKIE) else {
            tracing::warn!(event_id, "ignoring flash cookie with a bad signature");
            return None;
        };

        let flash: Self = match serde_urlencoded::from_str(verified.value()) {
            Ok(flash) => flash,
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed flash cookie");
                return None;
            }
        };
        if flash.event_id != event_id {
            tracing::debug!(event_id, flash_event_id = flash.event_id, "ignoring flash for another event");
            return None;
        }
        Some(flash)
    }
}

/// Whether the request sent a flash cookie at all, valid or not.
pub fn is_present(headers: &HeaderMap) -> bool {
    headers
        .typed_get::<CookieHeader>()
        .is_some_and(|cookie| cookie.get(FLASH_COOKIE).is_some())
}

/// `Set-Cookie` value that expires the flash.
pub fn clear_cookie() -> Option<HeaderValue> {
    let mut cookie = flash_cookie(String::new());
    cookie.make_removal();
    HeaderValue::from_str(&cookie.encoded().to_string()).ok()
}

pub fn append_set_cookie(headers: &mut HeaderMap, value: HeaderValue) {
    headers.append(SET_COOKIE, value);
}

/// Signing key for flash cookies. Without a configured secret a random key is
/// used, so flashes do not survive a restart or reach other instances.
pub fn signing_key(secret: Option<&[u8]>) -> Key {
    match secret.map(Key::try_from) {
        Some(Ok(key)) => key,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "flash secret unusable, using a random signing key");
            Key::generate()
        }
        None => {
            tracing::warn!("no flash secret configured, using a random signing key");
            Key::generate()
        }
    }
}

fn flash_cookie(value: String) -> cookie::Cookie<'static> {
    cookie::Cookie::build((FLASH_COOKIE, value))
        .path(FLASH_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
