// src/presentation/http/controllers/registrations.rs
use crate::application::{
    commands::registrations::{
        AlertCode, RegisterCommand, RegistrationInput, RegistrationOutcome,
    },
    dto::{EventDto, RegistrationDto},
    ports::verification::VerificationContext,
    queries::events::GetEventByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ClientAddress, RequestLocale};
use crate::presentation::http::flash::{self, Flash};
use crate::presentation::http::responses::found;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Path,
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registration form as posted by the browser.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegistrationForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "firstName")]
    pub first_name: String,
    /// Challenge response of the human verification widget.
    #[serde(default, rename = "g-recaptcha-response")]
    pub verification_response: Option<String>,
}

impl RegistrationForm {
    fn into_parts(self) -> (RegistrationInput, Option<String>) {
        (
            RegistrationInput::new(self.email, self.name, self.first_name),
            self.verification_response,
        )
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFormView {
    pub event: EventDto,
    pub form: RegistrationInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    /// The registration just created, when arriving from a successful submit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/register/{event_id}",
    params(("event_id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Registration form, with the outcome of the previous submit if any.", body = RegistrationFormView),
        (status = 302, description = "Unknown event; redirects to the index.")
    ),
    tag = "Registrations"
)]
pub async fn show_form(
    Extension(state): Extension<HttpState>,
    Path(event_id): Path<String>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let Ok(id) = event_id.parse::<i64>() else {
        return Ok(found("/"));
    };

    let Some(event) = state
        .services
        .event_queries
        .get_event(GetEventByIdQuery { id })
        .await
        .into_http()?
    else {
        return Ok(found("/"));
    };

    let pending = Flash::from_headers(&headers, &state.flash_key, id);
    let form = pending
        .as_ref()
        .map(|f| {
            RegistrationInput::new(
                f.email.clone().unwrap_or_default(),
                f.name.clone().unwrap_or_default(),
                f.first_name.clone().unwrap_or_default(),
            )
        })
        .unwrap_or_default();

    let view = RegistrationFormView {
        event: EventDto::from(event),
        form,
        alert: pending.as_ref().map(|f| f.alert.clone()),
        registration_id: pending.as_ref().and_then(|f| f.registration_id),
    };

    let mut response = Json(view).into_response();
    if flash::is_present(&headers) {
        match flash::clear_cookie() {
            Some(value) => flash::append_set_cookie(response.headers_mut(), value),
            None => tracing::warn!("failed to clear flash cookie"),
        }
    }
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/register/{event_id}",
    params(("event_id" = i64, Path, description = "Event id")),
    request_body(content = RegistrationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Rejected; the form is shown again with an alert.", body = RegistrationFormView),
        (status = 302, description = "Registered (redirects to the form view with a flash) or unknown event (redirects to the index)."),
        (status = 500, description = "Store failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Registrations"
)]
pub async fn submit(
    Extension(state): Extension<HttpState>,
    Path(event_id): Path<String>,
    RequestLocale(locale): RequestLocale,
    ClientAddress(remote_addr): ClientAddress,
    Form(form): Form<RegistrationForm>,
) -> HttpResult<Response> {
    let Ok(event_id) = event_id.parse::<i64>() else {
        return Ok(found("/"));
    };

    let (input, response_token) = form.into_parts();
    let command = RegisterCommand {
        event_id,
        input,
        verification: VerificationContext {
            response_token,
            remote_addr,
        },
        locale,
    };

    let outcome = state
        .services
        .registration_commands
        .register(command)
        .await
        .into_http()?;

    Ok(match outcome {
        RegistrationOutcome::EventNotFound => found("/"),
        RegistrationOutcome::Rejected {
            event,
            input,
            alert,
        } => Json(RegistrationFormView {
            event: EventDto::from(event),
            form: input,
            alert: Some(alert.as_str().to_string()),
            registration_id: None,
        })
        .into_response(),
        RegistrationOutcome::Registered {
            event,
            registration,
        } => {
            let registration = RegistrationDto::from(&registration);
            let mut response = found(&format!("/register/{}", event.id()));
            let pending = Flash::registered(AlertCode::Registered.as_str(), &registration);
            match pending.to_cookie(&state.flash_key) {
                Some(value) => flash::append_set_cookie(response.headers_mut(), value),
                None => tracing::warn!(
                    registration_id = registration.id,
                    "registration stored but flash could not be set"
                ),
            }
            response
        }
    })
}
