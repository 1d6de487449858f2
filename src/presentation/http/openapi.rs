// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::site::index,
        crate::presentation::http::controllers::site::archive,
        crate::presentation::http::controllers::posts::show_post,
        crate::presentation::http::controllers::registrations::show_form,
        crate::presentation::http::controllers::registrations::submit
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::site::IndexResponse,
            crate::presentation::http::controllers::registrations::RegistrationForm,
            crate::presentation::http::controllers::registrations::RegistrationFormView,
            crate::application::commands::registrations::RegistrationInput,
            crate::application::dto::EventDto,
            crate::application::dto::LinkDto,
            crate::application::dto::PostDto,
            crate::application::dto::PostSummaryDto,
            crate::application::dto::PostViewDto,
            crate::application::dto::RegistrationDto
        )
    ),
    tags(
        (name = "Site", description = "Index, archive and post pages"),
        (name = "Registrations", description = "Event registration form"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Community Site API",
        description = "Events, news and event registration",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH`, or the default path,
/// returning the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_public_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/", "/archive", "/{year}/{month}/{day}/{slug}", "/register/{event_id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
