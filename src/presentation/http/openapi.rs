// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::draft::enable_draft,
        crate::presentation::http::controllers::draft::disable_draft,
        crate::presentation::http::controllers::revalidate::revalidate,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::revalidate::RevalidateRequest,
            crate::presentation::http::controllers::revalidate::SysRef,
            crate::application::dto::RevalidationDto
        )
    ),
    tags(
        (name = "Preview", description = "Draft mode toggles"),
        (name = "Revalidation", description = "CMS publish webhooks"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Knowledge Articles",
        description = "Server-rendered article site backed by Contentful",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "revalidateKey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-vercel-reval-key"))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

/// Output path for the snapshot binary: `OPENAPI_SNAPSHOT_PATH` or [`DEFAULT_SNAPSHOT_PATH`].
pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_api_endpoints() {
        let doc = ApiDoc::openapi();
        for path in ["/api/draft", "/api/disable-draft", "/api/revalidate", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
        let schemas = doc.components.as_ref().map(|c| &c.schemas).unwrap();
        assert!(schemas.contains_key("RevalidationDto"));
        assert!(schemas.contains_key("ErrorResponse"));
    }

    #[test]
    fn snapshot_is_written_as_json() {
        let dir = std::env::temp_dir().join(format!("ka-openapi-{}", std::process::id()));
        let path = dir.join("nested/openapi.json");
        write_openapi_snapshot(&path).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["info"]["title"], "Knowledge Articles");
        std::fs::remove_dir_all(dir).unwrap();
    }
}
