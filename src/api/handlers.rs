use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use tracing::info;
use uuid::Uuid;

use crate::{
    api::{
        types::{
            Endpoints, GenerateContentRequest, GenerateContentResponse, HealthResponse,
            ServiceInfo,
        },
        AppState,
    },
    error::RelayError,
    model::ContentType,
    prompts::build_prompt,
};

const MISSING_FIELDS: &str = "Topic and type are required";

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Mr Bukkan Writer API - Backend is running! ✍️",
        status: "operational",
        endpoints: Endpoints {
            health: "GET /api/health",
            generate_content: "POST /api/generate-content",
        },
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "running",
        api_configured: state.config.api_configured(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

pub async fn generate_content(
    State(state): State<AppState>,
    payload: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<Json<GenerateContentResponse>, RelayError> {
    let Json(req) = payload.map_err(|_| RelayError::InvalidRequest(MISSING_FIELDS.into()))?;
    let (topic, kind) = validate(req)?;

    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(RelayError::Configuration)?;

    let request_id = Uuid::new_v4();
    info!(%request_id, content_type = %kind, topic = %topic, "generating content");

    let prompt = build_prompt(kind, &topic).map_err(|e| RelayError::Upstream {
        details: format!("prompt rendering failed: {e}"),
    })?;

    let content = state.provider.generate(api_key, &prompt).await?;
    info!(%request_id, "content generated");
    Ok(Json(GenerateContentResponse { content }))
}

/// Checks presence first, then maps `type` onto the closed enum.
fn validate(req: GenerateContentRequest) -> Result<(String, ContentType), RelayError> {
    let topic = req.topic.filter(|t| !t.trim().is_empty());
    let raw_type = req.content_type.filter(|t| !t.trim().is_empty());

    let (Some(topic), Some(raw_type)) = (topic, raw_type) else {
        return Err(RelayError::InvalidRequest(MISSING_FIELDS.into()));
    };

    let kind = raw_type
        .parse::<ContentType>()
        .map_err(|e| RelayError::InvalidRequest(e.to_string()))?;

    Ok((topic, kind))
}
