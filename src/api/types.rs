use serde::{Deserialize, Serialize};

/// Raw `POST /api/generate-content` body. Both fields are optional so a
/// missing value becomes an `InvalidRequest` rather than a JSON rejection.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default, rename = "type")]
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub api_configured: bool,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub health: &'static str,
    pub generate_content: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub status: &'static str,
    pub endpoints: Endpoints,
}
