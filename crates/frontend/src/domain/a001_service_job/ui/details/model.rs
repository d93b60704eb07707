use crate::shared::api_utils::{fetch_text, ApiError};
use contracts::domain::a001_service_job::JobDto;

/// POST a new job. The response body is opaque text.
pub async fn save_form(endpoint: &str, dto: &JobDto) -> Result<String, ApiError> {
    let json_data = serde_json::to_string(dto).map_err(|e| ApiError::Encode(e.to_string()))?;
    fetch_text("POST", endpoint, Some(&json_data)).await
}
