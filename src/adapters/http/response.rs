use crate::domain::model::{FirstAidResult, RecommendationResult};
use crate::utils::error::{ErrorCategory, GuideError, Result};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SymptomCheckResponse {
    pub success: bool,
    pub recommendations: Vec<RecommendationResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FirstAidResponse {
    pub success: bool,
    pub results: Vec<FirstAidResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// 將回應內容輸出為縮排 JSON，供命令列工具列印
pub fn to_pretty_json<T: Serialize>(body: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(body)?)
}

/// 處理請求時的任何失敗，一律回傳 500 與 `{"success": false, "error": ...}`
#[derive(Debug)]
pub struct ApiError(pub GuideError);

impl From<GuideError> for ApiError {
    fn from(err: GuideError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        match err.category() {
            ErrorCategory::Request => tracing::warn!("Rejected request: {}", err),
            _ => tracing::error!("❌ Request failed: {} ({})", err, err.recovery_suggestion()),
        }

        let body = ErrorResponse {
            success: false,
            error: err.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_json_matches_http_body() {
        let body = FirstAidResponse {
            success: true,
            results: vec![FirstAidResult {
                topic: "Sprains".to_string(),
                steps: vec!["Rest".to_string()],
                warning: String::new(),
            }],
        };
        let text = to_pretty_json(&body).unwrap();
        assert!(text.contains('\n'));

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "success": true,
                "results": [{"topic": "Sprains", "steps": ["Rest"], "warning": ""}]
            })
        );
    }

    #[test]
    fn test_unencodable_body_is_serialization_error() {
        let keyed: std::collections::BTreeMap<Vec<u8>, bool> =
            [(vec![1u8], true)].into_iter().collect();
        let err = to_pretty_json(&keyed).unwrap_err();
        assert!(matches!(err, GuideError::SerializationError(_)));
    }
}
