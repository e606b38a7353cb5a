use crate::adapters::http::response::{
    ApiError, FirstAidResponse, HealthResponse, SymptomCheckResponse,
};
use crate::adapters::http::AppState;
use crate::utils::error::GuideError;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SymptomCheckRequest {
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct FirstAidQuery {
    pub q: String,
}

impl FirstAidQuery {
    /// 重複的 `q` 以第一個為準，未提供時為空字串
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { q }
    }
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        status: "ok".to_string(),
    })
}

pub async fn symptom_check(
    State(state): State<AppState>,
    payload: Result<Json<SymptomCheckRequest>, JsonRejection>,
) -> Result<Json<SymptomCheckResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| GuideError::malformed_request(rejection.body_text()))?;

    let recommendations = state.service.check_symptoms(&request.symptoms).await?;
    tracing::info!(
        "🩺 Symptom check: {} symptoms, {} recommendations",
        request.symptoms.len(),
        recommendations.len()
    );

    Ok(Json(SymptomCheckResponse {
        success: true,
        recommendations,
    }))
}

pub async fn first_aid_search(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FirstAidResponse>, ApiError> {
    let Query(pairs) =
        query.map_err(|rejection| GuideError::malformed_request(rejection.body_text()))?;
    let query = FirstAidQuery::from_pairs(pairs);

    let results = state.service.search_first_aid(&query.q).await?;
    tracing::info!("🩹 First aid search '{}': {} results", query.q, results.len());

    Ok(Json(FirstAidResponse {
        success: true,
        results,
    }))
}
