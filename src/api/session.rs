//! Session state and filter criteria endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::store::{Criteria, Intent};
use crate::AppState;

/// Session status as seen by the frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub criteria: Criteria,
    pub employee_count: usize,
    pub bookmarked_count: usize,
}

/// GET /api/session - Loading flag, error message, criteria, and counts.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<SessionResponse> {
    let snapshot = state.store.snapshot().await;
    success(
        SessionResponse {
            loading: snapshot.loading,
            error: snapshot.error.clone(),
            criteria: snapshot.criteria.clone(),
            employee_count: snapshot.employees.len(),
            bookmarked_count: snapshot.bookmarked_employees.len(),
        },
        snapshot.revision,
    )
}

/// Request body for replacing the search term.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTermRequest {
    pub term: String,
}

/// PUT /api/criteria/search - Replace the free-text search term.
pub async fn set_search_term(
    State(state): State<AppState>,
    Json(request): Json<SearchTermRequest>,
) -> ApiResult<Criteria> {
    let snapshot = state
        .store
        .dispatch(Intent::SetSearchTerm(request.term))
        .await;
    success(snapshot.criteria.clone(), snapshot.revision)
}

/// Request body for replacing the department selection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentsRequest {
    pub departments: Vec<String>,
}

/// PUT /api/criteria/departments - Replace the selected department set.
pub async fn set_selected_departments(
    State(state): State<AppState>,
    Json(request): Json<DepartmentsRequest>,
) -> ApiResult<Criteria> {
    let snapshot = state
        .store
        .dispatch(Intent::SetSelectedDepartments(request.departments))
        .await;
    success(snapshot.criteria.clone(), snapshot.revision)
}

/// Request body for replacing the rating-bucket selection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingsRequest {
    pub ratings: Vec<u8>,
}

/// PUT /api/criteria/ratings - Replace the selected rating buckets.
pub async fn set_selected_ratings(
    State(state): State<AppState>,
    Json(request): Json<RatingsRequest>,
) -> ApiResult<Criteria> {
    let snapshot = state
        .store
        .dispatch(Intent::SetSelectedRatings(request.ratings))
        .await;
    success(snapshot.criteria.clone(), snapshot.revision)
}
