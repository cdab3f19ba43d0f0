//! Analytics API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::analytics::{self, DepartmentStats, RatingBucket};
use crate::AppState;

/// GET /api/analytics/departments - Per-department statistics.
///
/// Computed over the full collection, not the filtered view.
pub async fn get_department_stats(State(state): State<AppState>) -> ApiResult<Vec<DepartmentStats>> {
    let snapshot = state.store.snapshot().await;
    success(
        analytics::department_stats(&snapshot.employees),
        snapshot.revision,
    )
}

/// GET /api/analytics/ratings - Rating histogram over buckets 1..=5.
pub async fn get_rating_histogram(State(state): State<AppState>) -> ApiResult<Vec<RatingBucket>> {
    let snapshot = state.store.snapshot().await;
    success(
        analytics::rating_histogram(&snapshot.employees),
        snapshot.revision,
    )
}
