//! Employee API endpoints.

use std::collections::BTreeSet;

use axum::extract::{Path, State};
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::filter;
use crate::models::Employee;
use crate::store::Intent;
use crate::AppState;

/// Employee list with visibility metadata.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListResponse {
    pub employees: Vec<Employee>,
    /// Records passing the current criteria.
    pub visible: usize,
    /// Records in the full collection.
    pub total: usize,
}

/// GET /api/employees - The filtered view under the current criteria.
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<EmployeeListResponse> {
    let snapshot = state.store.snapshot().await;
    let employees = filter::apply(&snapshot.employees, &snapshot.criteria);

    let visible = employees.len();
    success(
        EmployeeListResponse {
            employees,
            visible,
            total: snapshot.employees.len(),
        },
        snapshot.revision,
    )
}

/// GET /api/employees/:id - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Employee> {
    let snapshot = state.store.snapshot().await;

    match snapshot.employees.iter().find(|emp| emp.id == id) {
        Some(emp) => success(emp.clone(), snapshot.revision),
        None => error(
            AppError::NotFound(format!("Employee {} not found", id)),
            snapshot.revision,
        ),
    }
}

/// POST /api/employees/:id/bookmark - Toggle the bookmark flag.
///
/// Total by design: an unknown id is a silent no-op and the response carries
/// `data: null` instead of an error.
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Option<Employee>> {
    let snapshot = state.store.dispatch(Intent::ToggleBookmark(id)).await;
    let updated = snapshot.employees.iter().find(|emp| emp.id == id).cloned();
    success(updated, snapshot.revision)
}

/// POST /api/employees/:id/promote - Bump the rating by the fixed step.
///
/// Same totality contract as the bookmark toggle.
pub async fn promote_employee(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ApiResult<Option<Employee>> {
    let snapshot = state.store.dispatch(Intent::PromoteEmployee(id)).await;
    let updated = snapshot.employees.iter().find(|emp| emp.id == id).cloned();
    success(updated, snapshot.revision)
}

/// GET /api/bookmarks - The bookmarked subset.
pub async fn list_bookmarks(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let snapshot = state.store.snapshot().await;
    success(snapshot.bookmarked_employees.clone(), snapshot.revision)
}

/// GET /api/departments - Distinct departments present in the collection.
pub async fn list_departments(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let snapshot = state.store.snapshot().await;
    let departments: BTreeSet<String> = snapshot
        .employees
        .iter()
        .map(|emp| emp.company.department.clone())
        .collect();
    success(departments.into_iter().collect(), snapshot.revision)
}
