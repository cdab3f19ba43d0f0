//! In-memory record store for the employee collection.
//!
//! State lives in immutable snapshots: every intent produces a fresh
//! [`HrState`] and swaps it in behind the store handle, so readers holding an
//! `Arc` to a previous snapshot never observe a partial update.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::models::Employee;

/// Fixed rating increment applied by a promotion.
pub const PROMOTION_STEP: f64 = 0.5;

/// Upper rating bound; promotions clamp here.
pub const MAX_RATING: f64 = 5.0;

/// Current search/filter criteria.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub search_term: String,
    pub selected_departments: Vec<String>,
    pub selected_ratings: Vec<u8>,
}

/// One immutable snapshot of session state.
///
/// `bookmarked_employees` is derived: it is always exactly the subset of
/// `employees` with the bookmark flag set, recomputed by the reducer whenever
/// the collection changes. It is never updated independently.
#[derive(Debug, Clone, Default)]
pub struct HrState {
    pub employees: Vec<Employee>,
    pub bookmarked_employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    pub criteria: Criteria,
    /// Bumped on every state-changing intent. Unknown-id no-ops leave it alone.
    pub revision: i64,
}

/// Typed mutation intents accepted by the store.
#[derive(Debug, Clone)]
pub enum Intent {
    SetEmployees(Vec<Employee>),
    SetLoading(bool),
    SetError(Option<String>),
    ToggleBookmark(u64),
    PromoteEmployee(u64),
    SetSearchTerm(String),
    SetSelectedDepartments(Vec<String>),
    SetSelectedRatings(Vec<u8>),
}

/// Pure reducer: applies one intent to a snapshot and returns the next one.
///
/// Total for all inputs. `ToggleBookmark` and `PromoteEmployee` on an id that
/// is not in the collection are silent no-ops (the UI only ever supplies ids
/// from the current collection), returning an unchanged snapshot.
pub fn reduce(state: &HrState, intent: Intent) -> HrState {
    let mut next = state.clone();

    match intent {
        Intent::SetEmployees(list) => {
            next.employees = list;
            next.bookmarked_employees = bookmarked_subset(&next.employees);
        }
        Intent::SetLoading(loading) => next.loading = loading,
        Intent::SetError(error) => next.error = error,
        Intent::ToggleBookmark(id) => {
            match next.employees.iter_mut().find(|emp| emp.id == id) {
                Some(emp) => emp.is_bookmarked = !emp.is_bookmarked,
                None => return next,
            }
            next.bookmarked_employees = bookmarked_subset(&next.employees);
        }
        Intent::PromoteEmployee(id) => {
            match next.employees.iter_mut().find(|emp| emp.id == id) {
                Some(emp) => emp.rating = (emp.rating + PROMOTION_STEP).min(MAX_RATING),
                None => return next,
            }
            // The derived subset holds clones; refresh so ratings stay in sync.
            next.bookmarked_employees = bookmarked_subset(&next.employees);
        }
        Intent::SetSearchTerm(term) => next.criteria.search_term = term,
        Intent::SetSelectedDepartments(departments) => {
            next.criteria.selected_departments = departments;
        }
        Intent::SetSelectedRatings(ratings) => next.criteria.selected_ratings = ratings,
    }

    next.revision += 1;
    next
}

fn bookmarked_subset(employees: &[Employee]) -> Vec<Employee> {
    employees
        .iter()
        .filter(|emp| emp.is_bookmarked)
        .cloned()
        .collect()
}

/// Handle over the current snapshot.
///
/// Explicitly constructed and shared via application state; there is no
/// ambient global. Mutations serialize on the write lock, and each one swaps
/// in the snapshot produced by [`reduce`].
#[derive(Debug, Default)]
pub struct EmployeeStore {
    state: RwLock<Arc<HrState>>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub async fn snapshot(&self) -> Arc<HrState> {
        Arc::clone(&*self.state.read().await)
    }

    /// Apply one intent and return the resulting snapshot.
    pub async fn dispatch(&self, intent: Intent) -> Arc<HrState> {
        let mut guard = self.state.write().await;
        let next = Arc::new(reduce(&guard, intent));
        *guard = Arc::clone(&next);
        next
    }
}
