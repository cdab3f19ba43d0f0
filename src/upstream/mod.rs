//! One-shot load of the employee collection from the upstream demo feed.
//!
//! The feed is fetched exactly once per process lifetime. Success populates
//! the store through the enrichment pipeline; any failure (network or decode)
//! surfaces a single session error and is terminal for that load attempt.

use chrono::Utc;
use rand::Rng;
use reqwest::Client;

use crate::config::{Config, EMPLOYEE_LIMIT};
use crate::enrich::enrich_users;
use crate::errors::AppError;
use crate::models::{RawUser, UsersResponse};
use crate::store::{EmployeeStore, Intent};

/// Message surfaced to the session on any load failure.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch employees";

/// Fetch the raw user list from the upstream feed.
pub async fn fetch_users(client: &Client, upstream_url: &str) -> Result<Vec<RawUser>, AppError> {
    let url = format!(
        "{}/users?limit={}",
        upstream_url.trim_end_matches('/'),
        EMPLOYEE_LIMIT
    );
    let response = client.get(url).send().await?.error_for_status()?;
    let payload: UsersResponse = response.json().await?;
    Ok(payload.users)
}

/// Populate the store from the upstream feed.
///
/// Dispatches the same intent sequence the frontend contract expects:
/// loading on, then either the enriched collection or the error message,
/// then loading off. No retry, no partial data.
pub async fn load_employees<R: Rng>(store: &EmployeeStore, config: &Config, rng: &mut R) {
    store.dispatch(Intent::SetLoading(true)).await;

    match fetch_users(&Client::new(), &config.upstream_url).await {
        Ok(users) => {
            let raw = &users[..users.len().min(EMPLOYEE_LIMIT)];
            let employees = enrich_users(raw, rng, Utc::now().date_naive());
            tracing::info!("Loaded {} employees from upstream feed", employees.len());
            store.dispatch(Intent::SetEmployees(employees)).await;
        }
        Err(err) => {
            tracing::error!("Employee load failed: {}", err);
            store
                .dispatch(Intent::SetError(Some(FETCH_ERROR_MESSAGE.to_string())))
                .await;
        }
    }

    store.dispatch(Intent::SetLoading(false)).await;
}
