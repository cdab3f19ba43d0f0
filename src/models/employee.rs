//! Employee model matching the frontend Employee interface.

use serde::{Deserialize, Serialize};

/// A fully enriched employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Id assigned by the upstream user feed.
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub phone: String,
    pub address: Address,
    pub company: Company,
    pub image: String,
    /// Overall rating in [0.0, 5.0].
    pub rating: f64,
    pub is_bookmarked: bool,
    pub projects: Vec<String>,
    pub feedback: Vec<FeedbackEntry>,
    pub performance_history: Vec<PerformanceEntry>,
}

/// Postal address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// Employment details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub department: String,
    pub title: String,
}

/// A single peer-feedback entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    /// Unique within the parent record, formatted `feedback-<index>`.
    pub id: String,
    pub author: String,
    pub comment: String,
    /// Calendar date, YYYY-MM-DD.
    pub date: String,
    /// Integer rating in [1, 5].
    pub rating: u8,
}

/// One month of performance history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEntry {
    pub month: String,
    pub rating: f64,
    pub goals: u32,
    pub completed: u32,
}
