//! Aggregations over the full employee collection.
//!
//! Both reductions work on the complete collection, not the filtered view.
//! Groups are built from existing members, so a department entry always has
//! at least one employee and the mean is well defined.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Employee;

/// Per-department statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub department: String,
    pub employee_count: usize,
    pub bookmarked_count: usize,
    /// Mean rating rounded to one decimal.
    pub average_rating: f64,
}

/// One histogram bucket: employees whose floor(rating) equals `bucket`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub bucket: u8,
    pub count: usize,
}

/// Group by department and compute count, bookmark count, and mean rating.
///
/// Output is sorted by department name.
pub fn department_stats(employees: &[Employee]) -> Vec<DepartmentStats> {
    let mut groups: BTreeMap<&str, Vec<&Employee>> = BTreeMap::new();
    for emp in employees {
        groups.entry(&emp.company.department).or_default().push(emp);
    }

    groups
        .into_iter()
        .map(|(department, members)| {
            let total: f64 = members.iter().map(|e| e.rating).sum();
            DepartmentStats {
                department: department.to_string(),
                employee_count: members.len(),
                bookmarked_count: members.iter().filter(|e| e.is_bookmarked).count(),
                average_rating: round1(total / members.len() as f64),
            }
        })
        .collect()
}

/// Histogram over buckets 1..=5 of floor(rating).
///
/// Ratings outside [1, 6) fall into no bucket; the generation range makes
/// that impossible in practice.
pub fn rating_histogram(employees: &[Employee]) -> Vec<RatingBucket> {
    (1..=5u8)
        .map(|bucket| RatingBucket {
            bucket,
            count: employees
                .iter()
                .filter(|e| e.rating.floor() as i64 == i64::from(bucket))
                .count(),
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
