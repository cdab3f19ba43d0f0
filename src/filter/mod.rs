//! Filtering of the employee collection by the current criteria.
//!
//! Pure functions over a slice of records. The filter is stable: output
//! preserves input order, and the three predicates are independent, so the
//! result does not depend on evaluation order.

use crate::models::Employee;
use crate::store::Criteria;

/// Apply the current criteria and return the visible subset.
pub fn apply(employees: &[Employee], criteria: &Criteria) -> Vec<Employee> {
    employees
        .iter()
        .filter(|emp| matches(emp, criteria))
        .cloned()
        .collect()
}

/// Whether a single employee passes all three criteria.
///
/// An empty criterion matches everything. The search term is a
/// case-insensitive substring match against first name, last name, email, or
/// department; rating buckets compare against the integer floor of the
/// employee's rating.
pub fn matches(emp: &Employee, criteria: &Criteria) -> bool {
    matches_term(emp, &criteria.search_term)
        && matches_departments(emp, &criteria.selected_departments)
        && matches_ratings(emp, &criteria.selected_ratings)
}

fn matches_term(emp: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    emp.first_name.to_lowercase().contains(&term)
        || emp.last_name.to_lowercase().contains(&term)
        || emp.email.to_lowercase().contains(&term)
        || emp.company.department.to_lowercase().contains(&term)
}

fn matches_departments(emp: &Employee, departments: &[String]) -> bool {
    departments.is_empty() || departments.contains(&emp.company.department)
}

fn matches_ratings(emp: &Employee, ratings: &[u8]) -> bool {
    ratings.is_empty() || ratings.contains(&(emp.rating.floor() as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Company};

    fn employee(id: u64, first: &str, department: &str, rating: f64) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: "Sharma".to_string(),
            email: format!("{}.sharma@company.in", first.to_lowercase()),
            age: 30,
            phone: "+91 9000000000".to_string(),
            address: Address {
                address: "1, MG Road".to_string(),
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                postal_code: "400001".to_string(),
            },
            company: Company {
                department: department.to_string(),
                title: "Software Engineer".to_string(),
            },
            image: String::new(),
            rating,
            is_bookmarked: false,
            projects: vec![],
            feedback: vec![],
            performance_history: vec![],
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee(1, "Rahul", "Engineering", 4.6),
            employee(2, "Priya", "Sales", 4.9),
            employee(3, "Amit", "Engineering", 3.0),
            employee(4, "Neha", "HR", 5.0),
        ]
    }

    fn criteria(term: &str, departments: &[&str], ratings: &[u8]) -> Criteria {
        Criteria {
            search_term: term.to_string(),
            selected_departments: departments.iter().map(|d| d.to_string()).collect(),
            selected_ratings: ratings.to_vec(),
        }
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let roster = roster();
        let visible = apply(&roster, &Criteria::default());
        let ids: Vec<u64> = visible.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_term_is_case_insensitive_across_fields() {
        let roster = roster();

        // Department match regardless of case.
        let by_dept = apply(&roster, &criteria("eng", &[], &[]));
        assert_eq!(by_dept.len(), 2);

        // First name.
        let by_name = apply(&roster, &criteria("PRIYA", &[], &[]));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 2);

        // Email substring.
        let by_email = apply(&roster, &criteria("amit.sharma@", &[], &[]));
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].id, 3);
    }

    #[test]
    fn rating_buckets_compare_against_floor() {
        let roster = roster();
        // Bucket 5 excludes 4.9 but includes 5.0 exactly.
        let fives = apply(&roster, &criteria("", &[], &[5]));
        let ids: Vec<u64> = fives.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4]);

        let fours = apply(&roster, &criteria("", &[], &[4]));
        let ids: Vec<u64> = fours.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn department_set_membership() {
        let roster = roster();
        let visible = apply(&roster, &criteria("", &["Engineering", "HR"], &[]));
        let ids: Vec<u64> = visible.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn combined_criteria_intersect() {
        let roster = roster();
        let visible = apply(&roster, &criteria("sharma", &["Engineering"], &[4]));
        let ids: Vec<u64> = visible.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn predicates_commute() {
        let roster = roster();
        let full = criteria("a", &["Engineering", "Sales"], &[3, 4]);

        // Applying the single-criterion filters in any order yields the same
        // set as the combined filter.
        let term_only = criteria("a", &[], &[]);
        let dept_only = criteria("", &["Engineering", "Sales"], &[]);
        let rating_only = criteria("", &[], &[3, 4]);

        let combined = apply(&roster, &full);
        let staged = apply(&apply(&apply(&roster, &rating_only), &dept_only), &term_only);
        let staged_other = apply(&apply(&apply(&roster, &term_only), &rating_only), &dept_only);

        let ids = |v: &[Employee]| v.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids(&combined), ids(&staged));
        assert_eq!(ids(&combined), ids(&staged_other));
    }
}
