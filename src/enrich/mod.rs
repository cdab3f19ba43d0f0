//! Enrichment pipeline for raw feed users.
//!
//! The upstream demo feed only supplies an id, an age, and an avatar URL
//! worth keeping; everything else on the record is synthesized here. Locale
//! fields are derived deterministically by indexing fixed tables with the
//! record's position modulo the table length, so the structural shape repeats
//! across runs. Randomized fields (rating, bookmark flag, projects, feedback,
//! performance history) draw from an injected [`Rng`], which production seeds
//! from config or OS entropy and tests seed with a fixed value.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use crate::models::{Address, Company, Employee, FeedbackEntry, PerformanceEntry, RawUser};

const FIRST_NAMES: &[&str] = &[
    "Rahul", "Priya", "Amit", "Sunita", "Rohit", "Neha", "Vikram", "Anjali", "Suresh", "Pooja",
    "Karan", "Deepa", "Arjun", "Meera", "Sanjay", "Kavita", "Rakesh", "Shreya", "Manish", "Divya",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Verma", "Reddy", "Singh", "Desai", "Nair", "Kumar", "Gupta", "Joshi",
    "Chopra", "Bansal", "Yadav", "Mehta", "Jain", "Kapoor", "Agarwal", "Saxena", "Rao", "Menon",
];

const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bengaluru", "Hyderabad", "Ahmedabad", "Chennai", "Kolkata", "Pune",
    "Jaipur", "Lucknow",
];

const STATES: &[&str] = &[
    "Maharashtra", "Delhi", "Karnataka", "Telangana", "Gujarat", "Tamil Nadu", "West Bengal",
    "Rajasthan", "Uttar Pradesh", "Kerala",
];

const STREETS: &[&str] = &[
    "MG Road", "Brigade Road", "Marine Drive", "Connaught Place", "Banjara Hills", "Park Street",
    "Anna Salai", "FC Road", "Carter Road", "Lalbagh Road",
];

const DEPARTMENTS: &[&str] = &[
    "Engineering", "HR", "Finance", "Operations", "Sales", "Marketing", "IT", "Support",
];

const TITLES: &[&str] = &[
    "Software Engineer", "Senior Developer", "HR Manager", "Finance Analyst", "Operations Lead",
    "Sales Executive", "Marketing Specialist", "IT Administrator", "Support Engineer",
];

const PROJECTS: &[&str] = &[
    "UPI Integration", "GST Compliance Portal", "Aadhaar KYC Automation", "Digital India App",
    "Swachh Bharat Dashboard", "Smart City Analytics", "Ayushman Bharat Tracker",
    "Skill India Training", "Make in India Campaign",
];

const FEEDBACK_AUTHORS: &[&str] = &[
    "Priya Patel", "Amit Verma", "Sunita Reddy", "Rohit Singh", "Neha Sharma", "Vikram Desai",
    "Anjali Nair", "Suresh Kumar",
];

const FEEDBACK_COMMENTS: &[&str] = &[
    "Excellent contribution to the Digital India project.",
    "Always punctual and delivers quality work.",
    "Great team player and very supportive.",
    "Demonstrates strong leadership in Smart City initiatives.",
    "Consistently exceeds performance goals.",
    "Brings innovative solutions to complex problems.",
    "Strong technical skills and attention to detail.",
    "Very proactive and takes initiative.",
];

const MONTHS: &[&str] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Probability that a freshly enriched record starts out bookmarked.
const BOOKMARK_PROBABILITY: f64 = 0.3;

/// Feedback dates fall within this many days before the reference date.
const FEEDBACK_WINDOW_DAYS: i64 = 90;

/// Enrich raw feed users into full employee records.
///
/// Output count equals input count and input order is preserved. `today` is
/// the reference date for feedback timestamps.
pub fn enrich_users<R: Rng>(raw: &[RawUser], rng: &mut R, today: NaiveDate) -> Vec<Employee> {
    raw.iter()
        .enumerate()
        .map(|(idx, user)| enrich_one(idx, user, rng, today))
        .collect()
}

fn enrich_one<R: Rng>(idx: usize, user: &RawUser, rng: &mut R, today: NaiveDate) -> Employee {
    let first_name = FIRST_NAMES[idx % FIRST_NAMES.len()];
    let last_name = LAST_NAMES[idx % LAST_NAMES.len()];

    Employee {
        id: user.id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@company.in",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        age: user.age,
        phone: format!("+91 {}", rng.random_range(7_000_000_000u64..=9_999_999_999)),
        address: Address {
            address: format!(
                "{}, {}",
                rng.random_range(1..=100),
                STREETS[idx % STREETS.len()]
            ),
            city: CITIES[idx % CITIES.len()].to_string(),
            state: STATES[idx % STATES.len()].to_string(),
            postal_code: rng.random_range(100_000..=999_999u32).to_string(),
        },
        company: Company {
            department: DEPARTMENTS[idx % DEPARTMENTS.len()].to_string(),
            title: TITLES[idx % TITLES.len()].to_string(),
        },
        image: user.image.clone(),
        rating: round1(rng.random_range(1.0..=5.0)),
        is_bookmarked: rng.random_bool(BOOKMARK_PROBABILITY),
        projects: generate_projects(rng),
        feedback: generate_feedback(rng, today),
        performance_history: generate_performance_history(rng),
    }
}

fn generate_projects<R: Rng>(rng: &mut R) -> Vec<String> {
    let count = rng.random_range(1..=4);
    PROJECTS[..count].iter().map(|p| p.to_string()).collect()
}

fn generate_feedback<R: Rng>(rng: &mut R, today: NaiveDate) -> Vec<FeedbackEntry> {
    let count = rng.random_range(1..=3);
    (0..count)
        .map(|i| FeedbackEntry {
            id: format!("feedback-{i}"),
            author: FEEDBACK_AUTHORS[rng.random_range(0..FEEDBACK_AUTHORS.len())].to_string(),
            comment: FEEDBACK_COMMENTS[rng.random_range(0..FEEDBACK_COMMENTS.len())].to_string(),
            date: (today - Duration::days(rng.random_range(0..FEEDBACK_WINDOW_DAYS)))
                .format("%Y-%m-%d")
                .to_string(),
            rating: rng.random_range(4..=5),
        })
        .collect()
}

fn generate_performance_history<R: Rng>(rng: &mut R) -> Vec<PerformanceEntry> {
    MONTHS
        .iter()
        .map(|month| PerformanceEntry {
            month: month.to_string(),
            rating: round1(rng.random_range(3.0..=5.0)),
            goals: rng.random_range(3..=7),
            completed: rng.random_range(2..=6),
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
