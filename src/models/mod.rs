//! Data models for the HRBoard application.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.

mod employee;
mod upstream;

pub use employee::*;
pub use upstream::*;
