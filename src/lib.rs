//! Smoke tester for the fleet dashboard/statistics backend.

pub mod errors;
pub mod models;
pub mod report;
pub mod runner;
pub mod suites;
pub mod validate;
