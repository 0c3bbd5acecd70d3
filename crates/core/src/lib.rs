//! Domain types and validation for the milestone planner.
//!
//! Persistence-free building blocks shared by the store and API crates:
//! identifier and enum types, filename sanitization, the reminder
//! scheduling seam, and the domain error taxonomy.

pub mod error;
pub mod reminder;
pub mod sanitize;
pub mod types;
