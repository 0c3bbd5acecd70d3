//! Entity model and DTOs.
//!
//! The milestone module contains:
//! - a `Serialize` entity struct (`Milestone`) as returned by the API
//! - a `Deserialize` create DTO for inserts
//! - a `Deserialize` update DTO whose field set is the mutation allow-list

pub mod milestone;
