//! Domain models and operation-specific parameter types.
//!
//! Domain models sit between the wire DTOs in `crate::model` and the SeaORM entities,
//! and own the conversions in both directions.

pub mod user;
