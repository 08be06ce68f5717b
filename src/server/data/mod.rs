//! Database repository layer.
//!
//! Repositories handle all database reads and writes through SeaORM entity models and
//! hand domain models back to the service layer, so nothing above this module touches
//! an entity type.

pub mod user;

#[cfg(test)]
mod test;
