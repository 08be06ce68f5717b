//! SeaORM entity definitions for the user service database.

pub mod prelude;

pub mod user;
