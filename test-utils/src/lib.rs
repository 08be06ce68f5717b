//! User Service Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the user
//! service. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning the database connection and seeded rows
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Helpers for seeding rows with sensible defaults
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required tables and seed rows:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_user_tables()
//!         .with_user("Ana", "DOC1")
//!         .build()
//!         .await?;
//!
//!     let ana = &test.users()[0];
//!     // Query test.db()...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
