//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields
//! they actually assert on.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Ana")
//!     .document_id("DOC1")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod user;

pub use user::{create_user, create_users};
