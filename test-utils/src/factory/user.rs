//! User factory for creating test user rows.

use crate::factory::helpers::next_seq;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .name("Ana")
///     .document_id("DOC1")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    document_id: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {n}"` where n is auto-incremented
    /// - document_id: `"DOC{n}"`
    ///
    /// The identifier is always left to the database.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_seq();
        Self {
            db,
            name: format!("User {}", n),
            document_id: format!("DOC{}", n),
        }
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the document identifier for the user.
    pub fn document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = document_id.into();
        self
    }

    /// Builds and inserts the user row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            document_id: ActiveValue::Set(self.document_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates `count` users with default values, returned in insertion order.
pub async fn create_users(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut users = Vec::with_capacity(count);
    for _ in 0..count {
        users.push(create_user(db).await?);
    }
    Ok(users)
}
