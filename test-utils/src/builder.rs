use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError, factory::user::UserFactory};

/// Builder for [`TestContext`].
///
/// Collects the tables to create and the users to seed, then materializes both in a
/// fresh in-memory SQLite database on `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_user_tables()
///     .with_user("Ana", "DOC1")
///     .build()
///     .await?;
///
/// let ana = &test.users()[0];
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    users: Vec<SeedUser>,
}

enum SeedUser {
    Generated,
    Named { name: String, document_id: String },
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the CREATE TABLE statement for `entity`, in SQLite syntax.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the user service persists to.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
    }

    /// Seeds one user with the given fields.
    pub fn with_user(mut self, name: impl Into<String>, document_id: impl Into<String>) -> Self {
        self.users.push(SeedUser::Named {
            name: name.into(),
            document_id: document_id.into(),
        });
        self
    }

    /// Seeds `count` users with generated fields.
    pub fn with_users(mut self, count: usize) -> Self {
        self.users
            .extend(std::iter::repeat_with(|| SeedUser::Generated).take(count));
        self
    }

    /// Creates the database, its tables, then the seeded users.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready, seeded users available via `users()`
    /// - `Err(TestError::Database)` - Connection, DDL or insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::with_schema(self.tables).await?;

        for seed in self.users {
            let factory = UserFactory::new(context.db());
            let factory = match seed {
                SeedUser::Generated => factory,
                SeedUser::Named { name, document_id } => {
                    factory.name(name).document_id(document_id)
                }
            };
            let user = factory.build().await?;
            context.push_user(user);
        }

        Ok(context)
    }
}
