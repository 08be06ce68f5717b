use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// One isolated test environment: a private in-memory SQLite database plus the rows
/// seeded into it by [`crate::builder::TestBuilder`].
pub struct TestContext {
    db: DatabaseConnection,
    users: Vec<entity::user::Model>,
}

impl TestContext {
    /// Opens a fresh in-memory database and creates `tables` in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Empty database with the schema in place
    /// - `Err(TestError::Database)` - Connection or DDL failed
    pub async fn with_schema(tables: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for table in &tables {
            db.execute(table).await?;
        }

        Ok(Self {
            db,
            users: Vec::new(),
        })
    }

    /// Connection to this test's database.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Hands the connection over, e.g. to build application state.
    pub fn into_db(self) -> DatabaseConnection {
        self.db
    }

    /// Users seeded during the build, in insertion order.
    pub fn users(&self) -> &[entity::user::Model] {
        &self.users
    }

    pub(crate) fn push_user(&mut self, user: entity::user::Model) {
        self.users.push(user);
    }
}
