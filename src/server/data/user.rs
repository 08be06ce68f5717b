//! User data repository for database operations.
//!
//! This module defines the `UserStore` contract the service depends on, and
//! `UserRepository`, its SeaORM implementation. Conversion between entity models and
//! domain models happens here at the infrastructure boundary.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::user::User;

/// Persistence operations available to the user service.
///
/// Ordering of `find_all` is up to the implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the user stored under `id`, if any.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr>;

    /// Returns every stored user.
    async fn find_all(&self) -> Result<Vec<User>, DbErr>;

    /// Inserts `user` when it has no id, otherwise overwrites the matching record.
    ///
    /// Returns the stored user including its assigned id.
    async fn save(&self, user: User) -> Result<User, DbErr>;

    /// Removes the user stored under `id`. Callers confirm existence beforehand.
    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr>;

    /// Checks whether a user is stored under `id`.
    async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr>;
}

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for UserRepository<'_> {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Users are returned in ascending id order.
    async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// # Returns
    /// - `Ok(User)` - The inserted or updated user
    /// - `Err(DbErr::RecordNotUpdated)` - `user.id` is set but no such record exists
    /// - `Err(DbErr)` - Other database error during insert or update
    async fn save(&self, user: User) -> Result<User, DbErr> {
        let entity = match user.id {
            None => {
                entity::user::ActiveModel {
                    id: ActiveValue::NotSet,
                    name: ActiveValue::Set(user.name),
                    document_id: ActiveValue::Set(user.document_id),
                }
                .insert(self.db)
                .await?
            }
            Some(id) => {
                entity::user::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    name: ActiveValue::Set(user.name),
                    document_id: ActiveValue::Set(user.document_id),
                }
                .update(self.db)
                .await?
            }
        };

        Ok(User::from_entity(entity))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
