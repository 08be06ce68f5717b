//! User service for business logic.
//!
//! This module provides the `UserService` for the user CRUD operations and login. It
//! owns the "not found" policy: every operation addressing a user by id fails with
//! `UserError::NotFound` when the store has no such record.

use sea_orm::DbErr;

use crate::{
    model::user::{LoginResultDto, UserDto},
    server::{
        data::user::UserStore,
        error::{auth::AuthError, user::UserError, AppError},
        model::user::{Credentials, User, UserPatch},
    },
};

/// Service providing business logic for user management.
///
/// Generic over the store so it can run against any `UserStore`; handlers construct
/// it per request around a `UserRepository`.
pub struct UserService<S> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `store` - Persistence backend for user records
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(AppError::UserErr(NotFound))` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i64) -> Result<UserDto, AppError> {
        tracing::info!("Fetching user with ID: {}", id);

        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into_dto())
    }

    /// Creates a new user.
    ///
    /// Any id present in `dto` is discarded; the store assigns identifiers.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Created user including its assigned id
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, dto: UserDto) -> Result<UserDto, AppError> {
        tracing::info!("Creating new user with name: {}", dto.name);

        let user = User {
            id: None,
            ..User::from_dto(dto)
        };
        let saved = self.store.save(user).await?;

        tracing::info!("User created successfully with ID: {:?}", saved.id);

        Ok(saved.into_dto())
    }

    /// Applies a partial update to an existing user.
    ///
    /// Fields absent from `patch` keep their stored values. Concurrent updates of the
    /// same user are last-write-wins.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Updated user
    /// - `Err(AppError::UserErr(NotFound))` - No user with that id, including one deleted
    ///   between the lookup and the save
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(&self, id: i64, patch: UserPatch) -> Result<UserDto, AppError> {
        tracing::info!("Updating user with ID: {}", id);

        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.apply_update(patch);
        let updated = match self.store.save(user).await {
            Err(DbErr::RecordNotUpdated) => return Err(UserError::NotFound(id).into()),
            result => result?,
        };

        tracing::info!("User updated successfully with ID: {}", id);

        Ok(updated.into_dto())
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::UserErr(NotFound))` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during check or delete
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        tracing::info!("Deleting user with ID: {}", id);

        if !self.store.exists_by_id(id).await? {
            return Err(UserError::NotFound(id).into());
        }

        self.store.delete_by_id(id).await?;

        tracing::info!("User deleted successfully with ID: {}", id);

        Ok(())
    }

    /// Lists every user. Order is whatever the store returns.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - All users, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_all(&self) -> Result<Vec<UserDto>, AppError> {
        tracing::info!("Fetching all users");

        let users = self.store.find_all().await?;

        Ok(users.into_iter().map(User::into_dto).collect())
    }

    /// Authenticates a user.
    ///
    /// Users carry no stored secret to check credentials against, so every attempt
    /// fails explicitly instead of producing an empty login.
    ///
    /// # Returns
    /// - `Err(AppError::AuthErr(LoginNotImplemented))` - Always
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResultDto, AppError> {
        tracing::info!("Login attempt for user: {}", credentials.username);

        Err(AuthError::LoginNotImplemented.into())
    }
}
