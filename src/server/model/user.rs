//! User domain model, its mapping to and from DTOs and entities, and the validated
//! parameter types of each user operation.

use std::fmt;

use crate::{
    model::user::{LoginDto, UserDto, UserPayload},
    server::{
        error::validation::ValidationErrors,
        util::validate::{optional_text, required_text, Validate},
    },
};

/// Maximum length of a user's display name, in characters.
pub const NAME_MAX_LEN: usize = 255;
/// Maximum length of a user's document identifier, in characters.
pub const DOCUMENT_ID_MAX_LEN: usize = 25;

/// User record as handled by the service and persisted by the store.
///
/// `id` is `None` until the store has assigned one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub document_id: String,
}

impl User {
    /// Converts a DTO into a domain model, copying every field verbatim.
    pub fn from_dto(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            document_id: dto.document_id,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            document_id: self.document_id,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            document_id: entity.document_id,
        }
    }

    /// Applies a partial update in place.
    ///
    /// Only fields present in `patch` overwrite the current values. The identifier is
    /// never touched.
    pub fn apply_update(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(document_id) = patch.document_id {
            self.document_id = document_id;
        }
    }
}

/// Validated create payload: both attributes required.
///
/// A caller-provided `id` survives validation; the service discards it.
impl Validate for UserDto {
    type Payload = UserPayload;

    fn validate(payload: UserPayload) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(&mut errors, "name", payload.name, NAME_MAX_LEN);
        let document_id = required_text(
            &mut errors,
            "documentId",
            payload.document_id,
            DOCUMENT_ID_MAX_LEN,
        );

        match (name, document_id) {
            (Some(name), Some(document_id)) if errors.is_empty() => Ok(UserDto {
                id: payload.id,
                name,
                document_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Fields to change on an existing user. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub document_id: Option<String>,
}

impl Validate for UserPatch {
    type Payload = UserPayload;

    fn validate(payload: UserPayload) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = optional_text(&mut errors, "name", payload.name, NAME_MAX_LEN);
        let document_id = optional_text(
            &mut errors,
            "documentId",
            payload.document_id,
            DOCUMENT_ID_MAX_LEN,
        );

        errors.into_result()?;

        Ok(Self { name, document_id })
    }
}

/// Username and password of a login attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    #[allow(dead_code)]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for Credentials {
    type Payload = LoginDto;

    fn validate(payload: LoginDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = required_text(&mut errors, "username", payload.username, usize::MAX);
        let password = required_text(&mut errors, "password", payload.password, usize::MAX);

        match (username, password) {
            (Some(username), Some(password)) if errors.is_empty() => {
                Ok(Self { username, password })
            }
            _ => Err(errors),
        }
    }
}
