use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User as returned by the API, and as accepted once a create payload has been
/// validated.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Store-assigned identifier
    pub id: Option<i64>,
    /// Display name, at most 255 characters
    pub name: String,
    /// Document identifier, at most 25 characters
    pub document_id: String,
}

/// Raw user payload of create and update requests.
///
/// Every field may be absent; which ones are required depends on the operation.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub document_id: Option<String>,
}

/// Raw login request body.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Identity and token issued by a successful login.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    pub user_id: i64,
    pub user_username: String,
    pub user_ext_id: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    pub user_name: String,
    pub user_lastname: Option<String>,
    pub user_document_id: String,
    pub access_token: String,
    pub token_type: String,
    pub system_home_page: Option<String>,
}
