//! OpenAPI documentation configuration.
//!
//! `ApiDoc` registers every user endpoint together with concrete schema wrappers for
//! the response envelope, one per payload type, since the envelope itself is generic.

use utoipa::{OpenApi, ToSchema};

use crate::model::user::{LoginDto, LoginResultDto, UserDto, UserPayload};

/// Envelope carrying a single user.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UserResponse {
    success: bool,
    #[schema(example = "User retrieved successfully")]
    message: String,
    data: Option<UserDto>,
    errors: Vec<String>,
}

/// Envelope carrying a list of users.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UserListResponse {
    success: bool,
    #[schema(example = "Users retrieved successfully")]
    message: String,
    data: Option<Vec<UserDto>>,
    errors: Vec<String>,
}

/// Envelope carrying a login result.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct LoginResponse {
    success: bool,
    #[schema(example = "Login successful")]
    message: String,
    data: Option<LoginResultDto>,
    errors: Vec<String>,
}

/// Envelope without data, used by deletes and every failure.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct EmptyResponse {
    success: bool,
    #[schema(example = "User not found")]
    message: String,
    #[schema(value_type = Option<Object>)]
    data: Option<()>,
    #[schema(example = json!(["User with ID 1 not found"]))]
    errors: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "User service API",
        description = "CRUD operations for users, wrapped in a uniform response envelope."
    ),
    paths(
        crate::server::controller::user::get_all_users,
        crate::server::controller::user::get_user_by_id,
        crate::server::controller::user::create_user,
        crate::server::controller::user::update_user,
        crate::server::controller::user::delete_user,
        crate::server::controller::user::login,
    ),
    components(schemas(
        UserDto,
        UserPayload,
        LoginDto,
        LoginResultDto,
        UserResponse,
        UserListResponse,
        LoginResponse,
        EmptyResponse
    )),
    tags(
        (name = "user", description = "User management")
    )
)]
pub struct ApiDoc;
