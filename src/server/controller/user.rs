use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ApiResponse,
        user::{LoginDto, UserDto, UserPayload},
    },
    server::{
        data::user::UserRepository,
        doc::{EmptyResponse, LoginResponse, UserListResponse, UserResponse},
        error::AppError,
        extract::{PathId, ValidatedJson},
        model::user::{Credentials, UserPatch},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// # Returns
/// - `200 OK` - Every stored user, possibly none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users retrieved successfully", body = UserListResponse),
        (status = 500, description = "Internal server error", body = EmptyResponse)
    ),
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/v1/users - Fetching all users");

    let service = UserService::new(UserRepository::new(&state.db));
    let users = service.list_all().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Users retrieved successfully", users)),
    ))
}

/// Get a user by id.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Id is not a number
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User ID", example = 1)
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 400, description = "Invalid user ID", body = EmptyResponse),
        (status = 404, description = "User not found", body = EmptyResponse),
        (status = 500, description = "Internal server error", body = EmptyResponse)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("GET /api/v1/users/{} - Fetching user by ID", id);

    let service = UserService::new(UserRepository::new(&state.db));
    let user = service.get_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("User retrieved successfully", user)),
    ))
}

/// Create a new user.
///
/// `name` and `documentId` are required; any `id` in the body is ignored.
///
/// # Returns
/// - `201 Created` - The created user with its assigned id
/// - `400 Bad Request` - Validation failed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid input data", body = EmptyResponse),
        (status = 500, description = "Internal server error", body = EmptyResponse)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/v1/users - Creating new user: {}", payload.name);

    let service = UserService::new(UserRepository::new(&state.db));
    let user = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

/// Update a user.
///
/// Only fields present in the body are changed.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Validation failed or id is not a number
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User ID", example = 1)
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Invalid input data", body = EmptyResponse),
        (status = 404, description = "User not found", body = EmptyResponse),
        (status = 500, description = "Internal server error", body = EmptyResponse)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(patch): ValidatedJson<UserPatch>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("PUT /api/v1/users/{} - Updating user", id);

    let service = UserService::new(UserRepository::new(&state.db));
    let user = service.update(id, patch).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("User updated successfully", user)),
    ))
}

/// Delete a user.
///
/// # Returns
/// - `200 OK` - User deleted, `data` is null
/// - `400 Bad Request` - Id is not a number
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i64, Path, description = "User ID", example = 1)
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = EmptyResponse),
        (status = 400, description = "Invalid user ID", body = EmptyResponse),
        (status = 404, description = "User not found", body = EmptyResponse),
        (status = 500, description = "Internal server error", body = EmptyResponse)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("DELETE /api/v1/users/{} - Deleting user", id);

    let service = UserService::new(UserRepository::new(&state.db));
    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<UserDto>::success_empty(
            "User deleted successfully",
        )),
    ))
}

/// User login.
///
/// Credentials are validated, but no authentication backend exists yet, so a
/// well-formed attempt always ends in 501.
///
/// # Returns
/// - `400 Bad Request` - Username or password missing or blank
/// - `501 Not Implemented` - Login is not available
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = USER_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid input data", body = EmptyResponse),
        (status = 501, description = "Login is not implemented", body = EmptyResponse)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("POST /api/v1/users/login - Login attempt");

    let service = UserService::new(UserRepository::new(&state.db));
    let result = service.login(credentials).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Login successful", result)),
    ))
}
