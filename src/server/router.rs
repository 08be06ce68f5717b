use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        fallback::endpoint_not_found,
        user::{create_user, delete_user, get_all_users, get_user_by_id, login, update_user},
    },
    doc::ApiDoc,
    middleware::auth::require_api_key,
    state::AppState,
};

/// Builds the application router.
///
/// The API key guard only wraps matched user routes; unmatched requests and the
/// documentation endpoints bypass it.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/v1/users", get(get_all_users).post(create_user))
        .route("/api/v1/users/login", post(login))
        .route(
            "/api/v1/users/{id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .route_layer(from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(endpoint_not_found)
        .method_not_allowed_fallback(endpoint_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
