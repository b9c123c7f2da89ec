use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, info, instrument};

use crate::{
    errors::ApiError,
    state::AppState,
    users::dto::{UserDetails, UserDto},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(get_all_users).post(create_user))
        .route(
            "/api/users/:id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// Retrieve all existing users.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "user",
    responses(
        (status = 200, description = "Retrieved users successfully.", body = [UserDto]),
        (status = 500, description = "Internal service error.", body = [String])
    )
)]
#[instrument(skip(state))]
pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ApiError> {
    debug!("resolving get all users call");
    Ok(Json(state.users.get_users().await?))
}

/// Retrieve the user with the given id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "user",
    params(("id" = i64, Path, description = "Id of user", example = 1)),
    responses(
        (status = 200, description = "Retrieved user successfully.", body = UserDto),
        (status = 404, description = "User does not exist.")
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ApiError> {
    state
        .users
        .get_user_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Delete the user with the given id. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "user",
    params(("id" = i64, Path, description = "Id of user", example = 1)),
    responses((status = 204, description = "Deleted user successfully."))
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Update only the fields present in the body.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = "user",
    params(("id" = i64, Path, description = "Id of user", example = 1)),
    request_body = UserDetails,
    responses(
        (status = 200, description = "Updated user successfully.", body = UserDto),
        (status = 400, description = "Malformed body.", body = [String]),
        (status = 404, description = "User does not exist."),
        (status = 409, description = "Username already taken.", body = [String])
    )
)]
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UserDetails>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let Json(details) = payload?;
    let updated = state
        .users
        .update_user(details, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(user_id = updated.id, "user updated");
    Ok(Json(updated))
}

/// Create a user from the given details.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "user",
    request_body = UserDetails,
    responses(
        (status = 201, description = "User created successfully.", body = UserDto),
        (status = 400, description = "Validation error.", body = [String]),
        (status = 409, description = "Username already taken.", body = [String])
    )
)]
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let Json(details) = payload?;
    let details = details.into_new().map_err(ApiError::Validation)?;
    let created = state.users.create_user(details).await?;
    info!(user_id = created.id, username = %created.username, "user created");
    Ok((StatusCode::CREATED, Json(created)))
}
