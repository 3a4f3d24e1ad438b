use axum::{
    extract::{Path, State},
    handler::Handler,
    http::StatusCode,
    middleware,
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;
use tracing::{info, instrument};

use super::{ApiError, AppState};
use crate::middleware::validate_user;
use crate::models::{User, UserPayload};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_users).post(create_user.layer(middleware::from_fn(validate_user))),
        )
        .route(
            "/:id",
            get(get_user).put(update_user.layer(middleware::from_fn(validate_user))),
        )
}

/// List every user, ordered by id
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .find_user(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("User"))
}

/// Insert a user. Missing columns surface as a store failure.
#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<UserPayload>, ApiError>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.users.create_user(payload).await?;
    info!(user_id = user.id, "Created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace every column of an existing user.
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UserPayload>, ApiError>,
) -> Result<Json<User>, ApiError> {
    if state.users.find_user(id).await?.is_none() {
        return Err(ApiError::NotFound("User"));
    }

    let user = state
        .users
        .update_user(id, payload)
        .await?
        .ok_or(ApiError::NotFound("User"))?;
    info!(user_id = user.id, "Updated user");

    Ok(Json(user))
}
