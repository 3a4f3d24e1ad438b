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
use crate::middleware::validate_movie;
use crate::models::{Movie, MoviePayload};

pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_movies).post(create_movie.layer(middleware::from_fn(validate_movie))),
        )
        .route(
            "/:id",
            get(get_movie).put(update_movie.layer(middleware::from_fn(validate_movie))),
        )
}

#[instrument(skip(state))]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.movies.list_movies().await?;
    Ok(Json(movies))
}

#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<Movie>, ApiError> {
    state
        .movies
        .find_movie(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Movie"))
}

#[instrument(skip(state, payload))]
pub async fn create_movie(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<MoviePayload>, ApiError>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let movie = state.movies.create_movie(payload).await?;
    info!(movie_id = movie.id, "Created movie");

    Ok((StatusCode::CREATED, Json(movie)))
}

#[instrument(skip(state, payload))]
pub async fn update_movie(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<MoviePayload>, ApiError>,
) -> Result<Json<Movie>, ApiError> {
    if state.movies.find_movie(id).await?.is_none() {
        return Err(ApiError::NotFound("Movie"));
    }

    let movie = state
        .movies
        .update_movie(id, payload)
        .await?
        .ok_or(ApiError::NotFound("Movie"))?;
    info!(movie_id = movie.id, "Updated movie");

    Ok(Json(movie))
}
