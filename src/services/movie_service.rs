use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::MovieRepository;
use crate::models::{Movie, MoviePayload};

#[derive(Clone)]
pub struct MovieService {
    db: PgPool,
}

impl MovieService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MovieRepository for MovieService {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT id, title, director, year, color, duration FROM movies ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(movies)
    }

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, director, year, color, duration FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(movie)
    }

    async fn create_movie(&self, payload: MoviePayload) -> Result<Movie> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, director, year, color, duration)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, director, year, color, duration
            "#,
        )
        .bind(payload.title)
        .bind(payload.director)
        .bind(payload.year)
        .bind(payload.color)
        .bind(payload.duration)
        .fetch_one(&self.db)
        .await?;

        Ok(movie)
    }

    async fn update_movie(&self, id: i64, payload: MoviePayload) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET title = $2,
                director = $3,
                year = $4,
                color = $5,
                duration = $6
            WHERE id = $1
            RETURNING id, title, director, year, color, duration
            "#,
        )
        .bind(id)
        .bind(payload.title)
        .bind(payload.director)
        .bind(payload.year)
        .bind(payload.color)
        .bind(payload.duration)
        .fetch_optional(&self.db)
        .await?;

        Ok(movie)
    }
}
