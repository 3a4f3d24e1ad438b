use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    /// Four-character string, not a numeric year.
    pub year: String,
    pub color: bool,
    pub duration: f64,
}

/// Write payload for movies. Only deserialized after `MOVIE_RULES` accepted
/// the raw body, so every field is present and correctly typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub director: String,
    pub year: String,
    pub color: bool,
    pub duration: f64,
}

impl MoviePayload {
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            year: self.year,
            color: self.color,
            duration: self.duration,
        }
    }
}
