use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;

use super::{MovieRepository, UserRepository};
use crate::models::{Movie, MoviePayload, User, UserPayload};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    movies: BTreeMap<i64, Movie>,
    last_user_id: i64,
    last_movie_id: i64,
}

/// Process-local store backing both repositories.
///
/// Mirrors the Postgres schema: identifiers start at 1, user columns are
/// NOT NULL and `users.email` is unique. Used by tests and local runs that
/// have no database at hand.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| anyhow!("in-memory store lock poisoned"))
    }
}

fn complete_user(id: i64, payload: UserPayload) -> Result<User> {
    payload.into_user(id).map_err(|column| {
        anyhow!(
            "null value in column \"{}\" of relation \"users\" violates not-null constraint",
            column
        )
    })
}

fn ensure_unique_email(tables: &Tables, user: &User) -> Result<()> {
    let taken = tables
        .users
        .values()
        .any(|existing| existing.id != user.id && existing.email == user.email);

    if taken {
        bail!("duplicate key value violates unique constraint \"users_email_key\"");
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn create_user(&self, payload: UserPayload) -> Result<User> {
        let mut tables = self.write()?;
        let user = complete_user(tables.last_user_id + 1, payload)?;
        ensure_unique_email(&tables, &user)?;

        tables.last_user_id = user.id;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i64, payload: UserPayload) -> Result<Option<User>> {
        let mut tables = self.write()?;
        if !tables.users.contains_key(&id) {
            return Ok(None);
        }

        let user = complete_user(id, payload)?;
        ensure_unique_email(&tables, &user)?;

        tables.users.insert(id, user.clone());
        Ok(Some(user))
    }
}

#[async_trait]
impl MovieRepository for InMemoryStore {
    async fn list_movies(&self) -> Result<Vec<Movie>> {
        Ok(self.read()?.movies.values().cloned().collect())
    }

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>> {
        Ok(self.read()?.movies.get(&id).cloned())
    }

    async fn create_movie(&self, payload: MoviePayload) -> Result<Movie> {
        let mut tables = self.write()?;
        tables.last_movie_id += 1;

        let movie = payload.into_movie(tables.last_movie_id);
        tables.movies.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn update_movie(&self, id: i64, payload: MoviePayload) -> Result<Option<Movie>> {
        let mut tables = self.write()?;
        let Some(slot) = tables.movies.get_mut(&id) else {
            return Ok(None);
        };

        *slot = payload.into_movie(id);
        Ok(Some(slot.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_test::{assert_err, assert_ok};

    fn marie() -> UserPayload {
        UserPayload {
            firstname: Some("Marie".to_string()),
            lastname: Some("Martin".to_string()),
            email: Some("marie@wild.co".to_string()),
            city: Some("Paris".to_string()),
            language: Some("French".to_string()),
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially_from_one() {
        let store = InMemoryStore::new();

        let first = assert_ok!(store.create_user(marie()).await);
        let second = assert_ok!(
            store
                .create_user(UserPayload {
                    email: Some("other@wild.co".to_string()),
                    ..marie()
                })
                .await
        );

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list_users().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_missing_column_is_rejected_without_consuming_an_id() {
        let store = InMemoryStore::new();

        let err = assert_err!(
            store
                .create_user(UserPayload {
                    firstname: Some("Marie".to_string()),
                    ..UserPayload::default()
                })
                .await
        );
        assert!(err.to_string().contains("\"lastname\""));

        let user = store.create_user(marie()).await.unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = InMemoryStore::new();
        store.create_user(marie()).await.unwrap();

        assert_err!(store.create_user(marie()).await);
    }

    #[tokio::test]
    async fn test_update_replaces_every_column() {
        let store = InMemoryStore::new();
        let created = store.create_user(marie()).await.unwrap();

        let replacement = UserPayload {
            firstname: Some("Martin".to_string()),
            lastname: Some("Marie".to_string()),
            email: Some("martin@wild.co".to_string()),
            city: Some("London".to_string()),
            language: Some("English".to_string()),
        };
        let updated = store
            .update_user(created.id, replacement)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.city, "London");
        assert_eq!(store.find_user(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let store = InMemoryStore::new();
        let created = store.create_user(marie()).await.unwrap();

        let updated = store.update_user(created.id, marie()).await.unwrap();
        assert_eq!(updated, Some(created));
    }

    #[tokio::test]
    async fn test_update_of_unknown_row_is_none() {
        let store = InMemoryStore::new();

        assert_eq!(store.update_user(0, marie()).await.unwrap(), None);
        assert_eq!(store.find_user(0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_movies_round_trip() {
        let store = InMemoryStore::new();
        let payload = MoviePayload {
            title: "Metropolis".to_string(),
            director: "Fritz Lang".to_string(),
            year: "1927".to_string(),
            color: false,
            duration: 153.0,
        };

        let movie = store.create_movie(payload.clone()).await.unwrap();
        assert_eq!(movie, payload.clone().into_movie(1));

        let recolored = MoviePayload {
            color: true,
            ..payload
        };
        let updated = store.update_movie(1, recolored).await.unwrap().unwrap();
        assert!(updated.color);
        assert_eq!(store.update_movie(2, updated_payload(&updated)).await.unwrap(), None);
    }

    fn updated_payload(movie: &Movie) -> MoviePayload {
        MoviePayload {
            title: movie.title.clone(),
            director: movie.director.clone(),
            year: movie.year.clone(),
            color: movie.color,
            duration: movie.duration,
        }
    }
}
