use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::UserRepository;
use crate::models::{User, UserPayload};

#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

impl UserService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserService {
    async fn list_users(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, firstname, lastname, email, city, language FROM users ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(users)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, firstname, lastname, email, city, language FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, payload: UserPayload) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email, city, language)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, firstname, lastname, email, city, language
            "#,
        )
        .bind(payload.firstname)
        .bind(payload.lastname)
        .bind(payload.email)
        .bind(payload.city)
        .bind(payload.language)
        .fetch_one(&self.db)
        .await?;

        Ok(user)
    }

    async fn update_user(&self, id: i64, payload: UserPayload) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET firstname = $2,
                lastname = $3,
                email = $4,
                city = $5,
                language = $6
            WHERE id = $1
            RETURNING id, firstname, lastname, email, city, language
            "#,
        )
        .bind(id)
        .bind(payload.firstname)
        .bind(payload.lastname)
        .bind(payload.email)
        .bind(payload.city)
        .bind(payload.language)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }
}
