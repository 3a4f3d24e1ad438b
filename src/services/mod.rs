// Persistence ports and their adapters

pub mod memory;
pub mod movie_service;
pub mod user_service;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Movie, MoviePayload, User, UserPayload};

pub use memory::InMemoryStore;
pub use movie_service::MovieService;
pub use user_service::UserService;

/// Storage for users.
///
/// Payloads are not checked for completeness before they reach an adapter;
/// adapters reject missing columns the way the database schema does.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;

    async fn find_user(&self, id: i64) -> Result<Option<User>>;

    async fn create_user(&self, payload: UserPayload) -> Result<User>;

    /// Replace every column of an existing user.
    ///
    /// Returns `None` when no row has the given id.
    async fn update_user(&self, id: i64, payload: UserPayload) -> Result<Option<User>>;
}

/// Storage for movies. Payloads have already passed `MOVIE_RULES`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn list_movies(&self) -> Result<Vec<Movie>>;

    async fn find_movie(&self, id: i64) -> Result<Option<Movie>>;

    async fn create_movie(&self, payload: MoviePayload) -> Result<Movie>;

    async fn update_movie(&self, id: i64, payload: MoviePayload) -> Result<Option<Movie>>;
}
