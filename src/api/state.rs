use std::sync::Arc;

use sqlx::PgPool;

use crate::services::{
    InMemoryStore, MovieRepository, MovieService, UserRepository, UserService,
};

/// Dependencies handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, movies: Arc<dyn MovieRepository>) -> Self {
        Self { users, movies }
    }

    /// Postgres-backed state sharing one connection pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(UserService::new(pool.clone())),
            Arc::new(MovieService::new(pool)),
        )
    }

    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self::new(Arc::new(store.clone()), Arc::new(store))
    }
}
