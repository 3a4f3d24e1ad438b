// API routes and handlers

pub mod error;
pub mod health;
pub mod movies;
pub mod routes;
pub mod state;
pub mod users;

pub use error::ApiError;
pub use routes::create_routes;
pub use state::AppState;
