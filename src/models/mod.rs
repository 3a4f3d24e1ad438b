// Data models and payload validation

pub mod movie;
pub mod user;
pub mod validation;

pub use movie::*;
pub use user::*;
pub use validation::*;
