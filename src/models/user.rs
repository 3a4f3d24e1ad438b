use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub city: String,
    pub language: String,
}

/// Write payload for users.
///
/// Every field is optional here: completeness is enforced by the store's
/// NOT NULL constraints, so an incomplete payload fails at insert/update time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub language: Option<String>,
}

impl UserPayload {
    /// Turn the payload into a row with the given id.
    ///
    /// Fails with the name of the first column that would be written as NULL.
    pub fn into_user(self, id: i64) -> Result<User, &'static str> {
        match self {
            UserPayload {
                firstname: Some(firstname),
                lastname: Some(lastname),
                email: Some(email),
                city: Some(city),
                language: Some(language),
            } => Ok(User {
                id,
                firstname,
                lastname,
                email,
                city,
                language,
            }),
            UserPayload { firstname: None, .. } => Err("firstname"),
            UserPayload { lastname: None, .. } => Err("lastname"),
            UserPayload { email: None, .. } => Err("email"),
            UserPayload { city: None, .. } => Err("city"),
            UserPayload { language: None, .. } => Err("language"),
        }
    }
}
