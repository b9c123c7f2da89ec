use sqlx::FromRow;
use time::OffsetDateTime;

use crate::users::dto::{NewUserDetails, UserDto};

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String, // stored as given, not hashed
    pub creation_date: OffsetDateTime,
}

/// Values for a user that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub creation_date: OffsetDateTime,
}

impl NewUser {
    pub fn from_details(details: NewUserDetails, creation_date: OffsetDateTime) -> Self {
        Self {
            username: details.username,
            password: details.password,
            creation_date,
        }
    }
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            password: u.password,
            creation_date: u.creation_date,
        }
    }
}
