use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

pub const USERNAME_BLANK_MSG: &str = "Username cannot be blank.";
pub const PASSWORD_BLANK_MSG: &str = "Password cannot be blank.";

// `hh` is the 12-hour clock hour, matching the published timestamp format.
time::serde::format_description!(
    creation_timestamp,
    OffsetDateTime,
    "[day]-[month]-[year] [hour repr:12]:[minute]:[second]"
);

/// Request body for creating or patching a user.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserDetails {
    #[schema(example = "JoeDoe")]
    pub username: Option<String>,
    #[schema(example = "pass")]
    pub password: Option<String>,
}

/// User details that passed validation.
#[derive(Debug, Clone)]
pub struct NewUserDetails {
    pub username: String,
    pub password: String,
}

impl UserDetails {
    /// One message per blank or missing field.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();
        if is_blank(self.username.as_deref()) {
            violations.push(USERNAME_BLANK_MSG.to_string());
        }
        if is_blank(self.password.as_deref()) {
            violations.push(PASSWORD_BLANK_MSG.to_string());
        }
        violations
    }

    pub fn into_new(self) -> Result<NewUserDetails, Vec<String>> {
        let violations = self.validate();
        match (self.username, self.password) {
            (Some(username), Some(password)) if violations.is_empty() => {
                Ok(NewUserDetails { username, password })
            }
            _ => Err(violations),
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[schema(example = 1)]
    pub id: i64,
    pub username: String,
    pub password: String,
    #[serde(with = "creation_timestamp")]
    #[schema(value_type = String, example = "12-11-2019 12:00:00")]
    pub creation_date: OffsetDateTime,
}
