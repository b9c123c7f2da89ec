use std::sync::Arc;

use time::OffsetDateTime;
use tracing::debug;

use crate::errors::ServiceError;
use crate::users::dto::{NewUserDetails, UserDetails, UserDto};
use crate::users::repo::UserRepository;
use crate::users::repo_types::{NewUser, User};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Persists a new user stamped with the current instant.
    pub async fn create_user(&self, details: NewUserDetails) -> Result<UserDto, ServiceError> {
        debug!(username = %details.username, "creating user");
        let user = NewUser::from_details(details, OffsetDateTime::now_utc());
        let created = self.repo.insert(user).await?;
        Ok(created.into())
    }

    /// Applies only the fields present in `details`. Returns `None` when no user has `id`.
    pub async fn update_user(
        &self,
        details: UserDetails,
        id: i64,
    ) -> Result<Option<UserDto>, ServiceError> {
        let Some(mut user) = self.repo.find_by_id(id).await? else {
            debug!(id, "user to update not found");
            return Ok(None);
        };
        if let Some(password) = details.password {
            user.password = password;
        }
        if let Some(username) = details.username {
            user.username = username;
        }
        debug!(id, username = %user.username, "saving user with new data");
        let saved = self.repo.save(&user).await?;
        Ok(Some(saved.into()))
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<UserDto>, ServiceError> {
        debug!(id, "retrieving user");
        Ok(self.repo.find_by_id(id).await?.map(UserDto::from))
    }

    /// Raw record lookup, used to resolve job offer employers.
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        self.repo.find_by_username(username).await
    }

    pub async fn get_users(&self) -> Result<Vec<UserDto>, ServiceError> {
        debug!("retrieving all users");
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ServiceError> {
        debug!(id, "deleting user");
        self.repo.delete_by_id(id).await?;
        debug!(id, "deleted user");
        Ok(())
    }
}
