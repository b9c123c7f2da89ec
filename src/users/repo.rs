use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::ServiceError;
use crate::users::repo_types::{NewUser, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> Result<User, ServiceError>;
    /// Overwrites username and password of an existing record.
    async fn save(&self, user: &User) -> Result<User, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ServiceError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<User>, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

/// Postgres-backed user storage.
#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, ServiceError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, creation_date)
            VALUES ($1, $2, $3)
            RETURNING id, username, password, creation_date
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.creation_date)
        .fetch_one(&self.db)
        .await
        .map_err(|e| ServiceError::from_user_write(e, &user.username))
    }

    async fn save(&self, user: &User) -> Result<User, ServiceError> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2, password = $3
            WHERE id = $1
            RETURNING id, username, password, creation_date
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(&self.db)
        .await
        .map_err(|e| ServiceError::from_user_write(e, &user.username))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ServiceError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, creation_date
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ServiceError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, creation_date
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, creation_date
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(users)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
