//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct UserRow {
    uid: String,
    name: String,
    email: String,
    referral_code: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            uid: row.uid,
            name: row.name,
            email: row.email,
            referral_code: row.referral_code,
        }
    }
}

/// PostgreSQL repository for program members.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_by_id(&self, uid: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT uid, name, email, referral_code FROM users WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(User::from))
    }

    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT uid, name, email, referral_code FROM users ORDER BY uid",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn add(&self, user: User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (uid, name, email, referral_code) VALUES ($1, $2, $3, $4)")
            .bind(&user.uid)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.referral_code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE users SET name = $2, email = $3, referral_code = $4 WHERE uid = $1",
        )
        .bind(&user.uid)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.referral_code)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "User not found",
                json!({ "uid": user.uid }),
            ));
        }

        Ok(())
    }
}
