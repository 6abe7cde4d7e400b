//! Repository trait for user data access.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for program members.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryUserRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by uid.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_by_id(&self, uid: &str) -> Result<Option<User>, AppError>;

    /// Returns every user ordered by uid.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_all(&self) -> Result<Vec<User>, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the uid already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn add(&self, user: User) -> Result<(), AppError>;

    /// Replaces the stored user with the same uid.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this uid.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, user: User) -> Result<(), AppError>;
}
