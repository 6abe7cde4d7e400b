//! Repository trait for referral data access.

use crate::domain::entities::{Referral, ReferralKey};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for referral records.
///
/// Predicates the domain needs are expressed as named queries so storage
/// backends can serve them without scanning every record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReferralRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::InMemoryReferralRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferralRepository: Send + Sync {
    /// Finds a referral by its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_by_id(&self, id: &str) -> Result<Option<Referral>, AppError>;

    /// Returns every stored referral.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_all(&self) -> Result<Vec<Referral>, AppError>;

    /// Returns all referrals sent by `referrer_uid`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_user(&self, referrer_uid: &str) -> Result<Vec<Referral>, AppError>;

    /// Returns the referrals sharing the deduplication key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_key(&self, key: &ReferralKey) -> Result<Vec<Referral>, AppError>;

    /// Finds the first referral matching both the code and the referred name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Referral))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code_and_name(
        &self,
        referral_code: &str,
        name: &str,
    ) -> Result<Option<Referral>, AppError>;

    /// Stores a new referral.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn add(&self, referral: Referral) -> Result<(), AppError>;

    /// Replaces the stored referral with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no referral has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, referral: Referral) -> Result<(), AppError>;

    /// Removes a referral. Deleting an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
