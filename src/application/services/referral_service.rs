//! Referral creation, lookup, status tracking and statistics.

use std::sync::Arc;

use crate::domain::entities::{NewReferral, Referral, ReferralStatistics, ReferralStatus};
use crate::domain::repositories::ReferralRepository;
use crate::error::AppError;
use crate::utils::referral_code::is_valid_code;

/// Service orchestrating referral records.
///
/// Deduplication and status changes are read-then-write sequences against the
/// repository without locking: two concurrent `create` calls for the same key
/// can both pass the duplicate check.
pub struct ReferralService<R: ReferralRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ReferralRepository + ?Sized> ReferralService<R> {
    /// Creates a new referral service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists the referrals sent by a user. Unknown users yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_by_user(&self, uid: &str) -> Result<Vec<Referral>, AppError> {
        tracing::info!(uid, "Listing referrals");
        self.repository.find_by_user(uid).await
    }

    /// Records a referral unless the same user already invited the same person
    /// through the same channel.
    ///
    /// Returns `Ok(false)` for a duplicate, in which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, new_referral: NewReferral) -> Result<bool, AppError> {
        let key = new_referral.key();

        if !self.repository.find_by_key(&key).await?.is_empty() {
            tracing::warn!(
                uid = %key.referrer_uid,
                name = %key.name,
                channel = %key.channel,
                "Referral already exists, not added"
            );
            return Ok(false);
        }

        let referral = Referral::invite(new_referral);
        tracing::info!(uid = %referral.referrer_uid, id = %referral.id, "Adding referral");
        self.repository.add(referral).await?;

        Ok(true)
    }

    /// Finds the referral sent with `referral_code` to the person called `name`.
    ///
    /// A malformed code short-circuits to `Ok(None)` without touching storage.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_one(
        &self,
        referral_code: &str,
        name: &str,
    ) -> Result<Option<Referral>, AppError> {
        if !is_valid_code(referral_code) {
            tracing::warn!(referral_code, "Malformed referral code");
            return Ok(None);
        }

        self.repository
            .find_by_code_and_name(referral_code, name)
            .await
    }

    /// Moves a referral to `status` and refreshes its update timestamp.
    ///
    /// Any target status is accepted. Returns `Ok(false)` when no referral
    /// matches, in which case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_status(
        &self,
        referral_code: &str,
        name: &str,
        status: ReferralStatus,
    ) -> Result<bool, AppError> {
        let Some(mut referral) = self.find_one(referral_code, name).await? else {
            tracing::warn!(referral_code, name, "No referral found");
            return Ok(false);
        };

        referral.status = status;
        referral.updated_at = chrono::Utc::now();
        tracing::info!(id = %referral.id, %status, "Updating referral status");
        self.repository.update(referral).await?;

        Ok(true)
    }

    /// Aggregates a user's referrals by status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn statistics(&self, uid: &str) -> Result<ReferralStatistics, AppError> {
        let referrals = self.repository.find_by_user(uid).await?;
        Ok(ReferralStatistics::from_referrals(uid, &referrals))
    }

    /// Deletes every referral sent by `uid`.
    ///
    /// Storage failures are logged and reported as `false`. Deletions that
    /// succeeded before the failure are not rolled back.
    pub async fn delete_all_for_user(&self, uid: &str) -> bool {
        let referrals = match self.repository.find_by_user(uid).await {
            Ok(referrals) => referrals,
            Err(e) => {
                tracing::error!(uid, error = %e, "Failed to list referrals for deletion");
                return false;
            }
        };

        for referral in &referrals {
            if let Err(e) = self.repository.delete(&referral.id).await {
                tracing::error!(uid, id = %referral.id, error = %e, "Failed to delete referral");
                return false;
            }
        }

        tracing::info!(uid, deleted = referrals.len(), "Deleted user referrals");
        true
    }
}
