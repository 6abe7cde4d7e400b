//! Referral code assignment and referee attribution.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::referral_code::derive_referral_code;
use serde_json::json;

/// Service managing the referral code stored on each user.
pub struct UserService<U: UserRepository + ?Sized> {
    repository: Arc<U>,
}

impl<U: UserRepository + ?Sized> UserService<U> {
    /// Creates a new user service.
    pub fn new(repository: Arc<U>) -> Self {
        Self { repository }
    }

    /// Returns the user's referral code, deriving and storing it on first use.
    ///
    /// An unknown user yields an empty string; no user is created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_or_create_referral_code(&self, uid: &str) -> Result<String, AppError> {
        let Some(mut user) = self.repository.get_by_id(uid).await? else {
            tracing::warn!(uid, "User does not exist");
            return Ok(String::new());
        };

        if let Some(code) = user.referral_code() {
            return Ok(code.to_string());
        }

        let code = derive_referral_code(uid);
        user.referral_code = Some(code.clone());
        self.repository.update(user).await?;
        tracing::info!(uid, referral_code = %code, "Assigned referral code");

        Ok(code)
    }

    /// Stores `referral_code` on the referee's record once they sign up.
    ///
    /// The code is not checked against existing referrals. Returns `Ok(false)`
    /// when the referee does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn attribute_referral(
        &self,
        referral_code: &str,
        referee_uid: &str,
    ) -> Result<bool, AppError> {
        let Some(mut referee) = self.repository.get_by_id(referee_uid).await? else {
            tracing::warn!(referee_uid, "Referee not found");
            return Ok(false);
        };

        referee.referral_code = Some(referral_code.to_string());
        self.repository.update(referee).await?;
        tracing::info!(referee_uid, referral_code, "Referral code attributed");

        Ok(true)
    }

    /// Registers a user without a referral code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the uid is taken.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn register_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if self.repository.get_by_id(&new_user.uid).await?.is_some() {
            return Err(AppError::conflict(
                "User already exists",
                json!({ "uid": new_user.uid }),
            ));
        }

        let user = User::from(new_user);
        self.repository.add(user.clone()).await?;
        tracing::info!(uid = %user.uid, "Registered user");

        Ok(user)
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.get_all().await
    }

    /// Counts all users. Doubles as a storage liveness probe.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
