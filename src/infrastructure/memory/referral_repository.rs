//! In-process referral store.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Referral, ReferralKey};
use crate::domain::repositories::ReferralRepository;
use crate::error::AppError;

/// Referral store backed by a map from referring uid to that user's referrals.
///
/// Each instance owns its state; nothing is shared between instances.
#[derive(Debug, Default)]
pub struct InMemoryReferralRepository {
    by_user: RwLock<HashMap<String, Vec<Referral>>>,
}

impl InMemoryReferralRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReferralRepository for InMemoryReferralRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<Referral>, AppError> {
        let by_user = self.by_user.read().await;
        Ok(by_user.values().flatten().find(|r| r.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Referral>, AppError> {
        let by_user = self.by_user.read().await;
        Ok(by_user.values().flatten().cloned().collect())
    }

    async fn find_by_user(&self, referrer_uid: &str) -> Result<Vec<Referral>, AppError> {
        let by_user = self.by_user.read().await;
        Ok(by_user.get(referrer_uid).cloned().unwrap_or_default())
    }

    async fn find_by_key(&self, key: &ReferralKey) -> Result<Vec<Referral>, AppError> {
        let by_user = self.by_user.read().await;
        Ok(by_user
            .get(&key.referrer_uid)
            .map(|referrals| {
                referrals
                    .iter()
                    .filter(|r| r.name == key.name && r.channel == key.channel)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_code_and_name(
        &self,
        referral_code: &str,
        name: &str,
    ) -> Result<Option<Referral>, AppError> {
        let by_user = self.by_user.read().await;
        Ok(by_user
            .values()
            .flatten()
            .filter(|r| r.referral_code == referral_code && r.name == name)
            .min_by_key(|r| r.created_at)
            .cloned())
    }

    async fn add(&self, referral: Referral) -> Result<(), AppError> {
        let mut by_user = self.by_user.write().await;

        if by_user.values().flatten().any(|r| r.id == referral.id) {
            return Err(AppError::conflict(
                "Referral id already exists",
                json!({ "id": referral.id }),
            ));
        }

        by_user
            .entry(referral.referrer_uid.clone())
            .or_default()
            .push(referral);
        Ok(())
    }

    async fn update(&self, referral: Referral) -> Result<(), AppError> {
        let mut by_user = self.by_user.write().await;

        let slot = by_user
            .values_mut()
            .flatten()
            .find(|r| r.id == referral.id)
            .ok_or_else(|| {
                AppError::not_found("Referral not found", json!({ "id": referral.id }))
            })?;

        *slot = referral;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut by_user = self.by_user.write().await;

        for referrals in by_user.values_mut() {
            referrals.retain(|r| r.id != id);
        }
        by_user.retain(|_, referrals| !referrals.is_empty());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Channel, NewReferral, ReferralStatus};

    fn referral(uid: &str, name: &str, channel: Channel) -> Referral {
        Referral::invite(NewReferral {
            referrer_uid: uid.to_string(),
            name: name.to_string(),
            channel,
            referral_code: "AB12CD".to_string(),
        })
    }

    #[tokio::test]
    async fn test_add_and_find_by_user() {
        let repo = InMemoryReferralRepository::new();
        repo.add(referral("U1", "Jose", Channel::Email)).await.unwrap();
        repo.add(referral("U1", "Ana", Channel::Sms)).await.unwrap();
        repo.add(referral("U2", "Jose", Channel::Email)).await.unwrap();

        assert_eq!(repo.find_by_user("U1").await.unwrap().len(), 2);
        assert_eq!(repo.find_by_user("U2").await.unwrap().len(), 1);
        assert!(repo.find_by_user("U3").await.unwrap().is_empty());
        assert_eq!(repo.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_find_by_key_is_scoped_to_referrer() {
        let repo = InMemoryReferralRepository::new();
        let first = referral("U1", "Jose", Channel::Email);
        repo.add(first.clone()).await.unwrap();

        assert_eq!(repo.find_by_key(&first.key()).await.unwrap().len(), 1);

        let other_user = referral("U2", "Jose", Channel::Email);
        assert!(repo.find_by_key(&other_user.key()).await.unwrap().is_empty());

        let other_channel = referral("U1", "Jose", Channel::Share);
        assert!(
            repo.find_by_key(&other_channel.key())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let repo = InMemoryReferralRepository::new();
        let first = referral("U1", "Jose", Channel::Email);
        repo.add(first.clone()).await.unwrap();

        let result = repo.add(first).await;
        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let repo = InMemoryReferralRepository::new();
        let mut stored = referral("U1", "Jose", Channel::Email);
        repo.add(stored.clone()).await.unwrap();

        stored.status = ReferralStatus::Completed;
        repo.update(stored.clone()).await.unwrap();

        let found = repo.get_by_id(&stored.id).await.unwrap().unwrap();
        assert_eq!(found.status, ReferralStatus::Completed);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryReferralRepository::new();
        let result = repo.update(referral("U1", "Jose", Channel::Email)).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_by_code_and_name() {
        let repo = InMemoryReferralRepository::new();
        repo.add(referral("U1", "Jose", Channel::Email)).await.unwrap();

        assert!(
            repo.find_by_code_and_name("AB12CD", "Jose")
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            repo.find_by_code_and_name("AB12CD", "Ana")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryReferralRepository::new();
        let stored = referral("U1", "Jose", Channel::Email);
        repo.add(stored.clone()).await.unwrap();

        repo.delete(&stored.id).await.unwrap();
        repo.delete("missing").await.unwrap();

        assert!(repo.get_by_id(&stored.id).await.unwrap().is_none());
        assert!(repo.find_by_user("U1").await.unwrap().is_empty());
    }
}
