//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ReferralService, UserService};
use crate::domain::repositories::{ReferralRepository, UserRepository};
use crate::infrastructure::memory::{InMemoryReferralRepository, InMemoryUserRepository};

/// Services shared across requests.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub referral_service: Arc<ReferralService<dyn ReferralRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
    /// Storage backend name reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Builds the state over the given repositories.
    pub fn new(
        referral_repository: Arc<dyn ReferralRepository>,
        user_repository: Arc<dyn UserRepository>,
        storage: &'static str,
    ) -> Self {
        Self {
            referral_service: Arc::new(ReferralService::new(referral_repository)),
            user_service: Arc::new(UserService::new(user_repository)),
            storage,
        }
    }

    /// Builds the state over fresh in-memory repositories.
    ///
    /// With `seed_demo_users`, the user store starts with the demo members.
    pub fn in_memory(seed_demo_users: bool) -> Self {
        let users = if seed_demo_users {
            InMemoryUserRepository::with_demo_users()
        } else {
            InMemoryUserRepository::new()
        };

        Self::new(
            Arc::new(InMemoryReferralRepository::new()),
            Arc::new(users),
            "memory",
        )
    }
}
