//! In-process user store.

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Demo members seeded into fresh stores: `(uid, name, email)`.
pub const DEMO_USERS: &[(&str, &str, &str)] = &[
    ("U1", "Maria Gomez", "maria.gomez@example.com"),
    ("U2", "Carlos Rodriguez", "carlos.rodriguez@example.com"),
    ("U3", "Lucia Fernandez", "lucia.fernandez@example.com"),
    ("U4", "Javier Martinez", "javier.martinez@example.com"),
    ("U5", "Sofia Ramirez", "sofia.ramirez@example.com"),
];

/// User store backed by a map keyed by uid.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with [`DEMO_USERS`], none of which has a
    /// referral code yet.
    pub fn with_demo_users() -> Self {
        let users: HashMap<String, User> = DEMO_USERS
            .iter()
            .map(|(uid, name, email)| {
                (
                    uid.to_string(),
                    User {
                        uid: uid.to_string(),
                        name: name.to_string(),
                        email: email.to_string(),
                        referral_code: None,
                    },
                )
            })
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, uid: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.read().await.get(uid).cloned())
    }

    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.uid.cmp(&b.uid));
        Ok(users)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.read().await.len() as i64)
    }

    async fn add(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.uid) {
            return Err(AppError::conflict(
                "User already exists",
                json!({ "uid": user.uid }),
            ));
        }

        users.insert(user.uid.clone(), user);
        Ok(())
    }

    async fn update(&self, user: User) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        let slot = users
            .get_mut(&user.uid)
            .ok_or_else(|| AppError::not_found("User not found", json!({ "uid": user.uid })))?;

        *slot = user;
        Ok(())
    }
}
