//! In-process repository implementations.
//!
//! Used when no database is configured and by the HTTP integration tests.
//! State is encapsulated per instance behind `tokio::sync::RwLock`.

pub mod referral_repository;
pub mod user_repository;

pub use referral_repository::InMemoryReferralRepository;
pub use user_repository::{DEMO_USERS, InMemoryUserRepository};
