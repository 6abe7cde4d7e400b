//! Business logic services for the application layer.

pub mod referral_service;
pub mod user_service;

pub use referral_service::ReferralService;
pub use user_service::UserService;
