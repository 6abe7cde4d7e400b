//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers
//! and the admin CLI call.
//!
//! # Available Services
//!
//! - [`services::referral_service::ReferralService`] - Referral recording, lookup, status and statistics
//! - [`services::user_service::UserService`] - Referral code assignment and attribution

pub mod services;
