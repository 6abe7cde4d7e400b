//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod referrals;
pub mod users;

pub use health::health_handler;
pub use referrals::{
    create_referral_handler, delete_user_referrals_handler, get_referral_handler,
    invite_message_handler, list_referrals_handler, referral_stats_handler,
    update_referral_status_handler,
};
pub use users::{attribute_referral_handler, referral_code_handler, validate_code_handler};
