//! Pure helpers used across the application.
//!
//! - [`referral_code`] - Referral code derivation and validation
//! - [`invite_message`] - Invitation text per channel

pub mod invite_message;
pub mod referral_code;
