//! Core domain entities representing the referral data model.
//!
//! # Entity Types
//!
//! - [`User`] - A program member, owner of a referral code
//! - [`Referral`] - One invitation sent by a user to a named person
//! - [`ReferralStatistics`] - Derived per-user counts, never persisted
//!
//! Creation inputs live in separate structs (`NewUser`, `NewReferral`), and
//! referral deduplication goes through the explicit [`ReferralKey`].

pub mod referral;
pub mod statistics;
pub mod user;

pub use referral::{Channel, NewReferral, ParseEnumError, Referral, ReferralKey, ReferralStatus};
pub use statistics::ReferralStatistics;
pub use user::{NewUser, User};
