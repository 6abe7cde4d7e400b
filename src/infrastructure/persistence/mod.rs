//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! runtime-bound queries and `FromRow` row types.
//!
//! # Repositories
//!
//! - [`PgReferralRepository`] - Referral storage and lookups
//! - [`PgUserRepository`] - Program members and their referral codes

pub mod pg_referral_repository;
pub mod pg_user_repository;

pub use pg_referral_repository::PgReferralRepository;
pub use pg_user_repository::PgUserRepository;
