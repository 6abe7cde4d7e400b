//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - PostgreSQL implementations live in `crate::infrastructure::persistence`
//! - In-process implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ReferralRepository`] - Referral records and their lookups
//! - [`UserRepository`] - Program members and their referral codes

pub mod referral_repository;
pub mod user_repository;

pub use referral_repository::ReferralRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use referral_repository::MockReferralRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
