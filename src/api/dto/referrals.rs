//! DTOs for referral endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Referral, ReferralStatistics};
use crate::utils::referral_code::CODE_REGEX;

/// Request to record a new referral.
///
/// `channel` is also accepted under its legacy name `method`.
#[derive(Debug, Deserialize, Validate)]
pub struct ReferralAddRequest {
    /// Referring user.
    #[validate(length(min = 1, message = "uid must not be empty"))]
    pub uid: String,

    /// Name of the invited person.
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// `SMS`, `EMAIL` or `SHARE`, case-insensitive.
    #[serde(alias = "method")]
    pub channel: String,

    #[validate(regex(path = "*CODE_REGEX", message = "Invalid referral code"))]
    pub referral_code: String,
}

/// Query identifying a single referral.
#[derive(Debug, Deserialize, Validate)]
pub struct ReferralLookupQuery {
    #[validate(regex(path = "*CODE_REGEX", message = "Invalid referral code"))]
    pub referral_code: String,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// Query moving a referral to a new status.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusQuery {
    #[validate(regex(path = "*CODE_REGEX", message = "Invalid referral code"))]
    pub referral_code: String,

    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    /// `Invited`, `Started` or `Completed`, case-insensitive.
    pub status: String,
}

/// Query for composing an invitation message.
#[derive(Debug, Deserialize, Validate)]
pub struct InviteMessageQuery {
    pub channel: String,

    #[validate(regex(path = "*CODE_REGEX", message = "Invalid referral code"))]
    pub referral_code: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StatsQuery {
    #[validate(length(min = 1, message = "uid must not be empty"))]
    pub uid: String,
}

/// Referral as returned by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralResponse {
    pub referral_id: String,
    pub uid: String,
    pub name: String,
    pub channel: String,
    pub referral_code: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Referral> for ReferralResponse {
    fn from(referral: Referral) -> Self {
        Self {
            referral_id: referral.id,
            uid: referral.referrer_uid,
            name: referral.name,
            channel: referral.channel.as_str().to_string(),
            referral_code: referral.referral_code,
            status: referral.status.as_str().to_string(),
            created_at: referral.created_at,
            updated_at: referral.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub uid: String,
    pub total_sent: usize,
    pub total_completed: usize,
    pub total_pending: usize,
}

impl From<ReferralStatistics> for StatisticsResponse {
    fn from(stats: ReferralStatistics) -> Self {
        Self {
            uid: stats.uid,
            total_sent: stats.total_sent,
            total_completed: stats.total_completed,
            total_pending: stats.total_pending,
        }
    }
}
