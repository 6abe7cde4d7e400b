//! Per-user referral statistics, computed on demand.

use super::Referral;

/// Aggregate referral counts for one referring user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralStatistics {
    pub uid: String,
    pub total_sent: usize,
    pub total_completed: usize,
    pub total_pending: usize,
}

impl ReferralStatistics {
    /// Aggregates the given referrals, all assumed to belong to `uid`.
    pub fn from_referrals(uid: impl Into<String>, referrals: &[Referral]) -> Self {
        let total_sent = referrals.len();
        let total_completed = referrals.iter().filter(|r| r.is_completed()).count();

        Self {
            uid: uid.into(),
            total_sent,
            total_completed,
            total_pending: total_sent.saturating_sub(total_completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Channel, NewReferral, ReferralStatus};

    fn referral(name: &str, status: ReferralStatus) -> Referral {
        let mut referral = Referral::invite(NewReferral {
            referrer_uid: "U1".to_string(),
            name: name.to_string(),
            channel: Channel::Sms,
            referral_code: "AB12CD".to_string(),
        });
        referral.status = status;
        referral
    }

    #[test]
    fn test_empty_statistics() {
        let stats = ReferralStatistics::from_referrals("U1", &[]);
        assert_eq!(stats.uid, "U1");
        assert_eq!(stats.total_sent, 0);
        assert_eq!(stats.total_completed, 0);
        assert_eq!(stats.total_pending, 0);
    }

    #[test]
    fn test_started_counts_as_pending() {
        let referrals = vec![
            referral("A", ReferralStatus::Invited),
            referral("B", ReferralStatus::Started),
            referral("C", ReferralStatus::Completed),
        ];

        let stats = ReferralStatistics::from_referrals("U1", &referrals);
        assert_eq!(stats.total_sent, 3);
        assert_eq!(stats.total_completed, 1);
        assert_eq!(stats.total_pending, 2);
    }
}
