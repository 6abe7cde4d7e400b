//! Referral entity and its lifecycle enumerations.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Length of a generated referral id, in hex characters.
const REFERRAL_ID_LENGTH: usize = 9;

/// Medium through which a referral invitation was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Sms,
    Email,
    Share,
}

impl Channel {
    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::Email => "EMAIL",
            Channel::Share => "SHARE",
        }
    }
}

/// Referral lifecycle state.
///
/// `Invited` is the initial state and `Completed` the terminal one. Transitions
/// are not guarded: any state may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferralStatus {
    Invited,
    Started,
    Completed,
}

impl ReferralStatus {
    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferralStatus::Invited => "Invited",
            ReferralStatus::Started => "Started",
            ReferralStatus::Completed => "Completed",
        }
    }
}

/// Returned when a channel or status name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Channel {
    type Err = ParseEnumError;

    /// Parses a channel name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SMS" => Ok(Channel::Sms),
            "EMAIL" => Ok(Channel::Email),
            "SHARE" => Ok(Channel::Share),
            _ => Err(ParseEnumError {
                kind: "channel",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ReferralStatus {
    type Err = ParseEnumError;

    /// Parses a status name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "invited" => Ok(ReferralStatus::Invited),
            "started" => Ok(ReferralStatus::Started),
            "completed" => Ok(ReferralStatus::Completed),
            _ => Err(ParseEnumError {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReferralStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a referral for deduplication.
///
/// A referring user may invite the same person through several channels, but
/// only once per channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferralKey {
    pub referrer_uid: String,
    pub name: String,
    pub channel: Channel,
}

/// A recorded invitation from one user to a named person.
#[derive(Debug, Clone, PartialEq)]
pub struct Referral {
    pub id: String,
    pub referrer_uid: String,
    pub name: String,
    pub channel: Channel,
    pub referral_code: String,
    pub status: ReferralStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Referral {
    /// Builds a freshly invited referral with a generated id.
    pub fn invite(new_referral: NewReferral) -> Self {
        let now = Utc::now();
        Self {
            id: generate_referral_id(),
            referrer_uid: new_referral.referrer_uid,
            name: new_referral.name,
            channel: new_referral.channel,
            referral_code: new_referral.referral_code,
            status: ReferralStatus::Invited,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn key(&self) -> ReferralKey {
        ReferralKey {
            referrer_uid: self.referrer_uid.clone(),
            name: self.name.clone(),
            channel: self.channel,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReferralStatus::Completed
    }
}

/// Input data for recording a new referral.
#[derive(Debug, Clone)]
pub struct NewReferral {
    pub referrer_uid: String,
    pub name: String,
    pub channel: Channel,
    pub referral_code: String,
}

impl NewReferral {
    pub fn key(&self) -> ReferralKey {
        ReferralKey {
            referrer_uid: self.referrer_uid.clone(),
            name: self.name.clone(),
            channel: self.channel,
        }
    }
}

/// Random uppercase hex id, e.g. `3FA91C0B7`.
fn generate_referral_id() -> String {
    let bytes: [u8; 5] = rand::random();
    let mut id = hex::encode_upper(bytes);
    id.truncate(REFERRAL_ID_LENGTH);
    id
}
