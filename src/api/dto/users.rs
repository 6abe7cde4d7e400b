//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::referral_code::CODE_REGEX;

/// Request attributing a newly signed-up user to a referrer's code.
#[derive(Debug, Deserialize, Validate)]
pub struct AttributeRequest {
    #[validate(regex(path = "*CODE_REGEX", message = "Invalid referral code"))]
    pub referral_code: String,

    #[validate(length(min = 1, message = "referee_uid must not be empty"))]
    pub referee_uid: String,
}

/// A user's referral code.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReferralCodeResponse {
    pub uid: String,
    pub referral_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_request_validation() {
        let valid = AttributeRequest {
            referral_code: "AB12CD".to_string(),
            referee_uid: "U2".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_code = AttributeRequest {
            referral_code: "AB12C".to_string(),
            referee_uid: "U2".to_string(),
        };
        assert!(bad_code.validate().is_err());

        let no_referee = AttributeRequest {
            referral_code: "AB12CD".to_string(),
            referee_uid: String::new(),
        };
        assert!(no_referee.validate().is_err());
    }
}
