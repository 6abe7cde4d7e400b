//! Referral code derivation and validation.
//!
//! A user's referral code is a pure function of their uid, so it can be
//! recomputed at any time and never needs a counter or random source.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Number of characters in a referral code.
pub const CODE_LENGTH: usize = 6;

/// Symbols a referral code is drawn from.
const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Canonical referral code format.
pub static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{6}$").unwrap());

/// Derives the referral code for a user id.
///
/// Hashes the uid with SHA-256 and maps each of the first six digest bytes
/// onto `A-Z0-9` (`byte % 36`).
///
/// # Examples
///
/// ```
/// use referral_service::utils::referral_code::{derive_referral_code, is_valid_code};
///
/// let code = derive_referral_code("U1");
/// assert_eq!(code, derive_referral_code("U1"));
/// assert!(is_valid_code(&code));
/// ```
pub fn derive_referral_code(uid: &str) -> String {
    let digest = Sha256::digest(uid.as_bytes());

    digest
        .iter()
        .take(CODE_LENGTH)
        .map(|byte| ALPHABET[usize::from(*byte) % ALPHABET.len()] as char)
        .collect()
}

/// Returns `true` if `code` is exactly six characters from `A-Z0-9`.
///
/// Lowercase letters are rejected.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derive_is_deterministic() {
        assert_eq!(derive_referral_code("U1"), derive_referral_code("U1"));
        assert_eq!(
            derive_referral_code("user-42@example.com"),
            derive_referral_code("user-42@example.com")
        );
    }

    #[test]
    fn test_derive_known_value() {
        // SHA-256("") starts with e3 b0 c4 42 98 fc
        assert_eq!(derive_referral_code(""), "L6Q4IA");
        assert_eq!(derive_referral_code("U1"), "NAQXC0");
    }

    #[test]
    fn test_derive_produces_valid_codes() {
        for uid in ["U1", "U2", "", "ñandú", "a much longer identifier with spaces"] {
            let code = derive_referral_code(uid);
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(is_valid_code(&code), "code {code} for {uid:?} is invalid");
        }
    }

    #[test]
    fn test_derive_distinct_for_distinct_ids() {
        let codes: HashSet<String> = (0..1000)
            .map(|i| derive_referral_code(&format!("user-{i}")))
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_valid_codes() {
        assert!(is_valid_code("AB12CD"));
        assert!(is_valid_code("ZZZZZZ"));
        assert!(is_valid_code("000000"));
    }

    #[test]
    fn test_invalid_codes() {
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("AA"));
        assert!(!is_valid_code("ab12cd"));
        assert!(!is_valid_code("AB12C"));
        assert!(!is_valid_code("AB12CDE"));
        assert!(!is_valid_code("AB-2CD"));
        assert!(!is_valid_code("AB12C!"));
        assert!(!is_valid_code(" AB12CD"));
        assert!(!is_valid_code("AB12CD\n"));
    }
}
