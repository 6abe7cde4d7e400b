//! User entity as seen by the referral program.

/// A program member who can refer others or be referred.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub uid: String,
    pub name: String,
    pub email: String,
    /// Set once the user's own code is generated, or overwritten when the user
    /// is attributed to a referrer.
    pub referral_code: Option<String>,
}

impl User {
    /// Returns the stored referral code, treating an empty string as unset.
    pub fn referral_code(&self) -> Option<&str> {
        self.referral_code.as_deref().filter(|code| !code.is_empty())
    }
}

/// Input data for registering a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uid: String,
    pub name: String,
    pub email: String,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        Self {
            uid: new_user.uid,
            name: new_user.name,
            email: new_user.email,
            referral_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_is_unset() {
        let mut user = User::from(NewUser {
            uid: "U1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        });
        assert_eq!(user.referral_code(), None);

        user.referral_code = Some(String::new());
        assert_eq!(user.referral_code(), None);

        user.referral_code = Some("AB12CD".to_string());
        assert_eq!(user.referral_code(), Some("AB12CD"));
    }
}
