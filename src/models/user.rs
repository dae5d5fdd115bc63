use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

/// The signed-in user. Persisted as JSON under a single storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    /// Preset path or `data:` URL; `None` renders the initial-letter bubble.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Builds a fresh user from login form input.
    pub fn from_login(username: &str, email: &str) -> Result<Self, ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        let email = validate_email(email)?;
        Ok(Self {
            username: username.to_owned(),
            email,
            avatar: None,
        })
    }

    /// First letter of the username, upper-cased.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .collect()
    }
}

/// Fields the settings form may change. `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl SettingsUpdate {
    /// Merges into `user`, returning the updated copy.
    pub fn merge(&self, user: &User) -> Result<User, ValidationError> {
        let username = match &self.username {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ValidationError::EmptyUsername);
                }
                name.to_owned()
            }
            None => user.username.clone(),
        };
        let avatar = match &self.avatar {
            Some(avatar) if avatar.is_empty() => return Err(ValidationError::EmptyAvatar),
            Some(avatar) => Some(avatar.clone()),
            None => user.avatar.clone(),
        };
        Ok(User {
            username,
            email: user.email.clone(),
            avatar,
        })
    }
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !EMAIL.is_match(email) {
        return Err(ValidationError::InvalidEmail(email.to_owned()));
    }
    Ok(email.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "alice@x.com", ValidationError::EmptyUsername)]
    #[case("   ", "alice@x.com", ValidationError::EmptyUsername)]
    #[case("alice", "", ValidationError::EmptyEmail)]
    #[case("alice", "bad-email", ValidationError::InvalidEmail("bad-email".into()))]
    #[case("alice", "alice@x", ValidationError::InvalidEmail("alice@x".into()))]
    #[case("alice", "a b@x.com", ValidationError::InvalidEmail("a b@x.com".into()))]
    #[case("alice", "alice@@x.com", ValidationError::InvalidEmail("alice@@x.com".into()))]
    #[case("alice", "alice@x..com", ValidationError::InvalidEmail("alice@x..com".into()))]
    #[case("", "bad-email", ValidationError::EmptyUsername)]
    fn rejects_bad_login_input(
        #[case] username: &str,
        #[case] email: &str,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(User::from_login(username, email), Err(expected));
    }

    #[rstest]
    #[case("alice", "alice@x.com")]
    #[case("  bob ", " bob@mail.example.org ")]
    fn accepts_and_trims_login_input(#[case] username: &str, #[case] email: &str) {
        let user = User::from_login(username, email).expect("valid input");
        assert_eq!(
            user,
            User {
                username: username.trim().to_owned(),
                email: email.trim().to_owned(),
                avatar: None,
            }
        );
    }

    fn alice() -> User {
        User {
            username: "alice".into(),
            email: "alice@x.com".into(),
            avatar: Some("avatars/alex.svg".into()),
        }
    }

    #[test]
    fn merge_keeps_omitted_fields() {
        let update = SettingsUpdate {
            username: Some("alice2".into()),
            avatar: None,
        };
        let merged = update.merge(&alice()).unwrap();
        assert_eq!(merged.username, "alice2");
        assert_eq!(merged.email, "alice@x.com");
        assert_eq!(merged.avatar.as_deref(), Some("avatars/alex.svg"));
    }

    #[test]
    fn merge_rejects_blank_username() {
        let update = SettingsUpdate {
            username: Some("  ".into()),
            avatar: None,
        };
        assert_eq!(update.merge(&alice()), Err(ValidationError::EmptyUsername));
    }

    #[test]
    fn record_without_avatar_field_deserializes() {
        let user: User =
            serde_json::from_str(r#"{"username":"alice","email":"alice@x.com"}"#).unwrap();
        assert_eq!(user.avatar, None);
        assert_eq!(user.initial(), "A");
    }
}
