//! Authentication payloads exchanged with `/auth/*`.
//!
//! Constructors validate raw strings before anything reaches the transport,
//! so facades never send a blank email or an empty password.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use zeroize::Zeroizing;

use super::User;

/// Error returned when login or registration inputs are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was empty.
    EmptyPassword,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

fn normalized(raw: &str, error: AuthValidationError) -> Result<String, AuthValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(error);
    }
    Ok(trimmed.to_owned())
}

fn secret(raw: &str) -> Result<Zeroizing<String>, AuthValidationError> {
    if raw.is_empty() {
        return Err(AuthValidationError::EmptyPassword);
    }
    Ok(Zeroizing::new(raw.to_owned()))
}

/// Validated credentials for `POST /auth/login`.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use reavise_client::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" maker@example.com ", "hunter2").unwrap();
/// assert_eq!(creds.email(), "maker@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthValidationError> {
        Ok(Self {
            email: normalized(email, AuthValidationError::EmptyEmail)?,
            password: secret(password)?,
        })
    }

    /// Normalised email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// JSON body expected by the login endpoint.
    pub fn to_body(&self) -> Value {
        json!({ "email": self.email, "password": self.password.as_str() })
    }
}

/// Validated sign-up request for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration from raw inputs.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        Ok(Self {
            username: normalized(username, AuthValidationError::EmptyUsername)?,
            email: normalized(email, AuthValidationError::EmptyEmail)?,
            password: secret(password)?,
        })
    }

    /// Requested handle.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Normalised email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// JSON body expected by the register endpoint.
    pub fn to_body(&self) -> Value {
        json!({
            "username": self.username,
            "email": self.email,
            "password": self.password.as_str(),
        })
    }
}

/// Authenticated user plus the bearer token issued for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The signed-in user.
    pub user: User,
    /// Bearer token for subsequent requests.
    pub token: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", AuthValidationError::EmptyEmail)]
    #[case("   ", "pw", AuthValidationError::EmptyEmail)]
    #[case("a@b.c", "", AuthValidationError::EmptyPassword)]
    fn invalid_login_inputs(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn login_body_carries_trimmed_email_and_raw_password() {
        let creds = LoginCredentials::try_from_parts("  a@b.c ", " pw ").expect("valid");
        assert_eq!(
            creds.to_body(),
            serde_json::json!({ "email": "a@b.c", "password": " pw " })
        );
        assert_eq!(creds.password(), " pw ");
    }

    #[rstest]
    #[case(" ", "a@b.c", "pw", AuthValidationError::EmptyUsername)]
    #[case("maker", "", "pw", AuthValidationError::EmptyEmail)]
    #[case("maker", "a@b.c", "", AuthValidationError::EmptyPassword)]
    fn invalid_registration_inputs(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: AuthValidationError,
    ) {
        let err = Registration::try_from_parts(username, email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn registration_body_lists_all_fields() {
        let registration =
            Registration::try_from_parts(" maker ", "a@b.c", "pw").expect("valid");
        assert_eq!(registration.username(), "maker");
        assert_eq!(registration.to_body()["username"], "maker");
        assert_eq!(registration.to_body()["password"], "pw");
    }

    #[test]
    fn session_decodes_user_and_token() {
        let session: AuthSession = serde_json::from_value(serde_json::json!({
            "token": "jwt",
            "user": {
                "id": "1",
                "username": "maker",
                "email": "a@b.c",
                "followersCount": 0,
                "followingCount": 0,
                "isBusinessAccount": false,
                "isVerified": false,
                "createdAt": "2026-01-01T00:00:00Z"
            }
        }))
        .expect("session decodes");
        assert_eq!(session.token, "jwt");
        assert_eq!(session.user.id, "1");
    }
}
