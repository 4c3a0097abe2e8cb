//! Login credential type.
//!
//! StoreRate is a demo application: credentials are stored and compared as
//! opaque strings, with no hashing. The type still enforces the signup
//! form's strength rules so that every persisted credential is well-formed.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of characters that count as "special" for credential rules.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Errors that can occur when parsing a [`Credential`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CredentialError {
    /// The input length is outside the allowed range.
    #[error("credential must be {min} to {max} characters")]
    WrongLength {
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// The input has no ASCII uppercase letter.
    #[error("credential must contain at least one uppercase letter")]
    MissingUppercase,
    /// The input has no character from [`SPECIAL_CHARACTERS`].
    #[error("credential must contain at least one special character ({SPECIAL_CHARACTERS})")]
    MissingSpecialCharacter,
}

/// A validated login credential.
///
/// ## Constraints
///
/// - Length: 8-16 characters
/// - At least one ASCII uppercase letter
/// - At least one character from the fixed special set
///   `!@#$%^&*(),.?":{}|<>`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Minimum credential length.
    pub const MIN_LENGTH: usize = 8;
    /// Maximum credential length.
    pub const MAX_LENGTH: usize = 16;

    /// Parse a `Credential` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is shorter than 8 or longer than 16
    /// characters, has no uppercase letter, or has no special character.
    pub fn parse(s: &str) -> Result<Self, CredentialError> {
        let length = s.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(CredentialError::WrongLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }

        if !s.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(CredentialError::MissingUppercase);
        }

        if !s.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            return Err(CredentialError::MissingSpecialCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the credential as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact opaque-string comparison against a submitted credential.
    #[must_use]
    pub fn matches(&self, submitted: &str) -> bool {
        self.0 == submitted
    }
}

// Keep credentials out of log output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

impl std::str::FromStr for Credential {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_credentials() {
        assert!(Credential::parse("Abc12345!").is_ok());
        assert!(Credential::parse("Admin123!").is_ok());
        assert!(Credential::parse("P@ssword").is_ok());
        assert!(Credential::parse("Sixteen.Chars!!!").is_ok());
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            Credential::parse("Ab1!"),
            Err(CredentialError::WrongLength { min: 8, max: 16 })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            Credential::parse("Abcdefgh12345678!"),
            Err(CredentialError::WrongLength { min: 8, max: 16 })
        ));
    }

    #[test]
    fn test_parse_missing_uppercase() {
        assert!(matches!(
            Credential::parse("abc12345!"),
            Err(CredentialError::MissingUppercase)
        ));
    }

    #[test]
    fn test_parse_missing_special() {
        assert!(matches!(
            Credential::parse("Abc123456"),
            Err(CredentialError::MissingSpecialCharacter)
        ));
    }

    #[test]
    fn test_matches_is_exact() {
        let credential = Credential::parse("Abc12345!").unwrap();
        assert!(credential.matches("Abc12345!"));
        assert!(!credential.matches("abc12345!"));
        assert!(!credential.matches("Abc12345?"));
    }

    #[test]
    fn test_debug_redacts() {
        let credential = Credential::parse("Abc12345!").unwrap();
        let debug = format!("{credential:?}");
        assert!(!debug.contains("Abc12345"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let credential = Credential::parse("Abc12345!").unwrap();
        let json = serde_json::to_string(&credential).unwrap();
        assert_eq!(json, "\"Abc12345!\"");

        let parsed: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, credential);
    }
}
