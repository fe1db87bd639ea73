//! TeleSign account credentials.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::signing::error::ConfigError;

/// Environment variable holding the customer id.
pub const CUSTOMER_ID_ENV: &str = "TELESIGN_CUSTOMER_ID";
/// Environment variable holding the base64 secret key.
pub const SECRET_KEY_ENV: &str = "TELESIGN_SECRET_KEY";

/// Standard alphabet, padding optional.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Customer id and decoded secret key used to sign every request.
///
/// The key is only reachable by the signer; `Debug` never prints it.
#[derive(Clone)]
pub struct Credentials {
    customer_id: String,
    secret_key: Vec<u8>,
}

impl Credentials {
    /// Create credentials from the customer id and the base64 secret key shown in the
    /// TeleSign portal.
    ///
    /// Whitespace inside the key (such as line breaks from a wrapping encoder) is ignored, and
    /// trailing `=` padding may be omitted.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if either value is empty or the key is not valid base64.
    pub fn new(
        customer_id: impl Into<String>,
        secret_key: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        let customer_id = customer_id.into().trim().to_owned();
        if customer_id.is_empty() {
            return Err(ConfigError::MissingCustomerId);
        }

        let compact: String = secret_key
            .as_ref()
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        if compact.is_empty() {
            return Err(ConfigError::MissingSecretKey);
        }
        let secret_key = KEY_ENGINE
            .decode(compact)
            .map_err(ConfigError::InvalidSecretKey)?;

        Ok(Self {
            customer_id,
            secret_key,
        })
    }

    /// Load credentials from `TELESIGN_CUSTOMER_ID` and `TELESIGN_SECRET_KEY`.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingEnvVar`] if either variable is not set, otherwise the
    /// same errors as [`Credentials::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let customer_id = std::env::var(CUSTOMER_ID_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(CUSTOMER_ID_ENV))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| ConfigError::MissingEnvVar(SECRET_KEY_ENV))?;
        Self::new(customer_id, secret_key)
    }

    /// The customer id (safe to log).
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub(crate) fn secret_key(&self) -> &[u8] {
        &self.secret_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_id", &self.customer_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_decodes_base64_key() {
        let creds = Credentials::new("custid", "c2VjcmV0").unwrap();
        assert_eq!(creds.customer_id(), "custid");
        assert_eq!(creds.secret_key(), b"secret");
    }

    #[test]
    fn new_ignores_line_breaks_in_key() {
        let creds = Credentials::new("custid", "c2Vj\ncmV0\n").unwrap();
        assert_eq!(creds.secret_key(), b"secret");
    }

    #[test]
    fn new_accepts_key_without_padding() {
        let unpadded = Credentials::new("custid", "c2VjcmU").unwrap();
        let padded = Credentials::new("custid", "c2VjcmU=").unwrap();
        assert_eq!(unpadded.secret_key(), b"secre");
        assert_eq!(padded.secret_key(), b"secre");
    }

    #[test]
    fn missing_values_are_configuration_errors() {
        assert!(matches!(
            Credentials::new("", "c2VjcmV0"),
            Err(ConfigError::MissingCustomerId)
        ));
        assert!(matches!(
            Credentials::new("  ", "c2VjcmV0"),
            Err(ConfigError::MissingCustomerId)
        ));
        assert!(matches!(
            Credentials::new("custid", ""),
            Err(ConfigError::MissingSecretKey)
        ));
        assert!(matches!(
            Credentials::new("custid", " \n"),
            Err(ConfigError::MissingSecretKey)
        ));
    }

    #[test]
    fn invalid_base64_key_is_rejected() {
        assert!(matches!(
            Credentials::new("custid", "not base64!"),
            Err(ConfigError::InvalidSecretKey(_))
        ));
    }

    #[test]
    fn debug_redacts_secret() {
        let creds = Credentials::new("custid", "c2VjcmV0").unwrap();
        let debug_str = format!("{creds:?}");

        assert!(debug_str.contains("custid"));
        assert!(!debug_str.contains("c2VjcmV0"));
        assert!(!debug_str.contains("secret\""));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
