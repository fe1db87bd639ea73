use thiserror::Error;

/// Errors raised while building a [`Credentials`](crate::Credentials) value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The customer id is empty.
    #[error("missing TeleSign customer id")]
    MissingCustomerId,

    /// The secret key is empty.
    #[error("missing TeleSign secret key")]
    MissingSecretKey,

    /// The secret key is not valid base64.
    #[error("TeleSign secret key is not valid base64: {0}")]
    InvalidSecretKey(#[source] base64::DecodeError),

    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),
}

/// Errors raised by [`RequestSigner::generate_headers`](crate::RequestSigner::generate_headers).
#[derive(Debug, Error)]
pub enum SigningError {
    /// A required signing input was empty.
    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },
}
