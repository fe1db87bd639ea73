//! Typed Rust client for the TeleSign Verify REST API.
//!
//! The crate is split the usual way: a domain layer of strong types, a signing layer
//! producing TeleSign's `TSA` HMAC-SHA256 authentication headers, a transport layer for
//! wire-format details, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use trust_me::{Credentials, RawPhoneNumber, VerifyClient, VerifyOptions, VerifySms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), trust_me::VerifyError> {
//!     let client = VerifyClient::new(Credentials::new("customer-id", "c2VjcmV0")?)?;
//!     let phone = RawPhoneNumber::new("15554443333")?;
//!     let request = VerifySms::new(phone, VerifyOptions::default());
//!     let verification = client.send_verification_sms(request).await?;
//!     println!("sent code {}", verification.code.as_str());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod signing;
mod transport;

pub use client::{VerifyClient, VerifyClientBuilder, VerifyError};
pub use domain::{
    Language, PhoneNumber, RawPhoneNumber, Template, UseCaseId, ValidationError, Verification,
    VerifyCall, VerifyCode, VerifyOptions, VerifySms,
};
pub use signing::{ConfigError, Credentials, RequestSigner, SignedHeaders, SigningError};
