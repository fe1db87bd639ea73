//! Credentials and TeleSign request signing.
//!
//! Every request carries an `Authorization: TSA <customer_id>:<signature>` header where
//! the signature is an HMAC-SHA256, keyed with the decoded secret, over a canonical
//! string built from the method, content type, `x-ts-*` headers, body and resource.

mod credentials;
mod error;
mod signer;

pub use credentials::{CUSTOMER_ID_ENV, Credentials, SECRET_KEY_ENV};
pub use error::{ConfigError, SigningError};
pub use signer::{
    AUTH_METHOD, CONTENT_TYPE, Clock, FixedClock, FixedNonce, METHOD, NonceSource, RequestSigner,
    SignedHeaders, SystemClock, UuidNonce, canonical_string, format_date,
};
