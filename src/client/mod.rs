//! Client layer: orchestrates signing, transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::redirect::Policy;

use crate::domain::{
    VERIFY_CALL_RESOURCE, VERIFY_SMS_RESOURCE, ValidationError, Verification, VerifyCall,
    VerifyCode, VerifySms,
};
use crate::signing::{
    Clock, ConfigError, Credentials, NonceSource, RequestSigner, SignedHeaders, SigningError,
};

const DEFAULT_ENDPOINT: &str = "https://rest.telesign.com";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a SignedHeaders,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: &'a str,
        headers: &'a SignedHeaders,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url).body(body);
            for (name, value) in headers.iter() {
                request = request.header(name, value);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`VerifyClient`].
///
/// Nothing is retried; every failure is handed straight back to the caller.
pub enum VerifyError {
    /// Credentials were missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A signing input was missing.
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by TeleSign.
    #[error("request failed: {status} {message:?}; response body: {body}")]
    Request {
        status: u16,
        /// Canonical reason phrase for `status`, empty if unknown.
        message: String,
        /// Parsed JSON body; a string if the body was not JSON, `null` if it was blank.
        body: serde_json::Value,
    },

    /// A successful response body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`VerifyClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or pin the
/// clock and nonce used for signing.
pub struct VerifyClientBuilder {
    signer: RequestSigner,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VerifyClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            signer: RequestSigner::new(credentials),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (resources such as `/v1/verify/sms` are appended to it).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_owned();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use `clock` for the `x-ts-date` header.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.signer = self.signer.with_clock(clock);
        self
    }

    /// Use `nonce_source` for the `x-ts-nonce` header.
    pub fn nonce_source(mut self, nonce_source: impl NonceSource + 'static) -> Self {
        self.signer = self.signer.with_nonce_source(nonce_source);
        self
    }

    /// Build a [`VerifyClient`].
    ///
    /// Redirects are never followed: a 3xx response is returned as [`VerifyError::Request`].
    pub fn build(self) -> Result<VerifyClient, VerifyError> {
        let mut builder = reqwest::Client::builder().redirect(Policy::none());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| VerifyError::Transport(Box::new(err)))?;

        Ok(VerifyClient {
            endpoint: self.endpoint,
            signer: self.signer,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level TeleSign Verify client.
///
/// Each call encodes the form parameters, signs them, POSTs them to
/// `https://rest.telesign.com` and returns the parsed JSON body together with the code
/// that was delivered.
pub struct VerifyClient {
    endpoint: String,
    signer: RequestSigner,
    http: Arc<dyn HttpTransport>,
}

impl VerifyClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`VerifyClient::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, VerifyError> {
        Self::builder(credentials).build()
    }

    /// Create a client with credentials from `TELESIGN_CUSTOMER_ID` and
    /// `TELESIGN_SECRET_KEY`.
    pub fn from_env() -> Result<Self, VerifyError> {
        Self::new(Credentials::from_env()?)
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> VerifyClientBuilder {
        VerifyClientBuilder::new(credentials)
    }

    /// The signer used for every request of this client.
    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Place a voice call that reads a verification code to the user.
    ///
    /// A random 5-digit code is generated when the request carries none.
    ///
    /// Errors:
    /// - [`VerifyError::Request`] for non-2xx HTTP responses,
    /// - [`VerifyError::Transport`] when the request could not be made,
    /// - [`VerifyError::Parse`] when a successful body is not JSON.
    pub async fn send_verification_call(
        &self,
        request: VerifyCall,
    ) -> Result<Verification, VerifyError> {
        let code = resolve_code(request.options().verify_code.as_ref());
        let params = crate::transport::encode_verify_call_form(&request, &code);
        let body = crate::transport::encode_form(&params);
        let data = self.api_request(VERIFY_CALL_RESOURCE, &body).await?;
        Ok(Verification { code, data })
    }

    /// Send an SMS carrying a verification code, optionally with a custom template.
    ///
    /// A random 5-digit code is generated when the request carries none.
    ///
    /// Errors: same as [`VerifyClient::send_verification_call`].
    pub async fn send_verification_sms(
        &self,
        request: VerifySms,
    ) -> Result<Verification, VerifyError> {
        let code = resolve_code(request.options().verify_code.as_ref());
        let params = crate::transport::encode_verify_sms_form(&request, &code);
        let body = crate::transport::encode_form(&params);
        let data = self.api_request(VERIFY_SMS_RESOURCE, &body).await?;
        Ok(Verification { code, data })
    }

    async fn api_request(
        &self,
        resource: &str,
        params: &str,
    ) -> Result<serde_json::Value, VerifyError> {
        let headers = self.signer.generate_headers(resource, params)?;
        let url = format!("{}{}", self.endpoint, resource);

        tracing::debug!(%url, nonce = headers.nonce(), "POST request");
        let response = self
            .http
            .post(&url, &headers, params.to_owned())
            .await
            .map_err(VerifyError::Transport)?;
        tracing::debug!(%url, status = response.status, "response received");

        if !(200..=299).contains(&response.status) {
            tracing::warn!(%url, status = response.status, "request rejected");
            return Err(VerifyError::Request {
                status: response.status,
                message: status_message(response.status),
                body: crate::transport::decode_error_body(&response.body),
            });
        }

        crate::transport::decode_json_response(&response.body)
            .map_err(|err| VerifyError::Parse(Box::new(err)))
    }
}

impl std::fmt::Debug for VerifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyClient")
            .field("endpoint", &self.endpoint)
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

fn resolve_code(code: Option<&VerifyCode>) -> VerifyCode {
    code.cloned().unwrap_or_else(VerifyCode::generate)
}

fn status_message(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
        .to_owned()
}
