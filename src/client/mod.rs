//! Client layer: request dispatch with gateway fallback, plus the operation façade.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::domain::{ApiKey, Email, Signature, ValidationError};
use crate::transport::{self, DEFAULT_GATEWAYS, EnvelopeError, Selector};

mod account;
mod directory;
mod messaging;
#[cfg(test)]
mod testing;

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("smsaero-rust/", env!("CARGO_PKG_VERSION"));

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a Url,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url.clone())
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials embedded in every request URL.
pub struct Credentials {
    email: Email,
    api_key: ApiKey,
}

impl Credentials {
    /// Validate that both the email and the API key are non-empty.
    pub fn new(
        email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            email: Email::new(email)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsAeroClient`].
///
/// Every operation yields exactly one of these or a successful body; API-level
/// failures never panic.
pub enum SmsAeroError {
    /// An argument was missing or malformed; nothing was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A configured gateway could not be turned into a request URL.
    #[error("invalid gateway {gateway:?}: {source}")]
    InvalidGateway {
        gateway: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The HTTP client could not be constructed.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Every gateway failed or answered with an unrecognized HTTP status.
    #[error("no gateway reachable after {attempts} attempt(s){}", fmt_last_error(.last_error))]
    Connection {
        attempts: usize,
        last_error: Option<String>,
    },

    /// A gateway answered, but the body was not JSON.
    #[error("malformed response (HTTP {status}): {source}")]
    MalformedResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The account has no credits left (`result: "no credits"`).
    #[error("insufficient balance")]
    InsufficientBalance,

    /// The request was refused (`result: "reject"`).
    #[error("request rejected: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { reason: Option<String> },

    /// The API reported `success != true`.
    #[error("API error: {message}")]
    Api { message: String },
}

fn fmt_last_error(last_error: &Option<String>) -> String {
    last_error
        .as_deref()
        .map(|err| format!(" (last error: {err})"))
        .unwrap_or_default()
}

impl SmsAeroError {
    fn invalid_gateway(gateway: &str, source: transport::GatewayError) -> Self {
        Self::InvalidGateway {
            gateway: gateway.to_owned(),
            source: Box::new(source),
        }
    }

    fn from_envelope(status: u16, err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Json(source) => Self::MalformedResponse { status, source },
            EnvelopeError::NoCredits => Self::InsufficientBalance,
            EnvelopeError::Rejected { reason } => Self::Rejected { reason },
            EnvelopeError::Api { message } => Self::Api { message },
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsAeroClient`].
pub struct SmsAeroClientBuilder {
    credentials: Credentials,
    signature: Signature,
    timeout: Duration,
    gateways: Vec<String>,
    user_agent: String,
    test_mode: bool,
    logging: bool,
}

impl SmsAeroClientBuilder {
    /// Create a builder with the default gateways, signature and timeout.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            signature: Signature::default(),
            timeout: DEFAULT_TIMEOUT,
            gateways: DEFAULT_GATEWAYS.iter().map(|&g| g.to_owned()).collect(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            test_mode: false,
            logging: false,
        }
    }

    /// Default signature; characters outside `[A-Za-z0-9_ -]` are dropped.
    ///
    /// Falls back to [`Signature::DEFAULT`] if nothing is left.
    pub fn signature(mut self, signature: impl AsRef<str>) -> Self {
        self.signature = Signature::non_empty(signature).unwrap_or_default();
        self
    }

    /// Timeout applied to each gateway attempt.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use only this gateway instead of the fallback list.
    ///
    /// Accepts a fragment such as `gate.smsaero.ru/v2/` (https is assumed) or a full URL.
    pub fn gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateways = vec![gateway.into()];
        self
    }

    /// Replace the fallback list; gateways are tried in the given order.
    pub fn gateways<I, S>(mut self, gateways: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gateways = gateways.into_iter().map(Into::into).collect();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Route SMS operations to the sandbox endpoints.
    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.test_mode = enabled;
        self
    }

    /// Emit `tracing` events for every request and response.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Build a [`SmsAeroClient`].
    pub fn build(self) -> Result<SmsAeroClient, SmsAeroError> {
        if self.gateways.is_empty() {
            return Err(SmsAeroError::InvalidGateway {
                gateway: String::new(),
                source: "no gateways configured".into(),
            });
        }
        let gateways = self
            .gateways
            .iter()
            .map(|gateway| {
                transport::parse_gateway(gateway)
                    .map_err(|err| SmsAeroError::invalid_gateway(gateway, err))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|err| SmsAeroError::Transport(Box::new(err)))?;

        Ok(SmsAeroClient {
            credentials: self.credentials,
            signature: self.signature,
            gateways,
            test_mode: self.test_mode,
            logging: self.logging,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level SMS Aero client.
///
/// Every operation validates its arguments, builds a JSON body and posts it to
/// the first gateway that answers with a recognized HTTP status. Gateways are
/// tried one at a time, in order:
/// - `https://gate.smsaero.ru/v2/`
/// - `https://gate.smsaero.org/v2/`
/// - `https://gate.smsaero.net/v2/`
///
/// On success the whole response envelope is returned; the payload is under `data`.
pub struct SmsAeroClient {
    credentials: Credentials,
    signature: Signature,
    gateways: Vec<Url>,
    test_mode: bool,
    logging: bool,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for SmsAeroClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsAeroClient")
            .field("credentials", &self.credentials)
            .field("signature", &self.signature)
            .field("gateways", &self.gateways)
            .field("test_mode", &self.test_mode)
            .field("logging", &self.logging)
            .finish_non_exhaustive()
    }
}

impl SmsAeroClient {
    /// Create a client with every default.
    ///
    /// For more customization, use [`SmsAeroClient::builder`].
    pub fn new(credentials: Credentials) -> Result<Self, SmsAeroError> {
        SmsAeroClientBuilder::new(credentials).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsAeroClientBuilder {
        SmsAeroClientBuilder::new(credentials)
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    /// Toggle the sandbox endpoints for subsequent calls.
    pub fn set_test_mode(&mut self, enabled: bool) {
        self.test_mode = enabled;
    }

    pub fn logging(&self) -> bool {
        self.logging
    }

    /// Toggle request/response logging for subsequent calls.
    pub fn set_logging(&mut self, enabled: bool) {
        self.logging = enabled;
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Replace the default signature; it is sanitized like the builder value.
    pub fn set_signature(&mut self, signature: impl AsRef<str>) {
        self.signature = Signature::non_empty(signature).unwrap_or_default();
    }

    /// Gateways in the order they are tried.
    pub fn gateways(&self) -> &[Url] {
        &self.gateways
    }

    /// Post `body` to `selector`, falling back across gateways.
    ///
    /// A gateway that answers with 200, 400, 401, 402, 403, 404 or 500 ends the
    /// search and its body is interpreted, even when the status is an error. Any
    /// other status, or a transport failure, moves on to the next gateway.
    ///
    /// Errors:
    /// - [`SmsAeroError::Connection`] when no gateway answered,
    /// - [`SmsAeroError::MalformedResponse`] for a non-JSON body,
    /// - [`SmsAeroError::InsufficientBalance`], [`SmsAeroError::Rejected`] and
    ///   [`SmsAeroError::Api`] for the corresponding envelope contents.
    pub async fn send_request<B>(
        &self,
        selector: Selector,
        body: &B,
        page: Option<u32>,
    ) -> Result<Value, SmsAeroError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body).map_err(SmsAeroError::Encode)?;
        let mut last_error = None;

        for gateway in &self.gateways {
            let url = transport::endpoint_url(
                gateway,
                &self.credentials.email,
                &self.credentials.api_key,
                selector,
                page,
            )
            .map_err(|err| SmsAeroError::invalid_gateway(gateway.as_str(), err))?;

            if self.logging {
                info!(url = %transport::redact_url(&url), body = %body, "sending request");
            }

            match self.http.post_json(&url, body.clone()).await {
                Ok(response) if transport::is_reachable(response.status) => {
                    if self.logging {
                        info!(status = response.status, body = %response.body, "received response");
                    }
                    return transport::decode_envelope(&response.body)
                        .map_err(|err| SmsAeroError::from_envelope(response.status, err));
                }
                Ok(response) => {
                    if self.logging {
                        warn!(
                            gateway = %gateway,
                            status = response.status,
                            "gateway returned unexpected status, trying next"
                        );
                    }
                    last_error = Some(format!("unexpected HTTP status {}", response.status));
                }
                Err(err) => {
                    if self.logging {
                        warn!(gateway = %gateway, error = %err, "gateway unreachable, trying next");
                    }
                    last_error = Some(err.to_string());
                }
            }
        }

        Err(SmsAeroError::Connection {
            attempts: self.gateways.len(),
            last_error,
        })
    }
}
