use url::{Url, form_urlencoded};

use crate::domain::{ApiKey, Email};
use crate::transport::Selector;

/// Fallback gateways, tried in order when no override is configured.
pub const DEFAULT_GATEWAYS: [&str; 3] = [
    "gate.smsaero.ru/v2/",
    "gate.smsaero.org/v2/",
    "gate.smsaero.net/v2/",
];

/// HTTP statuses that mean "the gateway answered": stop trying other gateways and
/// interpret the body, even for client or server errors.
pub const REACHABLE_STATUSES: [u16; 7] = [200, 400, 401, 402, 403, 404, 500];

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("unsupported scheme: {scheme}")]
    UnsupportedScheme { scheme: String },

    #[error("URL has no host")]
    MissingHost,

    #[error("URL cannot carry credentials")]
    Credentials,
}

pub fn is_reachable(status: u16) -> bool {
    REACHABLE_STATUSES.contains(&status)
}

/// Normalize a gateway fragment (`gate.smsaero.ru/v2/`) or full URL into a base URL.
///
/// A missing scheme defaults to `https`, and the path always ends with `/` so that
/// selectors resolve beneath it.
pub fn parse_gateway(input: &str) -> Result<Url, GatewayError> {
    let trimmed = input.trim();
    let mut candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };
    if !candidate.ends_with('/') {
        candidate.push('/');
    }

    let url = Url::parse(&candidate)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(GatewayError::UnsupportedScheme {
            scheme: url.scheme().to_owned(),
        });
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(GatewayError::MissingHost);
    }
    Ok(url)
}

/// Percent-encode an email for URL userinfo, `application/x-www-form-urlencoded` style
/// (`@` → `%40`, `+` → `%2B`).
pub fn encode_email(email: &str) -> String {
    form_urlencoded::byte_serialize(email.as_bytes()).collect()
}

/// Build `{scheme}://{email}:{api_key}@{gateway}{selector}[?page=N]`.
pub fn endpoint_url(
    gateway: &Url,
    email: &Email,
    api_key: &ApiKey,
    selector: Selector,
    page: Option<u32>,
) -> Result<Url, GatewayError> {
    let mut url = gateway.join(selector.path())?;
    url.set_username(&encode_email(email.as_str()))
        .and_then(|()| url.set_password(Some(api_key.as_str())))
        .map_err(|()| GatewayError::Credentials)?;
    if let Some(page) = page.filter(|page| *page > 0) {
        url.query_pairs_mut().append_pair("page", &page.to_string());
    }
    Ok(url)
}

/// Render `url` for logs with the password masked.
pub fn redact_url(url: &Url) -> String {
    let mut redacted = url.clone();
    if redacted.password().is_some() && redacted.set_password(Some("***")).is_err() {
        return format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
    }
    redacted.to_string()
}
