use serde_json::Value;

/// `result` token reported when the account balance is exhausted.
pub const RESULT_NO_CREDITS: &str = "no credits";
/// `result` token reported when the request was refused.
pub const RESULT_REJECT: &str = "reject";

const DEFAULT_ERROR_MESSAGE: &str = "Unknown error";

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("insufficient balance")]
    NoCredits,

    #[error("request rejected: {reason:?}")]
    Rejected { reason: Option<String> },

    #[error("API error: {message}")]
    Api { message: String },
}

/// Interpret the vendor envelope `{result, success, message, data}`.
///
/// On success the whole parsed body is returned; callers pick `data` themselves.
pub fn decode_envelope(body: &str) -> Result<Value, EnvelopeError> {
    let parsed: Value = serde_json::from_str(body)?;

    match parsed.get("result").and_then(Value::as_str) {
        Some(RESULT_NO_CREDITS) => return Err(EnvelopeError::NoCredits),
        Some(RESULT_REJECT) => {
            return Err(EnvelopeError::Rejected {
                reason: reject_reason(&parsed),
            });
        }
        _ => {}
    }

    if parsed.get("success").and_then(Value::as_bool) != Some(true) {
        let message = parsed
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE)
            .to_owned();
        return Err(EnvelopeError::Api { message });
    }

    Ok(parsed)
}

// `reason` lives under `data` for most endpoints, at the top level for some.
fn reject_reason(parsed: &Value) -> Option<String> {
    parsed
        .get("data")
        .and_then(|data| data.get("reason"))
        .or_else(|| parsed.get("reason"))
        .and_then(|reason| match reason {
            Value::String(text) => Some(text.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
}
