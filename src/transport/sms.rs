use serde::Serialize;

use super::body::non_blank;
use crate::domain::{Numeric, SendDate, SendSmsOptions, Signature};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsBody<'a> {
    pub number: Numeric,
    pub text: &'a str,
    pub sign: Signature,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_send: Option<SendDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<&'a str>,
}

impl<'a> SendSmsBody<'a> {
    /// A per-message `sign` replaces `default_sign` unless sanitizing leaves nothing.
    pub fn new(
        number: Numeric,
        text: &'a str,
        default_sign: &Signature,
        options: &'a SendSmsOptions,
    ) -> Self {
        let sign = non_blank(&options.sign)
            .and_then(Signature::non_empty)
            .unwrap_or_else(|| default_sign.clone());
        Self {
            number,
            text,
            sign,
            date_send: options.date_to_send,
            callback_url: non_blank(&options.callback_url),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SmsListBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
}
