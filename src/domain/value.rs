use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use phonenumber::country;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::domain::validation::{ValidationError, require_non_empty, require_numeric};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS Aero account email, used as the URL-embedded username.
///
/// Invariant: non-empty after trimming.
pub struct Email(String);

impl Email {
    pub const FIELD: &'static str = "email";

    /// Create a validated [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = require_non_empty(Some(value.as_str()), Self::FIELD)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated email.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS Aero API key, used as the URL-embedded password.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = require_non_empty(Some(value.as_str()), Self::FIELD)?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Sender signature (`sign`).
///
/// Every character outside `[A-Za-z0-9_ -]` is stripped on construction.
/// The result may be empty if nothing survives.
pub struct Signature(String);

impl Signature {
    pub const FIELD: &'static str = "sign";

    /// Default signature used when none is configured.
    pub const DEFAULT: &'static str = "Sms Aero";

    /// Sanitize `value` into a signature.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(sanitize_signature(value.as_ref()))
    }

    /// Sanitize `value`, or `None` if nothing is left.
    pub fn non_empty(value: impl AsRef<str>) -> Option<Self> {
        Some(Self::new(value)).filter(|signature| !signature.0.is_empty())
    }

    /// Borrow the sanitized signature.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

/// Strip every character outside `[A-Za-z0-9_ -]`.
pub fn sanitize_signature(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ' ' | '-'))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Digits-only value (phone number or numeric id).
///
/// The validated digits are kept verbatim. They go on the wire as a JSON number
/// unless a leading zero would make that invalid JSON, in which case they are quoted.
///
/// Invariant: matches `^[0-9]+$`.
pub struct Numeric(String);

impl Numeric {
    /// Validate `value` as the numeric field `field`.
    pub fn new(value: &str, field: &'static str) -> Result<Self, ValidationError> {
        require_numeric(Some(value), field).map(|digits| Self(digits.to_owned()))
    }

    /// Validate an optional numeric field; blank input counts as absent.
    pub fn optional(
        value: Option<&str>,
        field: &'static str,
    ) -> Result<Option<Self>, ValidationError> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Self::new(v, field).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_json_number(&self) -> bool {
        self.0 == "0" || !self.0.starts_with('0')
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_json_number() {
            RawValue::from_string(self.0.clone())
                .map_err(S::Error::custom)?
                .serialize(serializer)
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

/// Anything an operation accepts where a phone number or numeric id is expected.
///
/// Implemented for plain strings, which must already be digits only, and for
/// [`PhoneNumber`], whose E.164 digits are used.
pub trait ToNumeric {
    fn to_numeric(&self, field: &'static str) -> Result<Numeric, ValidationError>;
}

impl ToNumeric for str {
    fn to_numeric(&self, field: &'static str) -> Result<Numeric, ValidationError> {
        Numeric::new(self, field)
    }
}

impl ToNumeric for String {
    fn to_numeric(&self, field: &'static str) -> Result<Numeric, ValidationError> {
        Numeric::new(self, field)
    }
}

impl ToNumeric for Numeric {
    fn to_numeric(&self, _field: &'static str) -> Result<Numeric, ValidationError> {
        Ok(self.clone())
    }
}

impl ToNumeric for PhoneNumber {
    fn to_numeric(&self, field: &'static str) -> Result<Numeric, ValidationError> {
        Numeric::new(self.digits(), field)
    }
}

impl<T: ToNumeric + ?Sized> ToNumeric for &T {
    fn to_numeric(&self, field: &'static str) -> Result<Numeric, ValidationError> {
        (**self).to_numeric(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number normalized to E.164.
pub struct PhoneNumber {
    e164: String,
}

impl PhoneNumber {
    pub const FIELD: &'static str = "number";

    /// Parse a human-formatted phone number such as `+7 (925) 123-45-67`.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let trimmed = require_non_empty(Some(input.as_str()), Self::FIELD)?;

        let parsed = phonenumber::parse(default_region, trimmed).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            }
        })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { e164 })
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// E.164 digits without `+`, the form SMS Aero expects.
    pub fn digits(&self) -> &str {
        self.e164.trim_start_matches('+')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
/// Scheduled send time as a Unix timestamp in seconds (`dateSend`).
pub struct SendDate(i64);

impl SendDate {
    pub const FIELD: &'static str = "dateSend";

    const NAIVE_FORMATS: [&'static str; 5] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%d.%m.%Y %H:%M",
    ];

    /// Use a Unix timestamp as-is.
    pub fn from_timestamp(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Parse a human-readable date.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]`,
    /// `DD.MM.YYYY HH:MM`, `YYYY-MM-DD` (midnight) or a bare timestamp.
    /// Inputs without an offset are read as UTC.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let invalid = || ValidationError::InvalidDate {
            input: input.to_owned(),
        };
        if trimmed.is_empty() {
            return Err(invalid());
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed.parse::<i64>().map(Self).map_err(|_| invalid());
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.into());
        }

        for format in Self::NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(naive.and_utc().timestamp()));
            }
        }

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc().timestamp()))
            .ok_or_else(invalid)
    }

    pub fn timestamp(self) -> i64 {
        self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SendDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self(value.timestamp())
    }
}
