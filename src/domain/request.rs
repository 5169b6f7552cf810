use serde::Serialize;

use crate::domain::value::SendDate;

/// Optional parameters of `sms/send`.
///
/// Blank strings are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct SendSmsOptions {
    /// Per-message signature; sanitized like the client default and replacing it.
    pub sign: Option<String>,
    pub date_to_send: Option<SendDate>,
    pub callback_url: Option<String>,
}

/// Filter for `sms/list`.
#[derive(Debug, Clone, Default)]
pub struct SmsListFilter {
    pub phone: Option<String>,
    pub text: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Optional attributes of a new contact (`contact/add`).
#[derive(Debug, Clone, Default)]
pub struct ContactFields {
    pub group_id: Option<String>,
    pub birthday: Option<String>,
    pub sex: Option<Sex>,
    pub lname: Option<String>,
    pub fname: Option<String>,
    pub sname: Option<String>,
    pub param1: Option<String>,
    pub param2: Option<String>,
    pub param3: Option<String>,
}

/// Filter for `contact/list`.
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub number: Option<String>,
    pub group_id: Option<String>,
    pub birthday: Option<String>,
    pub sex: Option<Sex>,
    pub operator: Option<String>,
    pub lname: Option<String>,
    pub fname: Option<String>,
    pub sname: Option<String>,
    pub page: Option<u32>,
}

/// Filter for `blacklist/list`.
#[derive(Debug, Clone, Default)]
pub struct BlacklistFilter {
    pub number: Option<String>,
    pub page: Option<u32>,
}
