//! Bodies for the contact book: groups, contacts and the blacklist.

use serde::Serialize;

use super::body::non_blank;
use crate::domain::{ContactFields, ContactFilter, Numeric, Sex};

#[derive(Debug, Clone, Serialize)]
pub struct GroupAddBody<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAddBody<'a> {
    pub number: Numeric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param1: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param2: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param3: Option<&'a str>,
}

impl<'a> ContactAddBody<'a> {
    pub fn new(number: Numeric, group_id: Option<Numeric>, fields: &'a ContactFields) -> Self {
        Self {
            number,
            group_id,
            birthday: non_blank(&fields.birthday),
            sex: fields.sex,
            lname: non_blank(&fields.lname),
            fname: non_blank(&fields.fname),
            sname: non_blank(&fields.sname),
            param1: non_blank(&fields.param1),
            param2: non_blank(&fields.param2),
            param3: non_blank(&fields.param3),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fname: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sname: Option<&'a str>,
}

impl<'a> ContactListBody<'a> {
    pub fn new(
        number: Option<Numeric>,
        group_id: Option<Numeric>,
        filter: &'a ContactFilter,
    ) -> Self {
        Self {
            number,
            group_id,
            birthday: non_blank(&filter.birthday),
            sex: filter.sex,
            operator: non_blank(&filter.operator),
            lname: non_blank(&filter.lname),
            fname: non_blank(&filter.fname),
            sname: non_blank(&filter.sname),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlacklistListBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Numeric>,
}
