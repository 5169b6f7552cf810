//! Contact book: groups, contacts and the blacklist.

use serde_json::Value;

use super::{SmsAeroClient, SmsAeroError};
use crate::domain::{
    BlacklistFilter, ContactFields, ContactFilter, Numeric, ToNumeric, require_non_empty,
};
use crate::transport::{
    BlacklistListBody, ContactAddBody, ContactListBody, EmptyBody, GroupAddBody, IdBody,
    NumberBody, Selector,
};

impl SmsAeroClient {
    /// Create a contact group.
    pub async fn group_add(&self, name: &str) -> Result<Value, SmsAeroError> {
        let name = require_non_empty(Some(name), "name")?;
        self.send_request(Selector::GroupAdd, &GroupAddBody { name }, None)
            .await
    }

    pub async fn group_delete(&self, group_id: &str) -> Result<Value, SmsAeroError> {
        let id = Numeric::new(group_id, "group_id")?;
        self.send_request(Selector::GroupDelete, &IdBody { id }, None)
            .await
    }

    /// Delete every group on the account.
    pub async fn group_delete_all(&self) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::GroupDeleteAll, &EmptyBody {}, None)
            .await
    }

    pub async fn group_list(&self, page: Option<u32>) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::GroupList, &EmptyBody {}, page)
            .await
    }

    /// Add `number` to the contact book, optionally into a group.
    pub async fn contact_add(
        &self,
        number: impl ToNumeric,
        fields: &ContactFields,
    ) -> Result<Value, SmsAeroError> {
        let number = number.to_numeric("number")?;
        let group_id = Numeric::optional(fields.group_id.as_deref(), "group_id")?;

        let body = ContactAddBody::new(number, group_id, fields);
        self.send_request(Selector::ContactAdd, &body, None).await
    }

    pub async fn contact_delete(&self, contact_id: &str) -> Result<Value, SmsAeroError> {
        let id = Numeric::new(contact_id, "contact_id")?;
        self.send_request(Selector::ContactDelete, &IdBody { id }, None)
            .await
    }

    /// Delete every contact on the account.
    pub async fn contact_delete_all(&self) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::ContactDeleteAll, &EmptyBody {}, None)
            .await
    }

    /// List contacts matching `filter`; every filter field is optional.
    pub async fn contact_list(&self, filter: &ContactFilter) -> Result<Value, SmsAeroError> {
        let number = Numeric::optional(filter.number.as_deref(), "number")?;
        let group_id = Numeric::optional(filter.group_id.as_deref(), "group_id")?;

        let body = ContactListBody::new(number, group_id, filter);
        self.send_request(Selector::ContactList, &body, filter.page)
            .await
    }

    /// Block delivery to `number`.
    pub async fn blacklist_add(&self, number: impl ToNumeric) -> Result<Value, SmsAeroError> {
        let number = number.to_numeric("number")?;
        self.send_request(Selector::BlacklistAdd, &NumberBody { number }, None)
            .await
    }

    pub async fn blacklist_list(&self, filter: &BlacklistFilter) -> Result<Value, SmsAeroError> {
        let body = BlacklistListBody {
            number: Numeric::optional(filter.number.as_deref(), "number")?,
        };
        self.send_request(Selector::BlacklistList, &body, filter.page)
            .await
    }

    pub async fn blacklist_delete(&self, blacklist_id: &str) -> Result<Value, SmsAeroError> {
        let id = Numeric::new(blacklist_id, "blacklist_id")?;
        self.send_request(Selector::BlacklistDelete, &IdBody { id }, None)
            .await
    }
}
