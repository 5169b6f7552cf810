//! SMS sending, delivery status and number lookups.

use serde_json::Value;

use super::{SmsAeroClient, SmsAeroError};
use crate::domain::{Numeric, SendSmsOptions, SmsListFilter, ToNumeric, require_non_empty};
use crate::transport::{IdBody, NumberBody, Selector, SendSmsBody, SmsListBody, non_blank};

impl SmsAeroClient {
    /// Send one SMS to `phone`: digits only (e.g. `79001234567`) or a parsed
    /// [`PhoneNumber`](crate::PhoneNumber).
    ///
    /// Uses `sms/testsend` instead of `sms/send` while test mode is on. The message
    /// is signed with `options.sign` when given, otherwise with the client default.
    ///
    /// Errors:
    /// - [`SmsAeroError::Validation`] when `phone` is not numeric or `text` is empty,
    /// - any dispatch error from [`SmsAeroClient::send_request`].
    pub async fn send_sms(
        &self,
        phone: impl ToNumeric,
        text: &str,
        options: &SendSmsOptions,
    ) -> Result<Value, SmsAeroError> {
        let number = phone.to_numeric("phone")?;
        require_non_empty(Some(text), "text")?;

        let body = SendSmsBody::new(number, text, &self.signature, options);
        self.send_request(Selector::sms_send(self.test_mode), &body, None)
            .await
    }

    /// Delivery status of a sent message.
    pub async fn sms_status(&self, sms_id: &str) -> Result<Value, SmsAeroError> {
        let id = Numeric::new(sms_id, "sms_id")?;
        self.send_request(Selector::sms_status(self.test_mode), &IdBody { id }, None)
            .await
    }

    /// List sent messages, optionally filtered by recipient and text.
    pub async fn sms_list(&self, filter: &SmsListFilter) -> Result<Value, SmsAeroError> {
        let body = SmsListBody {
            number: Numeric::optional(filter.phone.as_deref(), "phone")?,
            text: non_blank(&filter.text),
        };
        self.send_request(Selector::sms_list(self.test_mode), &body, filter.page)
            .await
    }

    /// Start an HLR lookup for `number`.
    pub async fn hlr_check(&self, number: impl ToNumeric) -> Result<Value, SmsAeroError> {
        let number = number.to_numeric("number")?;
        self.send_request(Selector::HlrCheck, &NumberBody { number }, None)
            .await
    }

    /// Result of an HLR lookup started by [`SmsAeroClient::hlr_check`].
    pub async fn hlr_status(&self, hlr_id: &str) -> Result<Value, SmsAeroError> {
        let id = Numeric::new(hlr_id, "hlr_id")?;
        self.send_request(Selector::HlrStatus, &IdBody { id }, None)
            .await
    }

    /// Mobile operator serving `phone`.
    pub async fn number_operator(&self, phone: impl ToNumeric) -> Result<Value, SmsAeroError> {
        let number = phone.to_numeric("phone")?;
        self.send_request(Selector::NumberOperator, &NumberBody { number }, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{FakeReply, FakeTransport, make_client, selector_of};
    use super::*;
    use crate::domain::{PhoneNumber, SendDate, ValidationError};

    const OK: &str = r#"{"success":true,"data":{"id":1}}"#;

    #[tokio::test]
    async fn send_sms_posts_body_to_send_selector() {
        let transport = FakeTransport::ok(OK);
        let client = make_client(transport.clone());

        let response = client
            .send_sms("70000000000", "hello", &SendSmsOptions::default())
            .await
            .unwrap();
        assert_eq!(response["data"]["id"], 1);

        let (url, body) = transport.last_request().unwrap();
        assert_eq!(selector_of(&url), "sms/send");
        assert_eq!(body, r#"{"number":70000000000,"text":"hello","sign":"Sms Aero"}"#);
    }

    #[tokio::test]
    async fn send_sms_escapes_quotes_and_omits_absent_options() {
        let transport = FakeTransport::ok(OK);
        let client = make_client(transport.clone());

        client
            .send_sms("70000000000", r#"He said "hi""#, &SendSmsOptions::default())
            .await
            .unwrap();

        let (_, body) = transport.last_request().unwrap();
        assert!(body.contains(r#"He said \"hi\""#), "{body}");
        assert!(!body.contains("dateSend"));
        assert!(!body.contains("callbackUrl"));
    }

    #[tokio::test]
    async fn send_sms_embeds_parsed_send_date() {
        let transport = FakeTransport::ok(OK);
        let client = make_client(transport.clone());
        let options = SendSmsOptions {
            date_to_send: Some(SendDate::parse("2024-05-01 12:30:00").unwrap()),
            callback_url: Some("https://example.com/cb".to_owned()),
            ..Default::default()
        };

        client.send_sms("70000000000", "later", &options).await.unwrap();

        let (_, body) = transport.last_request().unwrap();
        assert!(body.contains(r#""dateSend":1714566600"#), "{body}");
        assert!(body.contains(r#""callbackUrl":"https://example.com/cb""#), "{body}");
    }

    #[tokio::test]
    async fn test_mode_toggle_switches_sms_selectors() {
        let transport = FakeTransport::new(vec![
            FakeReply::Status(200, OK),
            FakeReply::Status(200, OK),
            FakeReply::Status(200, OK),
            FakeReply::Status(200, OK),
        ]);
        let mut client = make_client(transport.clone());
        let options = SendSmsOptions::default();

        client.set_test_mode(true);
        client.send_sms("70000000000", "hi", &options).await.unwrap();
        assert_eq!(selector_of(&transport.last_request().unwrap().0), "sms/testsend");

        client.sms_status("5").await.unwrap();
        assert_eq!(selector_of(&transport.last_request().unwrap().0), "sms/teststatus");

        client.sms_list(&SmsListFilter::default()).await.unwrap();
        assert_eq!(selector_of(&transport.last_request().unwrap().0), "sms/testlist");

        client.set_test_mode(false);
        client.send_sms("70000000000", "hi", &options).await.unwrap();
        assert_eq!(selector_of(&transport.last_request().unwrap().0), "sms/send");
    }

    #[tokio::test]
    async fn send_sms_validates_before_network() {
        let transport = FakeTransport::ok(OK);
        let client = make_client(transport.clone());
        let options = SendSmsOptions::default();

        for (phone, text, expected) in [
            ("", "hi", ValidationError::Required { field: "phone" }),
            ("12a", "hi", ValidationError::NotNumeric { field: "phone" }),
            ("70000000000", "  ", ValidationError::Required { field: "text" }),
        ] {
            let err = client.send_sms(phone, text, &options).await.unwrap_err();
            match err {
                SmsAeroError::Validation(err) => assert_eq!(err, expected),
                other => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn sms_list_sends_filters_and_page() {
        let transport = FakeTransport::ok(OK);
        let client = make_client(transport.clone());
        let filter = SmsListFilter {
            phone: Some("70000000000".to_owned()),
            text: Some("promo".to_owned()),
            page: Some(2),
        };

        client.sms_list(&filter).await.unwrap();

        let (url, body) = transport.last_request().unwrap();
        assert_eq!(selector_of(&url), "sms/list?page=2");
        assert_eq!(body, r#"{"number":70000000000,"text":"promo"}"#);
    }

    #[tokio::test]
    async fn lookups_use_expected_selectors_and_bodies() {
        let transport = FakeTransport::new(vec![
            FakeReply::Status(200, OK),
            FakeReply::Status(200, OK),
            FakeReply::Status(200, OK),
        ]);
        let client = make_client(transport.clone());

        client.hlr_check("70000000000").await.unwrap();
        let (url, body) = transport.last_request().unwrap();
        assert_eq!(selector_of(&url), "hlr/check");
        assert_eq!(body, r#"{"number":70000000000}"#);

        client.hlr_status("12").await.unwrap();
        let (url, body) = transport.last_request().unwrap();
        assert_eq!(selector_of(&url), "hlr/status");
        assert_eq!(body, r#"{"id":12}"#);

        client.number_operator("70000000000").await.unwrap();
        let (url, body) = transport.last_request().unwrap();
        assert_eq!(selector_of(&url), "number/operator");
        assert_eq!(body, r#"{"number":70000000000}"#);
    }

    #[tokio::test]
    async fn phone_taking_operations_accept_parsed_numbers() {
        let transport = FakeTransport::new(vec![
            FakeReply::Status(200, OK),
            FakeReply::Status(200, OK),
            FakeReply::Status(200, OK),
        ]);
        let client = make_client(transport.clone());
        let phone = PhoneNumber::parse(None, "+7 (925) 123-45-67").unwrap();

        client
            .send_sms(&phone, "hi", &SendSmsOptions::default())
            .await
            .unwrap();
        let (_, body) = transport.last_request().unwrap();
        assert!(body.starts_with(r#"{"number":79251234567,"#), "{body}");

        client.hlr_check(&phone).await.unwrap();
        let (_, body) = transport.last_request().unwrap();
        assert_eq!(body, r#"{"number":79251234567}"#);

        let owned = String::from("79251234567");
        client.number_operator(&owned).await.unwrap();
        let (_, body) = transport.last_request().unwrap();
        assert_eq!(body, r#"{"number":79251234567}"#);
    }

    #[tokio::test]
    async fn unusable_sign_override_keeps_client_signature() {
        let transport = FakeTransport::ok(OK);
        let client = make_client(transport.clone());
        let options = SendSmsOptions {
            sign: Some("!!!".to_owned()),
            ..Default::default()
        };

        client.send_sms("70000000000", "hi", &options).await.unwrap();

        let (_, body) = transport.last_request().unwrap();
        assert!(body.ends_with(r#""sign":"Sms Aero"}"#), "{body}");
    }

    #[tokio::test]
    async fn numeric_ids_are_validated() {
        let transport = FakeTransport::ok(OK);
        let client = make_client(transport.clone());

        assert!(matches!(
            client.sms_status("abc").await,
            Err(SmsAeroError::Validation(ValidationError::NotNumeric { field: "sms_id" }))
        ));
        assert!(matches!(
            client.hlr_status("").await,
            Err(SmsAeroError::Validation(ValidationError::Required { field: "hlr_id" }))
        ));
        assert!(matches!(
            client.hlr_check("+7900").await,
            Err(SmsAeroError::Validation(ValidationError::NotNumeric { field: "number" }))
        ));
        assert_eq!(transport.request_count(), 0);
    }
}
