//! Account-level calls: credentials check, balance, cards, tariffs and signatures.

use serde_json::Value;

use super::{SmsAeroClient, SmsAeroError};
use crate::transport::{EmptyBody, Selector};

impl SmsAeroClient {
    /// Check that the configured email and API key are accepted.
    pub async fn check_auth(&self) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::Auth, &EmptyBody {}, None).await
    }

    pub async fn balance(&self) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::Balance, &EmptyBody {}, None)
            .await
    }

    /// Payment cards attached to the account.
    pub async fn cards(&self) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::Cards, &EmptyBody {}, None).await
    }

    pub async fn tariffs(&self) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::Tariffs, &EmptyBody {}, None)
            .await
    }

    /// Approved sender signatures.
    pub async fn sign_list(&self, page: Option<u32>) -> Result<Value, SmsAeroError> {
        self.send_request(Selector::SignList, &EmptyBody {}, page)
            .await
    }
}
