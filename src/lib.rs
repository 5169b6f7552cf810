//! Typed Rust client for the SMS Aero HTTP API (v2).
//!
//! The crate has three layers: a domain layer of validated types, a transport
//! layer for wire-format details (gateway URLs, JSON bodies, the response
//! envelope), and a client layer that dispatches requests with gateway
//! fallback and exposes one method per API operation.
//!
//! ```rust,no_run
//! use smsaero::{Credentials, SendSmsOptions, SmsAeroClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsaero::SmsAeroError> {
//!     let client = SmsAeroClient::new(Credentials::new("you@example.com", "...")?)?;
//!     let response = client
//!         .send_sms("79001234567", "hello", &SendSmsOptions::default())
//!         .await?;
//!     println!("{}", response["data"]);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, SmsAeroClient, SmsAeroClientBuilder,
    SmsAeroError,
};
pub use domain::{
    ApiKey, BlacklistFilter, ContactFields, ContactFilter, Email, Numeric, PhoneNumber,
    SendDate, SendSmsOptions, Sex, Signature, SmsListFilter, ToNumeric, ValidationError,
};
pub use transport::{DEFAULT_GATEWAYS, Selector};
