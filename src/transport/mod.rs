//! Transport layer: gateway URLs, JSON request bodies and the response envelope.

mod body;
mod directory;
mod envelope;
mod gateway;
mod selector;
mod sms;

pub use body::{EmptyBody, IdBody, NumberBody, non_blank};
pub use directory::{BlacklistListBody, ContactAddBody, ContactListBody, GroupAddBody};
pub use envelope::{EnvelopeError, decode_envelope};
pub use gateway::{
    DEFAULT_GATEWAYS, GatewayError, endpoint_url, is_reachable, parse_gateway, redact_url,
};
pub use selector::Selector;
pub use sms::{SendSmsBody, SmsListBody};
