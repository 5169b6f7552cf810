//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod validation;
mod value;

pub use request::{
    BlacklistFilter, ContactFields, ContactFilter, SendSmsOptions, Sex, SmsListFilter,
};
pub use validation::{ValidationError, require_non_empty, require_numeric};
pub use value::{
    ApiKey, Email, Numeric, PhoneNumber, SendDate, Signature, ToNumeric, sanitize_signature,
};
