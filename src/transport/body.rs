use serde::Serialize;

use crate::domain::Numeric;

/// `{}` for endpoints without parameters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyBody {}

/// `{"id": N}`.
#[derive(Debug, Clone, Serialize)]
pub struct IdBody {
    pub id: Numeric,
}

/// `{"number": N}`.
#[derive(Debug, Clone, Serialize)]
pub struct NumberBody {
    pub number: Numeric,
}

/// Treat `None` and blank strings alike.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}
