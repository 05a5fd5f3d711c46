//! Raw inventory records and the active-status filter.

use serde_json::Value;

/// One reservation record as returned by an inventory describe call.
/// Field names vary per resource kind, so the record stays a JSON map and
/// callers go through the candidate-field accessors.
#[derive(Debug, Clone)]
pub struct RawReservation(Value);

impl RawReservation {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn has_field(&self, name: &str) -> bool {
        !name.is_empty() && self.0.get(name).is_some()
    }

    /// String value of `name`, if present and a string.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// First candidate field that holds a non-empty string.
    pub fn first_str<'a>(&'a self, candidates: &[&str]) -> Option<&'a str> {
        candidates
            .iter()
            .filter_map(|name| self.str_field(name))
            .find(|s| !s.is_empty())
    }

    pub fn int_field(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }
}

/// Keep only reservations whose lifecycle status is exactly "active".
/// Other statuses ("retired", "payment-pending", ...) are dropped as-is;
/// input order is preserved.
pub fn active_only(records: Vec<RawReservation>) -> Vec<RawReservation> {
    records
        .into_iter()
        .filter(|r| r.str_field("State") == Some("active"))
        .collect()
}
