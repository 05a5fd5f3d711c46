//! Maps active raw records into the uniform summary shape the report uses.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::reservation::RawReservation;
use crate::resource::{ResourceKind, KIND_SPECS};
use crate::timefmt;

/// Uniform per-reservation summary, ready for rendering.
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    pub kind: ResourceKind,
    pub description: String,
    pub instance_type: String,
    pub reservation_id: String,
    pub expires_at: String,
    pub expires_relative: String,
}

/// Normalize a batch of active records. Returns `None` for an empty batch
/// so callers can skip the whole section. Malformed records degrade to
/// empty fields rather than failing the run.
pub fn normalize(records: &[RawReservation], now: DateTime<Utc>) -> Option<Vec<NormalizedRecord>> {
    if records.is_empty() {
        return None;
    }
    Some(records.iter().map(|r| normalize_one(r, now)).collect())
}

fn normalize_one(record: &RawReservation, now: DateTime<Utc>) -> NormalizedRecord {
    let kind = ResourceKind::detect(record);
    if kind == ResourceKind::Unknown {
        warn!("reservation record matched no known identifier field");
    }

    let (expires_at, expires_relative) = match expiry(record) {
        Some(ts) => (timefmt::format_timestamp(ts), timefmt::relative_phrase(ts, now)),
        None => {
            warn!(kind = kind.label(), "reservation record has no usable start/duration");
            (String::new(), String::new())
        }
    };

    NormalizedRecord {
        kind,
        description: record
            .first_str(kind.spec().description_fields)
            .unwrap_or_default()
            .to_string(),
        instance_type: instance_type(record, kind),
        reservation_id: record
            .str_field(kind.spec().id_field)
            .unwrap_or_default()
            .to_string(),
        expires_at,
        expires_relative,
    }
}

fn expiry(record: &RawReservation) -> Option<DateTime<Utc>> {
    let start: DateTime<Utc> = record.str_field("Start")?.parse().ok()?;
    let duration = record.int_field("Duration")?;
    Some(timefmt::expiration(start, duration))
}

/// First non-empty type field for the detected kind; unknown records probe
/// every kind's candidates so a recognizable type still surfaces.
fn instance_type(record: &RawReservation, kind: ResourceKind) -> String {
    let found = if kind == ResourceKind::Unknown {
        KIND_SPECS
            .iter()
            .find_map(|spec| record.first_str(spec.type_fields))
    } else {
        record.first_str(kind.spec().type_fields)
    };
    found.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        "2023-06-01T00:00:00Z".parse().unwrap()
    }

    fn compute_record() -> RawReservation {
        RawReservation::new(json!({
            "ReservedInstancesId": "ri-1",
            "InstanceType": "m5.large",
            "ProductDescription": "Linux/UNIX",
            "State": "active",
            "Start": "2023-01-01T00:00:00Z",
            "Duration": 31536000,
        }))
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(normalize(&[], now()).is_none());
    }

    #[test]
    fn compute_record_normalizes_fully() {
        let out = normalize(&[compute_record()], now()).unwrap();
        assert_eq!(out.len(), 1);
        let rec = &out[0];
        assert_eq!(rec.kind, ResourceKind::Compute);
        assert_eq!(rec.reservation_id, "ri-1");
        assert_eq!(rec.instance_type, "m5.large");
        assert_eq!(rec.description, "Linux/UNIX");
        assert_eq!(rec.expires_at, "2024-01-01 00:00:00");
        assert_eq!(rec.expires_relative, "in 7 months");
    }

    #[test]
    fn unknown_record_degrades_with_placeholder_kind() {
        let record = RawReservation::new(json!({
            "State": "active",
            "NodeType": "dc2.large",
            "Start": "2023-01-01T00:00:00Z",
            "Duration": 3600,
        }));
        let rec = &normalize(&[record], now()).unwrap()[0];
        assert_eq!(rec.kind, ResourceKind::Unknown);
        assert_eq!(rec.reservation_id, "");
        // Type probing still walks all kinds' candidates.
        assert_eq!(rec.instance_type, "dc2.large");
    }

    #[test]
    fn bad_timestamp_renders_empty_not_error() {
        let record = RawReservation::new(json!({
            "ReservedDBInstanceId": "rdb-1",
            "State": "active",
            "Start": "not-a-date",
            "Duration": 3600,
        }));
        let rec = &normalize(&[record], now()).unwrap()[0];
        assert_eq!(rec.kind, ResourceKind::Database);
        assert_eq!(rec.expires_at, "");
        assert_eq!(rec.expires_relative, "");
    }
}
