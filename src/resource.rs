//! Resource kinds and the per-kind descriptor table that drives the pipeline.

use crate::reservation::RawReservation;

/// The reservation categories the watcher reports on, plus an explicit
/// bucket for records whose shape we don't recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Compute,
    Database,
    Cache,
    Search,
    DataWarehouse,
    Unknown,
}

impl ResourceKind {
    /// Render order of the known kinds inside the report.
    pub const RENDER_ORDER: [ResourceKind; 5] = [
        ResourceKind::Compute,
        ResourceKind::Database,
        ResourceKind::Cache,
        ResourceKind::Search,
        ResourceKind::DataWarehouse,
    ];

    /// Identifier-field probe order. First match wins; compute is probed
    /// before cache, cache before database.
    const DETECT_ORDER: [ResourceKind; 5] = [
        ResourceKind::Compute,
        ResourceKind::Cache,
        ResourceKind::Database,
        ResourceKind::Search,
        ResourceKind::DataWarehouse,
    ];

    /// Classify a record by which reservation-id field it carries.
    pub fn detect(record: &RawReservation) -> ResourceKind {
        for kind in Self::DETECT_ORDER {
            if record.has_field(kind.spec().id_field) {
                return kind;
            }
        }
        ResourceKind::Unknown
    }

    pub fn spec(&self) -> &'static KindSpec {
        match self {
            ResourceKind::Compute => &KIND_SPECS[0],
            ResourceKind::Database => &KIND_SPECS[1],
            ResourceKind::Cache => &KIND_SPECS[2],
            ResourceKind::Search => &KIND_SPECS[3],
            ResourceKind::DataWarehouse => &KIND_SPECS[4],
            ResourceKind::Unknown => &UNKNOWN_SPEC,
        }
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    /// Console deep link for the kind's reservation page. `Unknown` has
    /// nowhere sensible to point, so the button is rendered link-less.
    pub fn console_url(&self) -> Option<&'static str> {
        self.spec().console_url
    }
}

/// Everything kind-specific the pipeline needs, as one static row.
/// Adding a sixth resource kind is a new row here (plus an enum variant),
/// not a new fetch/format flow.
#[derive(Debug)]
pub struct KindSpec {
    pub kind: ResourceKind,
    pub label: &'static str,
    /// Field whose presence identifies a record as this kind.
    pub id_field: &'static str,
    /// Candidate fields for the instance/node type, probed in order.
    pub type_fields: &'static [&'static str],
    /// Candidate fields for the human description, probed in order.
    pub description_fields: &'static [&'static str],
    /// Name of the list field in the describe response body.
    pub list_field: &'static str,
    /// Path of the describe call under the inventory API base URL.
    pub describe_path: &'static str,
    pub console_url: Option<&'static str>,
}

pub static KIND_SPECS: [KindSpec; 5] = [
    KindSpec {
        kind: ResourceKind::Compute,
        label: "EC2",
        id_field: "ReservedInstancesId",
        type_fields: &["InstanceType"],
        description_fields: &["ProductDescription"],
        list_field: "ReservedInstances",
        describe_path: "ec2/reserved-instances",
        console_url: Some("http://console.aws.amazon.com/ec2/v2/home#ReservedInstances"),
    },
    KindSpec {
        kind: ResourceKind::Database,
        label: "RDS",
        id_field: "ReservedDBInstanceId",
        type_fields: &["DBInstanceClass"],
        description_fields: &["ProductDescription"],
        list_field: "ReservedDBInstances",
        describe_path: "rds/reserved-db-instances",
        console_url: Some("http://console.aws.amazon.com/rds/home#reserved-instances"),
    },
    KindSpec {
        kind: ResourceKind::Cache,
        label: "ElastiCache",
        id_field: "ReservedCacheNodeId",
        type_fields: &["CacheNodeType"],
        description_fields: &["ProductDescription"],
        list_field: "ReservedCacheNodes",
        describe_path: "elasticache/reserved-cache-nodes",
        console_url: Some("http://console.aws.amazon.com/elasticache/home#reserved-cache-nodes"),
    },
    KindSpec {
        kind: ResourceKind::Search,
        label: "ElasticSearch",
        id_field: "ReservedElasticsearchInstanceId",
        type_fields: &["ElasticsearchInstanceType"],
        description_fields: &["ProductDescription"],
        list_field: "ReservedElasticsearchInstances",
        describe_path: "es/reserved-instances",
        console_url: Some("http://aws.amazon.com/es/home#reserved-instances"),
    },
    KindSpec {
        kind: ResourceKind::DataWarehouse,
        label: "RedShift",
        id_field: "ReservedNodeId",
        type_fields: &["NodeType"],
        description_fields: &["ProductDescription"],
        list_field: "ReservedNodes",
        describe_path: "redshift/reserved-nodes",
        console_url: Some("http://console.aws.amazon.com/redshiftv2/home#reserved-nodes"),
    },
];

static UNKNOWN_SPEC: KindSpec = KindSpec {
    kind: ResourceKind::Unknown,
    label: "unknown",
    id_field: "",
    type_fields: &[],
    description_fields: &["ProductDescription"],
    list_field: "",
    describe_path: "",
    console_url: None,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detect_by_single_id_field() {
        let record = RawReservation::new(json!({ "ReservedInstancesId": "ri-1" }));
        assert_eq!(ResourceKind::detect(&record), ResourceKind::Compute);

        let record = RawReservation::new(json!({ "ReservedNodeId": "rn-9" }));
        assert_eq!(ResourceKind::detect(&record), ResourceKind::DataWarehouse);
    }

    #[test]
    fn detect_prefers_compute_over_cache() {
        // Contrived record carrying two id fields: probe order decides.
        let record = RawReservation::new(json!({
            "ReservedCacheNodeId": "rcn-1",
            "ReservedInstancesId": "ri-1",
        }));
        assert_eq!(ResourceKind::detect(&record), ResourceKind::Compute);
    }

    #[test]
    fn detect_falls_through_to_unknown() {
        let record = RawReservation::new(json!({ "SomethingElse": true }));
        assert_eq!(ResourceKind::detect(&record), ResourceKind::Unknown);
        assert!(ResourceKind::Unknown.console_url().is_none());
    }

    #[test]
    fn every_known_kind_has_a_console_link() {
        for kind in ResourceKind::RENDER_ORDER {
            assert!(kind.console_url().is_some(), "{:?}", kind);
        }
    }
}
