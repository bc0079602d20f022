//! Resource Model
//!
//! Records and response bodies as served by the discovery backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Backend-supplied resource count per service type, displayed verbatim
pub type ServiceSummary = BTreeMap<String, u64>;

/// One discovered cloud entity
///
/// Every field is optional on the wire; a missing field never matches a
/// filter but never fails decoding either. Fields the dashboard does not
/// model (`tags`, `launch_time`, ...) are kept in `extra` for the detail view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// Lifecycle status (`running`, `stopped`, `available`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Resource {
    /// Build a resource with the identifying fields set
    pub fn new(name: &str, resource_id: &str, service_type: &str, region: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            resource_id: Some(resource_id.to_string()),
            service_type: Some(service_type.to_string()),
            region: Some(region.to_string()),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    /// Resource ID as a secondary line, only when it differs from the name
    pub fn secondary_id(&self) -> Option<&str> {
        match (&self.name, &self.resource_id) {
            (Some(name), Some(id)) if name == id => None,
            (_, Some(id)) => Some(id.as_str()),
            (_, None) => None,
        }
    }

    /// Service-specific attributes that are present, as `(label, value)` pairs
    /// in display order. Empty strings count as absent.
    pub fn detail_attributes(&self) -> Vec<(&'static str, &str)> {
        [
            ("Type", &self.instance_type),
            ("Engine", &self.engine),
            ("Runtime", &self.runtime),
            ("CIDR", &self.cidr_block),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// Body of `GET {base}/regions`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionsResponse {
    #[serde(default)]
    pub regions: Option<Vec<String>>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Body of `GET {base}/services`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServicesResponse {
    #[serde(default)]
    pub resources: Option<Vec<Resource>>,
    #[serde(default)]
    pub service_summary: Option<ServiceSummary>,
    #[serde(default)]
    pub total_count: Option<usize>,
    #[serde(default)]
    pub regions_scanned: Option<usize>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_ec2_record() {
        let value = json!({
            "service_type": "EC2",
            "resource_type": "Instance",
            "resource_id": "i-0abc",
            "name": "web1",
            "state": "running",
            "region": "us-east-1",
            "availability_zone": "us-east-1a",
            "instance_type": "t3.micro",
            "launch_time": "2024-01-01T00:00:00",
            "tags": [{"Key": "Name", "Value": "web1"}]
        });

        let resource: Resource = serde_json::from_value(value).unwrap();
        assert_eq!(resource.name.as_deref(), Some("web1"));
        assert_eq!(resource.instance_type.as_deref(), Some("t3.micro"));
        assert_eq!(resource.extra["launch_time"], "2024-01-01T00:00:00");
        assert!(resource.extra["tags"].is_array());
    }

    #[test]
    fn test_decode_sparse_record() {
        let resource: Resource = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(resource, Resource::default());
    }

    #[test]
    fn test_extra_fields_survive_serialization() {
        let value = json!({"name": "b", "creation_date": "2023-05-01"});
        let resource: Resource = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&resource).unwrap(), value);
    }

    #[test]
    fn test_secondary_id() {
        let same = Resource::new("bucket-a", "bucket-a", "S3", "us-east-1");
        assert_eq!(same.secondary_id(), None);

        let differs = Resource::new("web1", "i-0abc", "EC2", "us-east-1");
        assert_eq!(differs.secondary_id(), Some("i-0abc"));

        let no_name = Resource {
            resource_id: Some("vpc-1".to_string()),
            ..Resource::default()
        };
        assert_eq!(no_name.secondary_id(), Some("vpc-1"));
    }

    #[test]
    fn test_detail_attributes_only_present() {
        let mut resource = Resource::new("db", "db", "RDS", "eu-west-1");
        resource.instance_type = Some("db.t3.small".to_string());
        resource.engine = Some("postgres".to_string());
        resource.runtime = Some(String::new());

        assert_eq!(
            resource.detail_attributes(),
            vec![("Type", "db.t3.small"), ("Engine", "postgres")]
        );
        assert!(Resource::default().detail_attributes().is_empty());
    }

    #[test]
    fn test_services_response_defaults() {
        let response: ServicesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.resources.is_none());
        assert!(response.service_summary.is_none());

        let response: ServicesResponse = serde_json::from_value(json!({
            "resources": [],
            "service_summary": {"S3": 0, "EC2": 3},
            "total_count": 3,
            "regions_scanned": 17
        }))
        .unwrap();
        let summary = response.service_summary.unwrap();
        assert_eq!(summary.keys().collect::<Vec<_>>(), vec!["EC2", "S3"]);
        assert_eq!(response.regions_scanned, Some(17));
    }
}
