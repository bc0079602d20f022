//! Status buckets and badge colours

/// RGB color as [r, g, b]
pub type Rgb = [u8; 3];

/// Normalised lifecycle status used to colour the status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    /// running, active, available
    Positive,
    /// stopped, inactive, terminated
    Neutral,
    /// pending, starting
    Caution,
    /// anything else, including a missing state
    Informational,
}

impl StatusBucket {
    pub fn from_state(state: Option<&str>) -> Self {
        let Some(state) = state else {
            return Self::Informational;
        };

        match state.to_lowercase().as_str() {
            "running" | "active" | "available" => Self::Positive,
            "stopped" | "inactive" | "terminated" => Self::Neutral,
            "pending" | "starting" => Self::Caution,
            _ => Self::Informational,
        }
    }

    /// Badge background
    pub fn color(self) -> Rgb {
        match self {
            Self::Positive => [22, 101, 52],
            Self::Neutral => [75, 85, 99],
            Self::Caution => [133, 77, 14],
            Self::Informational => [30, 64, 175],
        }
    }
}

/// Badge background for a service type; unknown services are gray
pub fn service_color(service_type: Option<&str>) -> Rgb {
    match service_type.unwrap_or_default() {
        "EC2" | "CloudFormation" | "ECS" => [154, 52, 18],
        "S3" => [22, 101, 52],
        "Lambda" => [146, 64, 14],
        "RDS" | "DynamoDB" => [30, 64, 175],
        "VPC" => [107, 33, 168],
        "ELB" => [153, 27, 27],
        "SNS" | "SQS" => [157, 23, 77],
        _ => [75, 85, 99],
    }
}
