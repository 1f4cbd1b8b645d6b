use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Point-in-time snapshot of which upstream capabilities are wired in.
/// Reported from configuration, no upstream calls are made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub services: ServiceAvailability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceAvailability {
    pub database: String,
    pub ai: String,
}
