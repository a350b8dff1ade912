use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Environment variable consulted for the deployment context.
pub const ENVIRONMENT_VAR: &str = "APP_ENV";

/// Deployment context reported when [`ENVIRONMENT_VAR`] is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthRecord {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
    pub environment: String,
}

impl HealthRecord {
    /// Builds a fresh record for the current request.
    ///
    /// - `status` is always `"healthy"`: the record is fabricated, not probed
    /// - `timestamp` is the UTC wall-clock time at the call, RFC 3339 formatted
    /// - `service` and `version` come from the crate metadata at compile time
    /// - `environment` reads [`ENVIRONMENT_VAR`], falling back to
    ///   [`DEFAULT_ENVIRONMENT`] when unset
    pub fn current() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: std::env::var(ENVIRONMENT_VAR)
                .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string()),
        }
    }
}
