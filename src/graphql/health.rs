use crate::models::health::HealthRecord;
use async_graphql::{Context, Object, Result};

/// GraphQL representation of the service health record
///
/// Provides health information through the GraphQL API, mirroring the REST
/// health record structure but formatted for GraphQL compatibility.
///
/// # Fields
/// - `status`: Current service status (always "healthy")
/// - `timestamp`: ISO-8601 formatted timestamp taken when the record was built
/// - `service`: Service name from crate metadata
/// - `version`: Service version from crate metadata
/// - `environment`: Deployment context from `APP_ENV`
#[derive(Debug)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
    pub environment: String,
}

impl From<HealthRecord> for Health {
    /// Converts the REST model record to the GraphQL type
    ///
    /// Allows sharing the health record infrastructure between REST and GraphQL
    /// APIs while maintaining separate presentation layers.
    fn from(record: HealthRecord) -> Self {
        Self {
            status: record.status,
            timestamp: record.timestamp,
            service: record.service,
            version: record.version,
            environment: record.environment,
        }
    }
}

#[Object]
impl Health {
    /// Current service status indicator
    ///
    /// # Returns
    /// String representation of service status; always "healthy" since the
    /// record is fabricated rather than probed
    async fn status(&self) -> &str {
        &self.status
    }

    /// Record construction timestamp
    ///
    /// # Returns
    /// ISO-8601 formatted timestamp string in UTC timezone
    async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Service name from crate metadata
    async fn service(&self) -> &str {
        &self.service
    }

    /// Service version from crate metadata
    async fn version(&self) -> &str {
        &self.version
    }

    /// Deployment context
    ///
    /// # Returns
    /// Value of `APP_ENV` at record construction, or "development" when unset
    async fn environment(&self) -> &str {
        &self.environment
    }
}

/// Root query type for health-related GraphQL operations
///
/// Provides entry points for reading the health record through GraphQL,
/// following the same fabricated-record paradigm as the REST API.
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Reads the current health record
    ///
    /// # Returns
    /// [`Health`] object containing:
    /// - Current service status
    /// - Timestamp of record construction
    /// - Service name, version and deployment environment
    ///
    /// # Errors
    /// Currently always returns `Ok` - maintains `Result` return type
    /// for future error handling compatibility
    async fn health(&self, _ctx: &Context<'_>) -> Result<Health> {
        Ok(Health::from(HealthRecord::current()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health::{DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR};
    use async_graphql::{EmptyMutation, EmptySubscription, Schema};
    use chrono::{DateTime, Utc};

    // Test the Health struct conversion from HealthRecord
    #[test]
    fn test_health_from_health_record() {
        let timestamp = Utc::now().to_rfc3339();
        let record = HealthRecord {
            status: "healthy".to_string(),
            timestamp: timestamp.clone(),
            service: "status-page".to_string(),
            version: "1.0.0".to_string(),
            environment: "production".to_string(),
        };

        // Convert to Health
        let health = Health::from(record);

        // Verify fields are correctly mapped
        assert_eq!(health.status, "healthy");
        assert_eq!(health.timestamp, timestamp);
        assert_eq!(health.service, "status-page");
        assert_eq!(health.version, "1.0.0");
        assert_eq!(health.environment, "production");
    }

    // Test the HealthQuery resolver through the GraphQL schema execution
    #[tokio::test]
    async fn test_health_query_resolver() {
        // Create a schema with HealthQuery
        let schema = Schema::build(
            HealthQuery::default(),
            EmptyMutation::default(),
            EmptySubscription::default(),
        )
        .finish();

        // Execute the health query
        let query = r#"
            query {
                health {
                    status
                    timestamp
                    service
                    version
                    environment
                }
            }
        "#;

        let result = schema.execute(query).await;

        // Verify no errors
        assert!(result.errors.is_empty());

        // Get data from result
        let data = result.data.into_json().unwrap();

        // Verify health data structure
        assert_eq!(data["health"]["status"], "healthy");
        assert_eq!(data["health"]["service"], env!("CARGO_PKG_NAME"));
        assert_eq!(data["health"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(data["health"]["environment"].is_string());

        // Verify timestamp is a valid ISO 8601 date
        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    // Test the default implementation of HealthQuery
    #[test]
    fn test_health_query_default() {
        let health_query = HealthQuery::default();
        // Simply verify we can create a default instance
        // This is just for coverage of the #[derive(Default)]
        assert!(matches!(health_query, HealthQuery));
    }

    // Test the environment fallback through the conversion path
    #[test]
    fn test_health_environment_fallback() {
        temp_env::with_var_unset(ENVIRONMENT_VAR, || {
            let health = Health::from(HealthRecord::current());
            assert_eq!(health.environment, DEFAULT_ENVIRONMENT);
        });
    }

    // Test health status values via GraphQL queries
    #[tokio::test]
    async fn test_health_status_value() {
        // Create a schema
        let schema = Schema::build(
            HealthQuery::default(),
            EmptyMutation::default(),
            EmptySubscription::default(),
        )
        .finish();

        // Query just the status field
        let query = r#"{ health { status } }"#;
        let result = schema.execute(query).await;

        // Check we got the expected healthy status
        assert!(result.errors.is_empty());
        let data = result.data.into_json().unwrap();
        assert_eq!(data["health"]["status"], "healthy");
    }

    // Test health timestamp values via GraphQL queries
    #[tokio::test]
    async fn test_health_timestamp_value() {
        // Create a schema
        let schema = Schema::build(
            HealthQuery::default(),
            EmptyMutation::default(),
            EmptySubscription::default(),
        )
        .finish();

        // Query just the timestamp field
        let query = r#"{ health { timestamp } }"#;
        let result = schema.execute(query).await;

        // Check we got a timestamp
        assert!(result.errors.is_empty());
        let data = result.data.into_json().unwrap();
        let timestamp = data["health"]["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
