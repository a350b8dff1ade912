use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural macros.
/// This documentation serves as the source of truth for both API consumers and
/// automated documentation generators.
///
/// # Endpoints
/// - Health Check: `GET /api/v1/health`
///
/// # Schemas
/// - `HealthRecord`: Fabricated service status payload
///
/// # Tags
/// 1. **Health Check**: Service status endpoints
/// 2. **GraphQL**: Query interface for the health record
///
/// # API Information
/// - **Title**: Status Page API
/// - **Version**: 1.0.0
/// - **Description**: REST and GraphQL interface for the service status page
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any changes
/// to the API surface should be reflected here first to maintain documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
    ),
    components(
        schemas(
            crate::models::health::HealthRecord
        )
    ),
    tags(
        (name = "Health Check", description = "Service status endpoints"),
        (name = "GraphQL", description = "GraphQL API for reading the health record")
    ),
    info(
        description = "REST and GraphQL interface for the service status page",
        title = "Status Page API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_contains_health_path() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).expect("OpenAPI document should serialize");

        assert!(json["paths"]["/api/v1/health"]["get"].is_object());
        assert!(json["components"]["schemas"]["HealthRecord"].is_object());
    }
}
