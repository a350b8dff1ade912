use actix_web::web;

use crate::handlers;

/// # Health Check Endpoint
///
/// Returns the current health record of the service as JSON.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: JSON object with `status` ("healthy"), `timestamp` in ISO 8601
///     format, `service`, `version` and `environment`
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2023-10-05T12:34:56.789Z",
///   "service": "status-page",
///   "version": "1.0.0",
///   "environment": "development"
/// }
/// ```
pub mod health;

/// # GraphQL Endpoints
///
/// Exposes the health record through a GraphQL query endpoint and serves the
/// interactive Playground for development.
pub mod graphql;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path and the
/// root-level HTML status page.
///
/// ## API Version
/// - Version: 1.0
/// - Base Path: `/api/v1`
///
/// ## Mounted Services
/// - Health check endpoint (see [`health::configure_routes`] for details)
/// - GraphQL endpoints (see [`graphql::configure_routes`] for details)
/// - HTML status page at the service root
///
/// ## Example Endpoints
///
/// ```text
/// GET /health - HTML status page
/// GET /api/v1/health - Health record as JSON
/// POST /api/v1/graphql - GraphQL endpoint
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`graphql::configure_routes`]: crate::routes::graphql::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure_routes)
            .configure(graphql::configure_routes),
    )
    .service(web::resource("/health").route(web::get().to(handlers::health::health_page)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_configure_mounts_all_surfaces() {
        let schema = crate::graphql::schema::create_schema();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(schema))
                .configure(configure),
        )
        .await;

        // HTML status page at the root
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        // JSON record under the versioned scope
        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        // GraphQL endpoint under the versioned scope
        let req = test::TestRequest::post()
            .uri("/api/v1/graphql")
            .set_json(serde_json::json!({"query": "{ __typename }"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }
}
