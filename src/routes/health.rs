use crate::models::health::HealthRecord;
use actix_web::{HttpResponse, Responder, get};

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
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Current health record", body = HealthRecord)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthRecord::current())
}

/// # Route Configuration
///
/// Registers the JSON health endpoint with the Actix-web service configuration.
///
/// ## Currently Configured Routes
///
/// - `GET /health`: Health record as JSON
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}
