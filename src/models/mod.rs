/// # Health Record
///
/// Represents the fabricated health status of the service.
/// Used as the payload for every health surface: status page, REST and GraphQL.
///
/// ## Fields
/// - `status`: String indicating service status (always "healthy")
/// - `timestamp`: ISO 8601 formatted timestamp taken when the record is built
/// - `service`: Name of the service, from crate metadata
/// - `version`: Version of the service, from crate metadata
/// - `environment`: Deployment context from `APP_ENV`, defaulting to "development"
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "service": "status-page",
///   "version": "1.0.0",
///   "environment": "development"
/// }
/// ```
pub mod health;
