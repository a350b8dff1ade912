use crate::models::health::HealthRecord;
use actix_web::{HttpResponse, Responder};

/// # Status Page Rendering
///
/// Renders a health record as the HTML status page: a monospace container on a
/// light-grey background, a green check-marked heading and the record
/// pretty-printed as JSON inside a bordered `<pre>` block.
///
/// Serialization of the record cannot fail for this shape; the renderer degrades
/// to an empty JSON object rather than panicking.
pub fn render_page(record: &HealthRecord) -> String {
    let payload = serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Service Health Check</title>
  </head>
  <body style="font-family: monospace; padding: 20px; background-color: #f5f5f5; min-height: 100vh">
    <h1 style="color: #28a745">✓ Service Health Check</h1>
    <pre style="background-color: #fff; padding: 15px; border-radius: 5px; border: 1px solid #ddd">{payload}</pre>
  </body>
</html>
"#
    )
}

/// # Status Page Endpoint
///
/// Serves the HTML status page for the service.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Content-Type: `text/html; charset=utf-8`
///   - Body: the rendered status page containing a fresh [`HealthRecord`]
///
/// The record is rebuilt on every request, so the displayed timestamp always
/// reflects the request time.
pub async fn health_page() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_page(&HealthRecord::current()))
}
