/// # Status Page
///
/// Renders the service health record as a styled HTML page.
///
/// ## Response
///
/// - **200 OK**: Service is running
///   - Content-Type: `text/html; charset=utf-8`
///   - Body: monospace page with a green check-marked heading and the
///     health record pretty-printed as JSON in a `<pre>` block
///
/// ## Displayed Record
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2023-10-05T14:23:45.678Z",
///   "service": "status-page",
///   "version": "1.0.0",
///   "environment": "development"
/// }
/// ```
pub mod health;
