use actix_web::{App, HttpServer, web::Data};
use status_page::graphql::schema::create_schema;
use status_page::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status Page Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - HTML status page rendering the fabricated health record
/// - GraphQL endpoint powered by Async-GraphQL
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Shared application state for schema and OpenAPI docs
///
/// # Endpoints
/// - Status page: `/health`
/// - JSON record: `/api/v1/health`
/// - GraphQL: `/api/v1/graphql` (configured in routes)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080` by default
/// - Environment variables loaded from `.env` file (if present)
/// - `APP_ENV` determines the reported deployment context
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Create GraphQL schema
    let schema = create_schema();

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(openapi.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(status_page::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
