// File: services/mge_backend/src/lib.rs
use axum::{routing::get, Router};
use mge_common::{not_found, MgeError};
use mge_config::AppConfig;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

async fn welcome() -> &'static str {
    "Welcome to the Medan Gaming API!"
}

async fn fallback() -> MgeError {
    not_found("No such route")
}

/// Builds the full application router: `/api` routes, optional Swagger UI,
/// request tracing and CORS for the UI.
pub fn app(config: Arc<AppConfig>) -> Result<Router, MgeError> {
    let booking_router = mge_booking::routes(config.clone())?;

    let api_router = Router::new().nest(
        "/api",
        Router::new()
            .route("/", get(welcome))
            .merge(booking_router),
    );

    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = api_router;

    #[cfg(feature = "openapi")]
    {
        use mge_booking::doc::BookingApiDoc;
        use tracing::info;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Medan Gaming API",
                version = "0.1.0",
                description = "Booking backend-for-frontend",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    Ok(app
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}
