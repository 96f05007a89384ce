// File: services/agendify_backend/src/main.rs
use agendify_common::{logging, AgendifyError, Context};
use agendify_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

mod app_state;

use app_state::AppState;

#[tokio::main]
async fn main() -> Result<(), AgendifyError> {
    let config = Arc::new(load_config().map_err(agendify_common::config_error)?);
    // Keeps the file writer flushing until shutdown
    let _log_guard = logging::init_from_config(config.logging.as_ref());

    let state = AppState::new(config.clone());
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = state.router();

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use agendify_availability::doc::AvailabilityApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Agendify API",
                version = "0.1.0",
                description = "Appointment availability and booking validation",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            tags( (name = "Agendify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(AvailabilityApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!(
        "Availability endpoints {} at http://{}/api",
        if config.use_availability { "enabled" } else { "disabled" },
        addr
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
