/**
 * Router Configuration
 *
 * Main router creation. Combines every route group into one Axum router and
 * applies the cross-cutting layers.
 *
 * # Route Order
 *
 * 1. Health check (public)
 * 2. Auth routes (signup, login public; me protected)
 * 3. API routes (all protected)
 * 4. Static files under `/static`
 * 5. Fallback handler (JSON 404)
 *
 * # Layers
 *
 * Request tracing wraps everything, CORS sits outermost so preflight
 * requests never reach the auth middleware.
 */

use axum::{
    http::{header::CACHE_CONTROL, HeaderValue},
    response::Json,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::backend::error::conversion::route_not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::shared::api::MessageResponse;

/// Cache policy for static assets (one day)
pub const STATIC_CACHE_CONTROL: &str = "public, max-age=86400";

/// `GET /health` - liveness probe
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new("Healthy"))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_auth_routes(router, app_state.clone());
    let router = configure_api_routes(router, app_state.clone());

    // Static files with a day of client caching
    let static_files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
        .service(ServeDir::new(&config.static_dir));
    let router = router.nest_service("/static", static_files);

    router
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(app_state)
}

/// Build the CORS layer from the configured origin list
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_allowed_origins {
        None => layer.allow_origin(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
    }
}
