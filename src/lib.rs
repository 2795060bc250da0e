use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod policy;

// Module for routing segregation (Public, Member, RG).
pub mod routes;
use auth::Viewer; // The resolved authenticated identity.
use routes::{member, public, rg};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;

/// ApiDoc
///
/// This struct auto-generates the OpenAPI documentation (Swagger JSON) for the
/// application. It aggregates all API paths and data schemas decorated with
/// the `#[utoipa::path]` and `#[derive(utoipa::ToSchema)]` macros.
/// The resulting JSON is served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    // List all public handler functions here for documentation generation.
    paths(
        handlers::get_home, handlers::get_login, handlers::get_me, handlers::get_archives,
        handlers::get_profile, handlers::get_renewal, handlers::get_documents,
        handlers::get_polls, handlers::get_meetings, handlers::get_actions,
        handlers::get_communications, handlers::get_finance, handlers::get_governance,
        handlers::get_notices, handlers::get_settings, handlers::get_rg_index,
        handlers::get_rg_elections, handlers::get_rg_membership_database,
        handlers::get_rg_pending_approvals, handlers::get_rg_plots
    ),
    // List all models (schemas) used in the response bodies.
    components(
        schemas(
            models::SectionPage, models::ViewerProfile,
            policy::Area, policy::MemberStatus, policy::RgRole,
        )
    ),
    tags(
        (name = "owensfield-portal", description = "Owensfield Community Portal Gateway API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Implements the **Unified State Pattern**: the single, thread-safe,
/// immutable container holding the application configuration, shared across
/// all incoming requests. Identity is resolved per request and persistence is
/// owned by external systems, so configuration is the only state carried.
#[derive(Clone)]
pub struct AppState {
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// Allows extractors and middleware to selectively pull the configuration from
// the shared AppState.
impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// access_middleware
///
/// The request gate. Resolving `Viewer` as an extractor argument means an
/// unauthenticated request is rejected 401 before this body runs. For an
/// authenticated request the path is classified into a logical area and
/// evaluated against the viewer's status and roles; a denial becomes a
/// redirect (inactive viewers to Renewal, active viewers to Home) rather
/// than an error page.
async fn access_middleware(viewer: Viewer, request: Request, next: Next) -> Response {
    let area = policy::area_from_path(request.uri().path());

    if policy::can_access_area(area, viewer.member_status, &viewer.rg_roles) {
        return next.run(request).await;
    }

    let target = policy::redirect_target(viewer.member_status);
    tracing::info!(
        viewer = %viewer.id,
        area = ?area,
        status = ?viewer.member_status,
        target = target.path(),
        "area access denied"
    );
    Redirect::to(target.path()).into_response()
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Documentation: Serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public Routes: No middleware applied.
        .merge(public::public_routes())
        // Gated Routes: member sections plus the RG subtree, all behind the
        // area gate. The gate sees the full request path, so nesting the RG
        // router under /rg keeps its routes inside the restricted admin area.
        .merge(
            member::member_routes()
                .nest("/rg", rg::rg_routes())
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    access_middleware,
                )),
        )
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID for every incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle in a tracing
                // span that carries the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns the x-request-id header to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Helper function used by `TraceLayer` to customize tracing span creation.
/// It extracts the `x-request-id` header (if present) and includes it in the
/// structured logging metadata alongside the HTTP method and URI, so every
/// log line for a single request is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
