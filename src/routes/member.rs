use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Member Router Module
///
/// Defines the portal sections reachable by authenticated members. The area
/// gate middleware layered above this router decides per request which
/// sections the viewer reaches: inactive members are confined to Profile and
/// Renewal, active members reach everything here.
///
/// Access Control Strategy:
/// Handlers in this module carry no checks of their own. The request path is
/// classified into a logical area and evaluated against the viewer's status
/// and roles before any handler runs; a denial never reaches this router.
pub fn member_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /
        // The landing page. Classifies to no area and is reachable by any
        // authenticated member regardless of status.
        .route("/", get(handlers::get_home))
        // GET /me
        // The viewer's own normalized identity: status, roles, elevated flag.
        .route("/me", get(handlers::get_me))
        // GET /archives
        // Read-only records entry point; follows the home-area rule.
        .route("/archives", get(handlers::get_archives))
        // --- Inactive-reachable areas ---
        // Profile and Renewal are the only sections an inactive membership
        // keeps; Renewal doubles as the redirect target for inactive denials.
        .route("/profile", get(handlers::get_profile))
        .route("/renewal", get(handlers::get_renewal))
        // --- Active-member areas ---
        .route("/documents", get(handlers::get_documents))
        .route("/polls", get(handlers::get_polls))
        .route("/meetings", get(handlers::get_meetings))
        .route("/actions", get(handlers::get_actions))
        .route("/communications", get(handlers::get_communications))
        .route("/finance", get(handlers::get_finance))
        .route("/governance", get(handlers::get_governance))
        .route("/notices", get(handlers::get_notices))
        .route("/settings", get(handlers::get_settings))
}
