use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// RG Router Module
///
/// Defines the routes exclusively accessible to members holding an elevated
/// Representative Group role (Chair, Vice Chair, Treasurer, Secretary).
///
/// Access Control:
/// This router is nested under `/rg`, which the area classifier maps to the
/// restricted admin area, so the gate middleware requires an elevated role
/// for every route here. Each handler additionally re-checks the elevated
/// requirement and answers 403 if it were ever reached without one.
pub fn rg_routes() -> Router<AppState> {
    Router::new()
        // GET /rg
        // Entry page for RG tooling.
        .route("/", get(handlers::get_rg_index))
        // GET /rg/elections
        // Nominations and elections placeholder.
        .route("/elections", get(handlers::get_rg_elections))
        // GET /rg/membership-database
        // The membership registry view; the most sensitive section served.
        .route("/membership-database", get(handlers::get_rg_membership_database))
        // GET /rg/pending-approvals
        // Approval queue placeholder (polls, minutes, document edits).
        .route("/pending-approvals", get(handlers::get_rg_pending_approvals))
        // GET /rg/plots
        // Plot registry placeholder.
        .route("/plots", get(handlers::get_rg_plots))
}
