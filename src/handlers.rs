use axum::{Json, http::StatusCode};

use crate::{
    auth::Viewer,
    models::{SectionPage, ViewerProfile},
    policy::{Area, RgRole},
};

// --- Gateway Handlers ---
//
// Every section handler returns a placeholder payload; the access decision
// has already happened in the gating middleware by the time one of these
// runs. RG handlers re-check the elevated-role requirement themselves as a
// second layer, mirroring the route-level gate.

/// get_home
///
/// [Gated Route] The portal landing page. Classifies to no area, so it is
/// reachable by any authenticated member, active or not.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Home", body = SectionPage))
)]
pub async fn get_home() -> Json<SectionPage> {
    Json(SectionPage::new(
        None,
        "Owensfield Community Platform",
        "No discussion features; archive-only governance records; role-based access; \
         inactive members are restricted to Profile and Renewal.",
    ))
}

/// get_login
///
/// [Public Route] Placeholder for the sign-in flow, which is owned by the
/// external identity provider. The route exists as the redirect target for
/// unauthenticated visitors.
#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login", body = SectionPage))
)]
pub async fn get_login() -> Json<SectionPage> {
    Json(SectionPage::new(
        None,
        "Login",
        "Sign-in is handled by the external identity provider; this route only exists \
         as a landing point for unauthenticated visitors.",
    ))
}

/// get_me
///
/// [Gated Route] Returns the normalized identity the gate evaluated for this
/// request: status, role set, and whether any held role is elevated.
#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Viewer profile", body = ViewerProfile))
)]
pub async fn get_me(viewer: Viewer) -> Json<ViewerProfile> {
    let has_elevated_role = viewer.has_elevated_role();
    let mut rg_roles: Vec<RgRole> = viewer.rg_roles.iter().copied().collect();
    rg_roles.sort();

    Json(ViewerProfile {
        id: viewer.id,
        member_status: viewer.member_status,
        rg_roles,
        has_elevated_role,
    })
}

/// get_archives
///
/// [Gated Route] Read-only records entry point. Not a classified area, so it
/// follows the home-area rule.
#[utoipa::path(
    get,
    path = "/archives",
    responses((status = 200, description = "Archives", body = SectionPage))
)]
pub async fn get_archives() -> Json<SectionPage> {
    Json(SectionPage::new(
        None,
        "Archives",
        "Archive-only access point for read-only records (governance items, minutes, documents).",
    ))
}

// --- Member Areas ---

#[utoipa::path(
    get,
    path = "/profile",
    responses((status = 200, description = "Profile", body = SectionPage))
)]
pub async fn get_profile() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Profile),
        "Profile",
        "Membership profile. One of the two areas that stay reachable while a membership \
         is inactive.",
    ))
}

#[utoipa::path(
    get,
    path = "/renewal",
    responses((status = 200, description = "Renewal", body = SectionPage))
)]
pub async fn get_renewal() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Renewal),
        "Renewal / Reactivation",
        "Inactive members are restricted to Profile + Renewal only (no access to \
         governance areas).",
    ))
}

#[utoipa::path(
    get,
    path = "/documents",
    responses((status = 200, description = "Documents", body = SectionPage))
)]
pub async fn get_documents() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Documents),
        "Documents",
        "Central archive. Items are archived (read-only) and never hard-deleted.",
    ))
}

#[utoipa::path(
    get,
    path = "/polls",
    responses((status = 200, description = "Polls", body = SectionPage))
)]
pub async fn get_polls() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Polls),
        "Polls",
        "Governance changes require polls. Lifecycle: Draft, Pending RG Approval, Active, \
         Closed, Archived.",
    ))
}

#[utoipa::path(
    get,
    path = "/meetings",
    responses((status = 200, description = "Meetings", body = SectionPage))
)]
pub async fn get_meetings() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Meetings),
        "Meetings",
        "Community and RG meetings. Agendas/minutes move to approvals, then become \
         read-only and archived.",
    ))
}

#[utoipa::path(
    get,
    path = "/actions",
    responses((status = 200, description = "Actions", body = SectionPage))
)]
pub async fn get_actions() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Actions),
        "Actions",
        "Actions can be created from polls/meetings/minutes/communications; members view \
         read-only; completed actions are archived.",
    ))
}

#[utoipa::path(
    get,
    path = "/communications",
    responses((status = 200, description = "Communications", body = SectionPage))
)]
pub async fn get_communications() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Communications),
        "Communications",
        "Official record only (threaded timeline). Managed by RG; members read-only; \
         closed threads are archived.",
    ))
}

/// get_finance
///
/// [Gated Route] Reporting view. Uploads will be restricted to the Treasurer
/// role once the feature ships; viewing requires active membership only.
#[utoipa::path(
    get,
    path = "/finance",
    responses((status = 200, description = "Finance", body = SectionPage))
)]
pub async fn get_finance() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Finance),
        "Finance",
        "Reporting only. Viewable by active members; uploads restricted to Treasurer role(s).",
    ))
}

#[utoipa::path(
    get,
    path = "/governance",
    responses((status = 200, description = "Governance", body = SectionPage))
)]
pub async fn get_governance() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Governance),
        "Governance",
        "Governance dashboard (poll outcomes, procedures, and archived records). \
         Archive-only; no hard deletes.",
    ))
}

#[utoipa::path(
    get,
    path = "/notices",
    responses((status = 200, description = "Notices", body = SectionPage))
)]
pub async fn get_notices() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Notices),
        "Notices",
        "Official notices. Not viewable while a membership is inactive.",
    ))
}

#[utoipa::path(
    get,
    path = "/settings",
    responses((status = 200, description = "Settings", body = SectionPage))
)]
pub async fn get_settings() -> Json<SectionPage> {
    Json(SectionPage::new(
        Some(Area::Settings),
        "Settings",
        "Placeholder for configuration/admin settings. No workflows implemented yet.",
    ))
}

// --- RG Admin Area ---

/// require_elevated
///
/// Defense-in-depth check for RG handlers: the route-level gate already
/// requires an elevated role for the whole `/rg` subtree, and each handler
/// repeats the check so no future routing change can silently expose one.
fn require_elevated(viewer: &Viewer) -> Result<(), StatusCode> {
    if viewer.has_elevated_role() {
        Ok(())
    } else {
        Err(StatusCode::FORBIDDEN)
    }
}

/// get_rg_index
///
/// [RG Route] Entry page for Representative Group tooling.
#[utoipa::path(
    get,
    path = "/rg",
    responses(
        (status = 200, description = "RG tools", body = SectionPage),
        (status = 403, description = "Elevated RG role required")
    )
)]
pub async fn get_rg_index(viewer: Viewer) -> Result<Json<SectionPage>, StatusCode> {
    require_elevated(&viewer)?;
    Ok(Json(SectionPage::new(
        Some(Area::RestrictedAdmin),
        "Representative Group (RG)",
        "RG tools are inaccessible to inactive users. Role-based access only; no implicit \
         admin powers.",
    )))
}

#[utoipa::path(
    get,
    path = "/rg/elections",
    responses(
        (status = 200, description = "Elections", body = SectionPage),
        (status = 403, description = "Elevated RG role required")
    )
)]
pub async fn get_rg_elections(viewer: Viewer) -> Result<Json<SectionPage>, StatusCode> {
    require_elevated(&viewer)?;
    Ok(Json(SectionPage::new(
        Some(Area::RestrictedAdmin),
        "RG: Elections & Nominations",
        "Placeholder for nominations/elections. Uncontested nominations auto-elect but \
         enactment occurs at OCG/AGM or vacancy.",
    )))
}

/// get_rg_membership_database
///
/// [RG Route] The membership registry view. Restricted to elected RG roles
/// (Chair, Vice Chair, Secretary, Treasurer).
#[utoipa::path(
    get,
    path = "/rg/membership-database",
    responses(
        (status = 200, description = "Membership database", body = SectionPage),
        (status = 403, description = "Elevated RG role required")
    )
)]
pub async fn get_rg_membership_database(viewer: Viewer) -> Result<Json<SectionPage>, StatusCode> {
    require_elevated(&viewer)?;
    Ok(Json(SectionPage::new(
        Some(Area::RestrictedAdmin),
        "RG Admin: Membership Database",
        "Restricted to elected RG roles (Chair, Vice Chair, Secretary, Treasurer).",
    )))
}

#[utoipa::path(
    get,
    path = "/rg/pending-approvals",
    responses(
        (status = 200, description = "Pending approvals", body = SectionPage),
        (status = 403, description = "Elevated RG role required")
    )
)]
pub async fn get_rg_pending_approvals(viewer: Viewer) -> Result<Json<SectionPage>, StatusCode> {
    require_elevated(&viewer)?;
    Ok(Json(SectionPage::new(
        Some(Area::RestrictedAdmin),
        "RG: Pending Approvals",
        "Placeholder for approvals (poll activation, agenda/minutes approvals, document \
         edit/delete approvals). Approvals must be auditable.",
    )))
}

#[utoipa::path(
    get,
    path = "/rg/plots",
    responses(
        (status = 200, description = "Plot registry", body = SectionPage),
        (status = 403, description = "Elevated RG role required")
    )
)]
pub async fn get_rg_plots(viewer: Viewer) -> Result<Json<SectionPage>, StatusCode> {
    require_elevated(&viewer)?;
    Ok(Json(SectionPage::new(
        Some(Area::RestrictedAdmin),
        "RG Admin: Plot Registry",
        "Plot ownership and occupancy records, maintained by elected RG roles.",
    )))
}
