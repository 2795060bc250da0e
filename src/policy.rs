use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

// --- Access-Control Core ---
//
// Pure decision logic for area-based access. Everything in this module is a
// total function over closed enumerations: no I/O, no failure modes, no
// shared state. The request layer resolves a viewer and a path, asks this
// module for a verdict, and acts on it.

/// MemberStatus
///
/// Membership standing attached to a viewer by the external identity provider.
/// `Inactive` is the normalization fallback: an unrecognized status value must
/// never widen access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MemberStatus {
    Active,
    #[default]
    Inactive,
}

impl MemberStatus {
    /// parse
    ///
    /// Case-sensitive match against the wire strings used in the identity
    /// provider's `app_metadata`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(MemberStatus::Active),
            "inactive" => Some(MemberStatus::Inactive),
            _ => None,
        }
    }

    /// normalize
    ///
    /// Maps a raw, possibly absent status claim to a valid status.
    /// Unknown or missing values collapse to `Inactive`.
    pub fn normalize(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

/// RgRole
///
/// Named Representative Group positions a member can hold. A viewer holds a
/// set of zero or more of these; duplicates collapse and order is irrelevant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RgRole {
    Chair,
    ViceChair,
    Treasurer,
    Secretary,
    OrdinaryMember,
}

impl RgRole {
    /// parse
    ///
    /// Case-sensitive match against the role strings stored in the identity
    /// provider's `app_metadata`. Unrecognized values map to `None` and are
    /// dropped by `parse_rg_roles`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "chair" => Some(RgRole::Chair),
            "vice_chair" => Some(RgRole::ViceChair),
            "treasurer" => Some(RgRole::Treasurer),
            "secretary" => Some(RgRole::Secretary),
            "ordinary_member" => Some(RgRole::OrdinaryMember),
            _ => None,
        }
    }

    /// is_elevated
    ///
    /// True for exactly the four elected officer positions that unlock the RG
    /// admin area. Ordinary RG membership is never elevated.
    pub fn is_elevated(self) -> bool {
        match self {
            RgRole::Chair | RgRole::ViceChair | RgRole::Treasurer | RgRole::Secretary => true,
            RgRole::OrdinaryMember => false,
        }
    }
}

/// parse_rg_roles
///
/// Filters a raw role-claim list down to recognized roles with set semantics:
/// unrecognized strings are dropped (never an error), duplicates collapse.
pub fn parse_rg_roles<'a, I>(values: I) -> HashSet<RgRole>
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().filter_map(RgRole::parse).collect()
}

/// Area
///
/// Logical site sections used purely for access decisions, distinct from the
/// exact URL structure beneath each section. The `rg` path prefix maps to
/// `RestrictedAdmin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Area {
    Profile,
    Renewal,
    Documents,
    Polls,
    Meetings,
    Actions,
    Communications,
    Finance,
    Governance,
    Notices,
    Settings,
    RestrictedAdmin,
}

/// area_from_path
///
/// Derives the logical area from a request path: leading/trailing slashes
/// stripped, first remaining segment matched case-sensitively against the
/// fixed table below. An empty path or an unrecognized segment means "no
/// area" (the home/public area). Pure and total.
pub fn area_from_path(path: &str) -> Option<Area> {
    let first = path.split('/').find(|segment| !segment.is_empty())?;

    match first {
        "profile" => Some(Area::Profile),
        "renewal" => Some(Area::Renewal),
        "documents" => Some(Area::Documents),
        "polls" => Some(Area::Polls),
        "meetings" => Some(Area::Meetings),
        "actions" => Some(Area::Actions),
        "communications" => Some(Area::Communications),
        "finance" => Some(Area::Finance),
        "governance" => Some(Area::Governance),
        "notices" => Some(Area::Notices),
        "settings" => Some(Area::Settings),
        "rg" => Some(Area::RestrictedAdmin),
        _ => None,
    }
}

/// The only areas an inactive member can reach, regardless of any role held.
pub const INACTIVE_ALLOWED_AREAS: [Area; 2] = [Area::Profile, Area::Renewal];

pub fn can_inactive_member_access(area: Area) -> bool {
    INACTIVE_ALLOWED_AREAS.contains(&area)
}

/// can_access_area
///
/// The access decision. The ordering is load-bearing: status is checked
/// before roles, so an inactive elected officer is still confined to
/// Profile + Renewal.
///
/// 1. No area (home/public) is always reachable once identity is established.
/// 2. Inactive viewers reach exactly `INACTIVE_ALLOWED_AREAS`.
/// 3. The RG admin area requires at least one elevated role.
/// 4. Active members reach every ordinary member area.
pub fn can_access_area(area: Option<Area>, status: MemberStatus, roles: &HashSet<RgRole>) -> bool {
    let Some(area) = area else {
        return true;
    };

    if status == MemberStatus::Inactive {
        return can_inactive_member_access(area);
    }

    // Every allow below is an explicit rule; the match stays exhaustive so a
    // new Area variant forces a decision here rather than falling into a
    // catch-all.
    match area {
        Area::RestrictedAdmin => roles.iter().any(|role| role.is_elevated()),
        Area::Profile
        | Area::Renewal
        | Area::Documents
        | Area::Polls
        | Area::Meetings
        | Area::Actions
        | Area::Communications
        | Area::Finance
        | Area::Governance
        | Area::Notices
        | Area::Settings => true,
    }
}

/// RedirectTarget
///
/// Where a denied request is sent. Inactive viewers go to Renewal (the one
/// area that can restore their standing); active viewers denied for lack of
/// an elevated role go back to Home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Renewal,
    Home,
}

impl RedirectTarget {
    pub fn path(self) -> &'static str {
        match self {
            RedirectTarget::Renewal => "/renewal",
            RedirectTarget::Home => "/",
        }
    }
}

/// redirect_target
///
/// Must stay consistent with the denial cases of `can_access_area`: the only
/// deny for an active viewer is a missing elevated role, which sends them
/// Home; every inactive deny sends them to Renewal.
pub fn redirect_target(status: MemberStatus) -> RedirectTarget {
    match status {
        MemberStatus::Inactive => RedirectTarget::Renewal,
        MemberStatus::Active => RedirectTarget::Home,
    }
}
