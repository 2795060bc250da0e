use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::policy::{Area, MemberStatus, RgRole};

// --- Response Schemas ---

/// SectionPage
///
/// Placeholder payload for a portal section. The web client renders these
/// until the real feature behind a section ships; the gate in front of the
/// route is the part that already works.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SectionPage {
    /// The logical area this section belongs to for access purposes.
    /// `None` for home-area pages (home itself, archives).
    pub area: Option<Area>,
    pub title: String,
    pub note: String,
}

impl SectionPage {
    pub fn new(area: Option<Area>, title: &str, note: &str) -> Self {
        Self {
            area,
            title: title.to_string(),
            note: note.to_string(),
        }
    }
}

/// ViewerProfile
///
/// Output schema for the authenticated member's own view (GET /me): the
/// normalized identity the gate evaluated for this request.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ViewerProfile {
    pub id: Uuid,
    pub member_status: MemberStatus,
    /// Sorted for stable output; the underlying roles are a set.
    pub rg_roles: Vec<RgRole>,
    /// Whether any held role unlocks the RG admin area.
    pub has_elevated_role: bool,
}
