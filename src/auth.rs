use std::collections::HashSet;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    policy::{self, MemberStatus, RgRole},
};

/// AppMetadata
///
/// Server-controlled claim block inside the provider-issued JWT, carrying the
/// membership status and Representative Group roles set by admin tooling.
/// The shape of these values is not guaranteed, so everything here is
/// optional and normalized before use.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Raw membership status: expected "active" | "inactive".
    #[serde(default)]
    pub ow_member_status: Option<String>,
    /// Raw RG role names held by the member.
    #[serde(default)]
    pub ow_rg_roles: Option<Vec<String>>,
}

/// Claims
///
/// Represents the standard payload structure expected inside a JSON Web Token
/// (JWT). These claims are signed by the identity provider's secret and
/// validated upon every authenticated request.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): The UUID of the member.
    pub sub: Uuid,
    /// Expiration Time (exp): Timestamp after which the JWT must not be accepted.
    pub exp: usize,
    /// Issued At (iat): Timestamp when the JWT was issued.
    pub iat: usize,
    /// Provider-managed metadata carrying status and roles.
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

/// Viewer
///
/// The authenticated identity under evaluation for a single request. Built
/// from provider claims, never persisted, and with no lifecycle beyond the
/// access check it serves.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub id: Uuid,
    pub member_status: MemberStatus,
    pub rg_roles: HashSet<RgRole>,
}

impl Viewer {
    /// from_claims
    ///
    /// Normalizes raw claim values into a well-typed viewer: an unknown
    /// status string collapses to `Inactive`, unrecognized role strings are
    /// dropped, and duplicate roles collapse. After this point the policy
    /// functions operate on closed enumerations only.
    pub fn from_claims(claims: Claims) -> Self {
        let member_status =
            MemberStatus::normalize(claims.app_metadata.ow_member_status.as_deref());

        let rg_roles = policy::parse_rg_roles(
            claims
                .app_metadata
                .ow_rg_roles
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(String::as_str),
        );

        Viewer {
            id: claims.sub,
            member_status,
            rg_roles,
        }
    }

    /// has_elevated_role
    ///
    /// True if the viewer holds at least one elected officer role.
    pub fn has_elevated_role(&self) -> bool {
        self.rg_roles.iter().any(|role| role.is_elevated())
    }
}

/// Viewer Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making Viewer usable as a
/// function argument in any gated handler or middleware. This separates
/// identity resolution (extractor) from the access decision (policy module)
/// and from business logic (the handlers).
///
/// The process involves:
/// 1. Dependency Resolution: Accessing AppConfig from the application state.
/// 2. Local Bypass: Allowing development-time access using identity headers.
/// 3. Token Validation: Standard Bearer token extraction and JWT decoding.
/// 4. Claim Normalization: Collapsing malformed status/roles to safe values.
///
/// Rejection: Returns StatusCode::UNAUTHORIZED (401) on any failure.
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        // Local Development Bypass Check
        // In Env::Local, identity may be supplied via the 'x-user-id' header
        // plus optional 'x-member-status' / 'x-rg-roles' headers. Guarded by
        // the Env check; never honored in production.
        if config.env == Env::Local {
            if let Some(viewer) = viewer_from_bypass_headers(parts) {
                return Ok(viewer);
            }
        }
        // If Env is Production, or the bypass headers were absent/invalid,
        // execution falls through to the standard JWT validation flow.

        // Token Extraction
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        // JWT Decoding Setup
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::default();
        validation.validate_exp = true;

        // Decode and Validate the Token
        let token_data = match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                match e.kind() {
                    // Token expired: the most common failure for a valid-but-old token.
                    ErrorKind::ExpiredSignature => return Err(StatusCode::UNAUTHORIZED),
                    // Catch all other failure types (bad signature, malformed token, etc.).
                    _ => return Err(StatusCode::UNAUTHORIZED),
                }
            }
        };

        // Success: normalize claims into the resolved identity.
        Ok(Viewer::from_claims(token_data.claims))
    }
}

/// viewer_from_bypass_headers
///
/// Reads the development bypass headers. Status and roles go through the same
/// normalization as real claims, so a typo in a header still lands on the
/// restrictive default (inactive, no roles).
fn viewer_from_bypass_headers(parts: &Parts) -> Option<Viewer> {
    let id = parts.headers.get("x-user-id")?.to_str().ok()?;
    let id = Uuid::parse_str(id).ok()?;

    let member_status = MemberStatus::normalize(
        parts
            .headers
            .get("x-member-status")
            .and_then(|value| value.to_str().ok()),
    );

    let rg_roles = parts
        .headers
        .get("x-rg-roles")
        .and_then(|value| value.to_str().ok())
        .map(|value| policy::parse_rg_roles(value.split(',').map(str::trim)))
        .unwrap_or_default();

    Some(Viewer {
        id,
        member_status,
        rg_roles,
    })
}
