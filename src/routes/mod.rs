/// Router Module Index
///
/// Organizes the application's routing logic into security-segregated
/// modules. Access control is applied explicitly at the module level (via
/// Axum layers), preventing accidental exposure of gated sections.

/// Routes accessible with no credentials: health probe and the login
/// placeholder, the redirect target for unauthenticated visitors.
pub mod public;

/// Member-facing portal sections, protected by the area gate middleware.
/// Which sections a member actually reaches depends on status and roles.
pub mod member;

/// Representative Group admin tooling, nested under `/rg`. The area gate
/// requires an elevated role for the whole subtree; handlers re-check.
pub mod rg;
