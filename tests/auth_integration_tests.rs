use axum::{
    extract::FromRequestParts,
    http::{Method, Request, StatusCode, Uri, header, request::Parts},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use owensfield_portal::{
    AppState,
    auth::{AppMetadata, Claims, Viewer},
    config::{AppConfig, Env},
    policy::{MemberStatus, RgRole},
};
use std::time::SystemTime;
use uuid::Uuid;

// --- Helper Functions ---

const TEST_JWT_SECRET: &str = "test-secret-value-1234567890";
const TEST_USER_ID: Uuid = Uuid::from_u128(1);

fn now_epoch() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Builds a signed token with the given expiry offset (seconds, may be
/// negative to produce an already-expired token) and raw claim values.
fn create_token(user_id: Uuid, exp_offset: i64, status: Option<&str>, rg_roles: &[&str]) -> String {
    let now = now_epoch();

    let claims = Claims {
        sub: user_id,
        iat: now as usize,
        exp: (now + exp_offset).max(0) as usize,
        app_metadata: AppMetadata {
            ow_member_status: status.map(str::to_string),
            ow_rg_roles: Some(rg_roles.iter().map(|role| role.to_string()).collect()),
        },
    };

    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    encode(&Header::default(), &claims, &key).unwrap()
}

fn create_app_state(env: Env, jwt_secret: &str) -> AppState {
    let mut config = AppConfig::default();
    config.env = env;
    config.jwt_secret = jwt_secret.to_string();
    AppState { config }
}

/// Helper to get the mutable Parts struct from a generated Request
fn get_request_parts(method: Method, uri: Uri) -> Parts {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let (parts, _) = request.into_parts();
    parts
}

fn bearer(parts: &mut Parts, token: &str) {
    parts.headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
}

// --- JWT Flow Tests ---

#[tokio::test]
async fn test_viewer_resolution_with_valid_jwt() {
    let token = create_token(TEST_USER_ID, 3600, Some("active"), &["chair"]);
    let app_state = create_app_state(Env::Production, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/rg".parse().unwrap());
    bearer(&mut parts, &token);

    let viewer = Viewer::from_request_parts(&mut parts, &app_state).await;

    assert!(viewer.is_ok());
    let viewer = viewer.unwrap();
    assert_eq!(viewer.id, TEST_USER_ID);
    assert_eq!(viewer.member_status, MemberStatus::Active);
    assert!(viewer.rg_roles.contains(&RgRole::Chair));
    assert!(viewer.has_elevated_role());
}

#[tokio::test]
async fn test_rejection_with_missing_header() {
    let app_state = create_app_state(Env::Production, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());

    let viewer = Viewer::from_request_parts(&mut parts, &app_state).await;

    assert!(viewer.is_err());
    assert_eq!(viewer.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejection_with_expired_jwt() {
    // Offset chosen well beyond the default validation leeway.
    let token = create_token(TEST_USER_ID, -3600, Some("active"), &[]);
    let app_state = create_app_state(Env::Production, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    bearer(&mut parts, &token);

    let viewer = Viewer::from_request_parts(&mut parts, &app_state).await;

    assert!(viewer.is_err());
    assert_eq!(viewer.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejection_with_wrong_secret() {
    let token = create_token(TEST_USER_ID, 3600, Some("active"), &[]);
    let app_state = create_app_state(Env::Production, "a-different-secret-entirely");

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    bearer(&mut parts, &token);

    let viewer = Viewer::from_request_parts(&mut parts, &app_state).await;

    assert!(viewer.is_err());
    assert_eq!(viewer.unwrap_err(), StatusCode::UNAUTHORIZED);
}

// --- Claim Normalization Tests ---

#[tokio::test]
async fn test_unknown_status_normalizes_to_inactive() {
    let token = create_token(TEST_USER_ID, 3600, Some("suspended"), &["treasurer"]);
    let app_state = create_app_state(Env::Production, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    bearer(&mut parts, &token);

    let viewer = Viewer::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap();

    // Unknown status must land on the restrictive default, while the
    // recognized role is still parsed.
    assert_eq!(viewer.member_status, MemberStatus::Inactive);
    assert!(viewer.rg_roles.contains(&RgRole::Treasurer));
}

#[tokio::test]
async fn test_unknown_roles_are_dropped_and_duplicates_collapse() {
    let token = create_token(
        TEST_USER_ID,
        3600,
        Some("active"),
        &["secretary", "secretary", "president", "rg_overlord"],
    );
    let app_state = create_app_state(Env::Production, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    bearer(&mut parts, &token);

    let viewer = Viewer::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap();

    assert_eq!(viewer.rg_roles.len(), 1);
    assert!(viewer.rg_roles.contains(&RgRole::Secretary));
}

#[tokio::test]
async fn test_missing_app_metadata_defaults_to_inactive_and_no_roles() {
    // A token with no app_metadata block at all, as a provider might issue
    // before admin tooling has tagged the account.
    let now = now_epoch();
    let key = EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes());
    let token = encode(
        &Header::default(),
        &serde_json::json!({
            "sub": TEST_USER_ID,
            "iat": now,
            "exp": now + 3600,
        }),
        &key,
    )
    .unwrap();

    let app_state = create_app_state(Env::Production, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    bearer(&mut parts, &token);

    let viewer = Viewer::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap();

    assert_eq!(viewer.member_status, MemberStatus::Inactive);
    assert!(viewer.rg_roles.is_empty());
}

// --- Local Bypass Tests ---

#[tokio::test]
async fn test_local_bypass_success() {
    let mock_user_id = Uuid::new_v4();
    let app_state = create_app_state(Env::Local, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&mock_user_id.to_string()).unwrap(),
    );
    parts.headers.insert(
        header::HeaderName::from_static("x-member-status"),
        header::HeaderValue::from_static("active"),
    );
    parts.headers.insert(
        header::HeaderName::from_static("x-rg-roles"),
        header::HeaderValue::from_static("treasurer, secretary"),
    );

    let viewer = Viewer::from_request_parts(&mut parts, &app_state).await;

    assert!(viewer.is_ok());
    let viewer = viewer.unwrap();
    assert_eq!(viewer.id, mock_user_id);
    assert_eq!(viewer.member_status, MemberStatus::Active);
    assert!(viewer.rg_roles.contains(&RgRole::Treasurer));
    assert!(viewer.rg_roles.contains(&RgRole::Secretary));
}

#[tokio::test]
async fn test_local_bypass_defaults_are_restrictive() {
    // Only the id header: status and roles must fall back to inactive/empty.
    let mock_user_id = Uuid::new_v4();
    let app_state = create_app_state(Env::Local, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&mock_user_id.to_string()).unwrap(),
    );

    let viewer = Viewer::from_request_parts(&mut parts, &app_state)
        .await
        .unwrap();

    assert_eq!(viewer.member_status, MemberStatus::Inactive);
    assert!(viewer.rg_roles.is_empty());
    assert!(!viewer.has_elevated_role());
}

#[tokio::test]
async fn test_local_bypass_disabled_in_prod() {
    let mock_user_id = Uuid::new_v4();
    let app_state = create_app_state(Env::Production, TEST_JWT_SECRET);

    let mut parts = get_request_parts(Method::GET, "/".parse().unwrap());
    // Provide ONLY the local bypass header
    parts.headers.insert(
        header::HeaderName::from_static("x-user-id"),
        header::HeaderValue::from_str(&mock_user_id.to_string()).unwrap(),
    );

    let viewer = Viewer::from_request_parts(&mut parts, &app_state).await;

    assert!(viewer.is_err());
    assert_eq!(viewer.unwrap_err(), StatusCode::UNAUTHORIZED);
}
