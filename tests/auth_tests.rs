// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use outlay::auth::{check_email, AuthClient, AuthError, AuthResponse};
use outlay::session::Session;

#[test]
fn success_response_decodes_camel_case_tokens() {
    let body = r#"{
        "success": true,
        "message": "Login successful",
        "data": {
            "user": {"id": "u-1", "email": "dana@example.com", "name": "Dana"},
            "accessToken": "at-123",
            "refreshToken": "rt-456"
        }
    }"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert!(resp.success);
    let data = resp.data.unwrap();
    assert_eq!(data.user.name, "Dana");
    assert_eq!(data.access_token, "at-123");
    assert_eq!(data.refresh_token, "rt-456");
}

#[test]
fn error_response_decodes_without_data() {
    let body = r#"{"success": false, "message": "Invalid credentials"}"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert!(!resp.success);
    assert_eq!(resp.message, "Invalid credentials");
    assert!(resp.data.is_none());
}

#[test]
fn session_is_built_from_auth_data() {
    let body = r#"{
        "success": true,
        "message": "ok",
        "data": {
            "user": {"id": "u-9", "email": "lee@example.com", "name": "Lee"},
            "accessToken": "a",
            "refreshToken": "r"
        }
    }"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    let session = Session::from(resp.data.unwrap());
    assert_eq!(session.user.id, "u-9");
    assert_eq!(session.access_token, "a");
    assert_eq!(session.refresh_token, "r");
}

#[test]
fn email_validation_runs_before_any_request() {
    assert!(check_email("dana@example.com").is_ok());
    assert!(matches!(
        check_email("not-an-email"),
        Err(AuthError::Validation { field: "email", .. })
    ));
    assert!(matches!(
        check_email(""),
        Err(AuthError::Validation { field: "email", .. })
    ));

    // Client-side validation fails without touching the network.
    let client = AuthClient::new("http://localhost:1/api").unwrap();
    assert!(matches!(
        client.login("bad", "pw"),
        Err(AuthError::Validation { .. })
    ));
    assert!(matches!(
        client.login("dana@example.com", ""),
        Err(AuthError::Validation { .. })
    ));
    assert!(matches!(
        client.register(" ", "dana@example.com", "pw"),
        Err(AuthError::Validation { field: "name", .. })
    ));
}
