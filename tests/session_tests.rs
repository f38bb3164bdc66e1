// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use outlay::auth::User;
use outlay::session::{clear_at, load_at, save_at, Session};

fn sample() -> Session {
    Session {
        user: User {
            id: "u-42".to_string(),
            email: "dana@example.com".to_string(),
            name: "Dana".to_string(),
        },
        access_token: "access-abc".to_string(),
        refresh_token: "refresh-xyz".to_string(),
    }
}

#[test]
fn session_round_trips_profile_and_both_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    save_at(&path, &sample()).unwrap();
    let loaded = load_at(&path).unwrap().unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn missing_session_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    assert!(load_at(&path).unwrap().is_none());
}

#[test]
fn clear_removes_the_blob() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    save_at(&path, &sample()).unwrap();
    clear_at(&path).unwrap();
    assert!(load_at(&path).unwrap().is_none());
    // Clearing twice is fine.
    clear_at(&path).unwrap();
}

#[test]
fn malformed_blob_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(load_at(&path).is_err());
}
