// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Client-side persisted auth state. One JSON blob under one key: profile
//! plus both tokens travel together, so login and register cannot drift
//! apart in what they persist.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthData, User};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Outlay", "outlay"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

impl From<AuthData> for Session {
    fn from(data: AuthData) -> Self {
        Self {
            user: data.user,
            access_token: data.access_token,
            refresh_token: data.refresh_token,
        }
    }
}

pub fn session_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("session.json"))
}

pub fn save(session: &Session) -> Result<()> {
    save_at(&session_path()?, session)
}

pub fn load() -> Result<Option<Session>> {
    load_at(&session_path()?)
}

pub fn clear() -> Result<()> {
    clear_at(&session_path()?)
}

pub fn save_at(path: &Path, session: &Session) -> Result<()> {
    let body = serde_json::to_string_pretty(session)?;
    fs::write(path, body).with_context(|| format!("Write session at {}", path.display()))?;
    Ok(())
}

pub fn load_at(path: &Path) -> Result<Option<Session>> {
    if !path.exists() {
        return Ok(None);
    }
    let body =
        fs::read_to_string(path).with_context(|| format!("Read session at {}", path.display()))?;
    let session = serde_json::from_str(&body)
        .with_context(|| format!("Malformed session at {}", path.display()))?;
    Ok(Some(session))
}

pub fn clear_at(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Remove session at {}", path.display()))?;
    }
    Ok(())
}
