// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Thin client for the external auth service. Each operation is a single
//! request/response exchange; there is no retry, token refresh, or session
//! expiry handling.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::http_client;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("{0}")]
    Remote(String),
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Response shape shared by every auth endpoint. `data` is absent on the
/// endpoints that return no token pair.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<AuthData>,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordBody<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct ForgotPasswordBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordBody<'a> {
    token: &'a str,
    new_password: &'a str,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern")
});

pub fn check_email(email: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::Validation {
            field: "email",
            reason: "Please enter your email".to_string(),
        });
    }
    if !EMAIL_RE.is_match(email) {
        return Err(AuthError::Validation {
            field: "email",
            reason: "Enter a valid email".to_string(),
        });
    }
    Ok(())
}

fn check_password(password: &str) -> Result<(), AuthError> {
    if password.is_empty() {
        return Err(AuthError::Validation {
            field: "password",
            reason: "Please enter your password".to_string(),
        });
    }
    Ok(())
}

pub struct AuthClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AuthError> {
        check_email(email)?;
        check_password(password)?;
        self.post(
            "/auth/login",
            &LoginBody { email, password },
            None,
            "Login failed. Please check your credentials.",
        )
    }

    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, AuthError> {
        if name.trim().is_empty() {
            return Err(AuthError::Validation {
                field: "name",
                reason: "Please enter your full name".to_string(),
            });
        }
        check_email(email)?;
        check_password(password)?;
        self.post(
            "/auth/register",
            &RegisterBody {
                name,
                email,
                password,
            },
            None,
            "Registration failed. Please try again.",
        )
    }

    pub fn logout(&self, access_token: &str) -> Result<AuthResponse, AuthError> {
        self.post(
            "/auth/logout",
            &serde_json::json!({}),
            Some(access_token),
            "Logout failed. Please try again.",
        )
    }

    pub fn change_password(
        &self,
        access_token: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<AuthResponse, AuthError> {
        check_password(old_password)?;
        check_password(new_password)?;
        self.post(
            "/auth/change-password",
            &ChangePasswordBody {
                old_password,
                new_password,
            },
            Some(access_token),
            "Password change failed. Please try again.",
        )
    }

    pub fn forgot_password(&self, email: &str) -> Result<AuthResponse, AuthError> {
        check_email(email)?;
        self.post(
            "/auth/forgot-password",
            &ForgotPasswordBody { email },
            None,
            "Request failed. Please try again.",
        )
    }

    pub fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<AuthResponse, AuthError> {
        check_password(new_password)?;
        self.post(
            "/auth/reset-password",
            &ResetPasswordBody {
                token,
                new_password,
            },
            None,
            "Password reset failed. Please try again.",
        )
    }

    fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
        fallback: &str,
    ) -> Result<AuthResponse, AuthError> {
        let mut req = self.http.post(format!("{}{}", self.base_url, path)).json(body);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        let resp = req.send()?;
        let status = resp.status();
        // Error bodies share the response shape; fall back to a generic
        // message when the body is not parseable.
        let parsed: Result<AuthResponse, _> = resp.json();
        match parsed {
            Ok(r) if status.is_success() && r.success => Ok(r),
            Ok(r) if !r.message.is_empty() => Err(AuthError::Remote(r.message)),
            _ => Err(AuthError::Remote(fallback.to_string())),
        }
    }
}
