// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::auth::{AuthClient, AuthError, AuthResponse};
use crate::session::{self, Session};

pub fn handle(client: Option<&AuthClient>, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("login", sub)) => login(configured(client)?, sub)?,
        Some(("register", sub)) => register(configured(client)?, sub)?,
        Some(("logout", _)) => logout(configured(client)?)?,
        Some(("change-password", sub)) => change_password(configured(client)?, sub)?,
        Some(("forgot-password", sub)) => forgot_password(configured(client)?, sub)?,
        Some(("reset-password", sub)) => reset_password(configured(client)?, sub)?,
        Some(("whoami", _)) => whoami()?,
        _ => {}
    }
    Ok(())
}

fn configured(client: Option<&AuthClient>) -> Result<&AuthClient> {
    client.context("No auth service configured; pass --api or set OUTLAY_API_URL")
}

fn required<'a>(sub: &'a ArgMatches, name: &str) -> &'a str {
    // Required args are enforced by clap.
    sub.get_one::<String>(name).unwrap()
}

/// Persists the profile and token pair from a successful exchange under the
/// single session blob.
fn store_session(resp: &AuthResponse) -> Result<()> {
    let data = resp
        .data
        .clone()
        .context("Auth service returned success without user data")?;
    let session = Session::from(data);
    session::save(&session)?;
    println!("Signed in as {} <{}>", session.user.name, session.user.email);
    Ok(())
}

fn login(client: &AuthClient, sub: &ArgMatches) -> Result<()> {
    let resp = client.login(required(sub, "email"), required(sub, "password"))?;
    if !resp.message.is_empty() {
        println!("{}", resp.message);
    }
    store_session(&resp)
}

fn register(client: &AuthClient, sub: &ArgMatches) -> Result<()> {
    let password = required(sub, "password");
    if password != required(sub, "confirm") {
        return Err(AuthError::PasswordMismatch.into());
    }
    let resp = client.register(required(sub, "name"), required(sub, "email"), password)?;
    if !resp.message.is_empty() {
        println!("{}", resp.message);
    }
    store_session(&resp)
}

fn logout(client: &AuthClient) -> Result<()> {
    match session::load()? {
        Some(session) => {
            // The local session is cleared even when the remote call fails;
            // the token may already be invalid on the server side.
            if let Err(err) = client.logout(&session.access_token) {
                eprintln!("{}", err);
            }
            session::clear()?;
            println!("Signed out");
        }
        None => println!("Not signed in"),
    }
    Ok(())
}

fn change_password(client: &AuthClient, sub: &ArgMatches) -> Result<()> {
    let new = required(sub, "new");
    if new != required(sub, "confirm") {
        return Err(AuthError::PasswordMismatch.into());
    }
    let session = session::load()?.context("Not signed in")?;
    let resp = client.change_password(&session.access_token, required(sub, "old"), new)?;
    println!(
        "{}",
        if resp.message.is_empty() {
            "Password changed"
        } else {
            resp.message.as_str()
        }
    );
    Ok(())
}

fn forgot_password(client: &AuthClient, sub: &ArgMatches) -> Result<()> {
    let resp = client.forgot_password(required(sub, "email"))?;
    println!(
        "{}",
        if resp.message.is_empty() {
            "Check your email for a reset link"
        } else {
            resp.message.as_str()
        }
    );
    Ok(())
}

fn reset_password(client: &AuthClient, sub: &ArgMatches) -> Result<()> {
    let resp = client.reset_password(required(sub, "token"), required(sub, "new"))?;
    println!(
        "{}",
        if resp.message.is_empty() {
            "Password reset"
        } else {
            resp.message.as_str()
        }
    );
    Ok(())
}

fn whoami() -> Result<()> {
    match session::load()? {
        Some(session) => println!(
            "{} <{}> (id {})",
            session.user.name, session.user.email, session.user.id
        ),
        None => println!("Not signed in"),
    }
    Ok(())
}
