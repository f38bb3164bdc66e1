// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use outlay::auth::AuthClient;
use outlay::models::demo_expenses;
use outlay::store::ExpenseStore;
use outlay::utils::split_words;
use outlay::{cli, commands, session};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let api_url = matches
        .get_one::<String>("api")
        .cloned()
        .or_else(|| std::env::var("OUTLAY_API_URL").ok());
    let client = match api_url {
        Some(url) => Some(AuthClient::new(&url)?),
        None => None,
    };

    // Expenses are tagged with the signed-in user when a session exists, and
    // with the demo owner otherwise.
    let owner = session::load()?
        .map(|s| s.user.id)
        .unwrap_or_else(|| "demo".to_string());
    let mut store = ExpenseStore::new(&owner);
    if matches.get_flag("demo") {
        seed_demo(&mut store);
    }

    println!("Outlay session. Expenses live in memory until you quit.");
    println!("Type 'help' for commands, 'quit' to exit.");

    let stdin = std::io::stdin();
    let mut out = std::io::stdout();
    loop {
        print!("outlay> ");
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let words = match split_words(line) {
            Ok(w) => w,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        let matches = match cli::build_shell().try_get_matches_from(words) {
            Ok(m) => m,
            Err(err) => {
                // clap renders its own help/usage/error text.
                print!("{}", err.render());
                continue;
            }
        };
        let done = dispatch(&mut store, client.as_ref(), &matches);
        match done {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => eprintln!("Error: {:#}", err),
        }
    }
    Ok(())
}

fn dispatch(
    store: &mut ExpenseStore,
    client: Option<&AuthClient>,
    matches: &clap::ArgMatches,
) -> Result<bool> {
    match matches.subcommand() {
        Some(("expense", sub)) => commands::expenses::handle(store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(store, sub)?,
        Some(("chart", sub)) => commands::summary::chart(store, sub)?,
        Some(("auth", sub)) => commands::auth::handle(client, sub)?,
        Some(("demo", _)) => seed_demo(store),
        Some(("quit", _)) => return Ok(true),
        _ => {
            cli::build_shell().print_help()?;
            println!();
        }
    }
    Ok(false)
}

fn seed_demo(store: &mut ExpenseStore) {
    let inputs = demo_expenses();
    println!("Seeded {} demo expenses", inputs.len());
    for input in inputs {
        store.add(input);
    }
}
