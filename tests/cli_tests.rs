// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use outlay::cli;
use outlay::commands::expenses;
use outlay::models::Category;
use outlay::store::{ExpenseStore, ListOptions, SortKey};
use outlay::utils::split_words;

fn shell_matches(args: &[&str]) -> clap::ArgMatches {
    cli::build_shell()
        .try_get_matches_from(args.iter().copied())
        .unwrap()
}

#[test]
fn add_via_shell_command_lands_in_store() {
    let mut store = ExpenseStore::new("demo");
    let matches = shell_matches(&[
        "expense", "add", "--title", "Gas Station", "--amount", "45.00", "--category",
        "transport", "--date", "2024-01-14",
    ]);
    if let Some(("expense", sub)) = matches.subcommand() {
        expenses::handle(&mut store, sub).unwrap();
    } else {
        panic!("no expense subcommand");
    }
    let listed = store.list(ListOptions::default());
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Gas Station");
    assert_eq!(listed[0].category, Category::Transport);
}

#[test]
fn list_flags_map_to_options() {
    let matches = shell_matches(&[
        "expense", "list", "--category", "Food", "--sort", "amount", "--desc",
    ]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let Some(("list", list_m)) = sub.subcommand() else {
        panic!("no list subcommand");
    };
    let opts = expenses::list_options(list_m).unwrap();
    assert_eq!(opts.category, Some(Category::Food));
    assert_eq!(opts.sort, Some(SortKey::Amount));
    assert!(opts.descending);
}

#[test]
fn add_requires_every_field() {
    let err = cli::build_shell()
        .try_get_matches_from(["expense", "add", "--title", "Coffee"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn invalid_amount_is_rejected() {
    let mut store = ExpenseStore::new("demo");
    for bad in ["-5.00", "12.345", "abc", "1,50"] {
        let matches = shell_matches(&[
            "expense", "add", "--title", "X", "--amount", bad, "--category", "Food", "--date",
            "2024-01-14",
        ]);
        let Some(("expense", sub)) = matches.subcommand() else {
            panic!("no expense subcommand");
        };
        assert!(expenses::handle(&mut store, sub).is_err(), "accepted {}", bad);
    }
    assert!(store.is_empty());
}

#[test]
fn unknown_category_is_rejected() {
    let mut store = ExpenseStore::new("demo");
    let matches = shell_matches(&[
        "expense", "add", "--title", "X", "--amount", "5.00", "--category", "Groceries",
        "--date", "2024-01-14",
    ]);
    let Some(("expense", sub)) = matches.subcommand() else {
        panic!("no expense subcommand");
    };
    let err = expenses::handle(&mut store, sub).unwrap_err();
    assert!(err.to_string().contains("Unknown category"));
}

#[test]
fn split_words_honors_quotes() {
    let words = split_words(r#"expense add --title "Grocery Shopping" --amount 85.50"#).unwrap();
    assert_eq!(
        words,
        ["expense", "add", "--title", "Grocery Shopping", "--amount", "85.50"]
    );
}

#[test]
fn split_words_rejects_unclosed_quote() {
    assert!(split_words(r#"expense add --title "Grocery"#).is_err());
}
