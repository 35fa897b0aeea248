// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use hostboard::{
    cli,
    commands::{self, bookings, listings, shell},
    fixtures::Fixtures,
    models::ConnectionStatus,
    state::Dashboard,
    sync::SyncScheduler,
};
use std::io::Cursor;

fn dashboard() -> Dashboard {
    Dashboard::new(Fixtures::builtin(), SyncScheduler::with_delay_ms(60_000))
}

#[test]
fn bookings_list_applies_status_and_search() {
    let dash = dashboard();
    let matches = cli::build_cli().get_matches_from([
        "hostboard", "bookings", "list", "--status", "paid", "--search", "LAKE",
    ]);
    if let Some(("bookings", b_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = b_m.subcommand() {
            let rows = bookings::query_rows(&dash, list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].guest_name, "David Wilson");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no bookings subcommand");
    }
}

#[test]
fn bookings_status_rejects_unknown_values() {
    let res = cli::build_cli().try_get_matches_from([
        "hostboard", "bookings", "list", "--status", "pending",
    ]);
    assert!(res.is_err());
}

#[test]
fn listings_list_scopes_by_platform() {
    let dash = dashboard();
    let matches =
        cli::build_cli().get_matches_from(["hostboard", "listings", "list", "--platform", "1"]);
    if let Some(("listings", l_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = l_m.subcommand() {
            assert_eq!(listings::query_rows(&dash, list_m).len(), 3);
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no listings subcommand");
    }
}

#[test]
fn dispatch_rejected_toggle_is_an_error() {
    let mut dash = dashboard();
    let matches = cli::build_cli().get_matches_from([
        "hostboard", "platforms", "auto-sync", "--id", "4",
    ]);
    let err = commands::dispatch(&mut dash, &matches).unwrap_err();
    assert!(err.to_string().contains("requires a connected platform"));
    assert!(!dash.platforms()[3].auto_sync);
}

#[test]
fn dispatch_reports_unmatched_commands() {
    let mut dash = dashboard();
    let matches = cli::build_cli().get_matches_from(["hostboard"]);
    assert!(!commands::dispatch(&mut dash, &matches).unwrap());
}

#[test]
fn shell_keeps_state_between_commands() {
    let mut dash = dashboard();
    let script = "\
platforms toggle --id 4
platforms auto-sync --id 4
finance add --type earning --date 2023-06-20 --description \"Agoda Reservation #1111\" --amount 38.50
bogus command
platforms sync
platforms sync
exit
platforms toggle --id 1
";
    let mut prompt = Vec::new();
    shell::run(&mut dash, Cursor::new(script), &mut prompt).unwrap();

    let agoda = &dash.platforms()[3];
    assert_eq!(agoda.status, ConnectionStatus::Connected);
    assert!(agoda.auto_sync);
    assert_eq!(dash.earnings().len(), 6);
    assert_eq!(dash.earnings()[5].description, "Agoda Reservation #1111");
    // stopped at `exit`
    assert_eq!(dash.platforms()[0].status, ConnectionStatus::Connected);
    // the pending sync was cancelled on the way out
    assert!(!dash.sync().in_progress());
    assert!(String::from_utf8(prompt).unwrap().starts_with("hostboard> "));
}

#[test]
fn one_shot_sync_without_wait_is_discarded_at_exit() {
    let mut dash = dashboard();
    let matches = cli::build_cli().get_matches_from(["hostboard", "platforms", "sync"]);
    assert!(commands::dispatch(&mut dash, &matches).unwrap());
    assert!(dash.sync().in_progress());
    assert!(commands::finish(&mut dash));
    assert!(!dash.sync().in_progress());
    assert!(!commands::finish(&mut dash));
    assert_eq!(dash.platforms(), Fixtures::builtin().platforms.as_slice());
}

#[test]
fn shell_refuses_startup_flags() {
    let m = cli::build_cli()
        .get_matches_from(["hostboard", "--fixtures", "seed.json", "bookings", "list"]);
    assert_eq!(shell::startup_flag(&m), Some("fixtures"));
    let m = cli::build_cli()
        .get_matches_from(["hostboard", "platforms", "list", "--config", "other.json"]);
    assert_eq!(shell::startup_flag(&m), Some("config"));
    let m = cli::build_cli().get_matches_from(["hostboard", "platforms", "list"]);
    assert_eq!(shell::startup_flag(&m), None);

    let mut dash = dashboard();
    let script = "--config other.json platforms toggle --id 1\n";
    shell::run(&mut dash, Cursor::new(script), &mut Vec::new()).unwrap();
    assert_eq!(dash.platforms()[0].status, ConnectionStatus::Connected);
}
