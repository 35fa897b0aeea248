// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use hostboard::{
    cli,
    commands::exporter,
    finance::{NewTransaction, TransactionKind},
    fixtures::Fixtures,
    state::Dashboard,
    sync::SyncScheduler,
    utils::fmt_symbol,
};
use rust_decimal_macros::dec;
use serde_json::Value;
use tempfile::tempdir;

fn run_export(args: &[&str]) {
    let dash = Dashboard::new(Fixtures::builtin(), SyncScheduler::default());
    export_from(&dash, args);
}

fn export_from(dash: &Dashboard, args: &[&str]) {
    let mut argv = vec!["hostboard", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(dash, export_m).unwrap();
    } else {
        panic!("export command not parsed");
    }
}

#[test]
fn export_expenses_csv_respects_category() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("expenses.csv");
    let out_str = out.to_string_lossy().to_string();
    run_export(&[
        "expenses",
        "--format",
        "csv",
        "--category",
        "cleaner payments",
        "--out",
        &out_str,
    ]);

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "date", "description", "amount", "category"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    for r in &rows {
        assert_eq!(&r[3], "50.00");
        assert_eq!(&r[4], "cleaner payments");
    }
}

#[test]
fn export_bookings_json_respects_filters() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("bookings.json");
    let out_str = out.to_string_lossy().to_string();
    run_export(&[
        "bookings", "--format", "json", "--status", "paid", "--out", &out_str,
    ]);

    let v: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert!(arr.iter().all(|b| b["status"] == "paid"));
    assert_eq!(arr[0]["guestName"], "John Smith");
}

#[test]
fn export_earnings_csv_has_two_digit_amounts() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("earnings.csv");
    let out_str = out.to_string_lossy().to_string();
    run_export(&["earnings", "--out", &out_str]);

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let amounts: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap()[3].to_string())
        .collect();
    assert_eq!(amounts, vec!["120.00", "95.50", "150.75", "85.25", "110.00"]);
}

#[test]
fn export_rounds_half_cents_like_the_screen() {
    let mut dash = Dashboard::new(Fixtures::builtin(), SyncScheduler::default());
    for amount in [dec!(0.125), dec!(2.675)] {
        dash.record_transaction(NewTransaction {
            kind: TransactionKind::Earning,
            date: NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
            description: "Tip".into(),
            amount,
            category: None,
        })
        .unwrap();
    }
    let dir = tempdir().unwrap();
    let csv_out = dir.path().join("earnings.csv");
    let json_out = dir.path().join("earnings.json");
    export_from(&dash, &["earnings", "--out", &csv_out.to_string_lossy()]);
    export_from(
        &dash,
        &["earnings", "--format", "json", "--out", &json_out.to_string_lossy()],
    );

    let mut rdr = csv::Reader::from_path(&csv_out).unwrap();
    let amounts: Vec<String> = rdr
        .records()
        .map(|r| r.unwrap()[3].to_string())
        .collect();
    assert_eq!(amounts[5..], ["0.13", "2.68"]);
    assert_eq!(fmt_symbol(&dec!(0.125), "$"), format!("${}", amounts[5]));

    let v: Value = serde_json::from_str(&std::fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(v[5]["amount"], "0.13");
    assert_eq!(v[6]["amount"], "2.68");
}
