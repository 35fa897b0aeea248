// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::bookings::query_rows as booking_rows;
use crate::commands::finance::category_arg;
use crate::models::Transaction;
use crate::state::Dashboard;
use crate::utils::fmt_amount;
use anyhow::{Context, Result};
use serde_json::json;

pub fn handle(dash: &Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("bookings", sub)) => export_bookings(dash, sub),
        Some(("earnings", sub)) => {
            let data: Vec<&Transaction> = dash.earnings().iter().collect();
            export_transactions(&data, sub, "earnings")
        }
        Some(("expenses", sub)) => {
            let data = dash.filtered_expenses(&category_arg(sub));
            export_transactions(&data, sub, "expenses")
        }
        _ => Ok(()),
    }
}

fn target(sub: &clap::ArgMatches) -> Result<(String, String)> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = sub.get_one::<String>("out").context("--out is required")?.clone();
    Ok((fmt, out))
}

fn export_bookings(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = target(sub)?;
    let rows = booking_rows(dash, sub)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)
                .with_context(|| format!("Open {} for writing", out))?;
            wtr.write_record([
                "id", "guest", "property", "check_in", "check_out", "platform", "status", "guests",
                "amount",
            ])?;
            for b in &rows {
                wtr.write_record([
                    b.id.clone(),
                    b.guest_name.clone(),
                    b.property.clone(),
                    b.check_in.to_string(),
                    b.check_out.to_string(),
                    b.platform.label().to_string(),
                    b.status.label().to_lowercase(),
                    b.guests.to_string(),
                    fmt_amount(&b.amount),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(&out, serde_json::to_string_pretty(&rows)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} bookings to {}", rows.len(), out);
    Ok(())
}

fn export_transactions(data: &[&Transaction], sub: &clap::ArgMatches, what: &str) -> Result<()> {
    let (fmt, out) = target(sub)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)
                .with_context(|| format!("Open {} for writing", out))?;
            wtr.write_record(["id", "date", "description", "amount", "category"])?;
            for t in data {
                wtr.write_record([
                    t.id.clone(),
                    t.date.to_string(),
                    t.description.clone(),
                    fmt_amount(&t.amount),
                    t.category.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = data
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id, "date": t.date, "description": t.description,
                        "amount": fmt_amount(&t.amount), "category": t.category
                    })
                })
                .collect();
            std::fs::write(&out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Write {}", out))?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} {} to {}", data.len(), what, out);
    Ok(())
}
