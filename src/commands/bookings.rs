// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bookings::{EMPTY_STATE, StatusFilter};
use crate::models::Booking;
use crate::state::Dashboard;
use crate::utils::{fmt_date, fmt_symbol, maybe_print_json, styled_table};
use anyhow::{Result, anyhow};
use comfy_table::Cell;
use log::debug;

pub fn handle(dash: &Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(dash, sub)?,
        _ => {}
    }
    Ok(())
}

/// Status and search as given on the command line.
pub fn filter_args(sub: &clap::ArgMatches) -> Result<(StatusFilter, String)> {
    let status = sub
        .get_one::<String>("status")
        .map(|s| s.as_str())
        .unwrap_or("all")
        .parse::<StatusFilter>()
        .map_err(|e| anyhow!(e))?;
    let search = sub.get_one::<String>("search").cloned().unwrap_or_default();
    Ok((status, search))
}

pub fn query_rows<'a>(dash: &'a Dashboard, sub: &clap::ArgMatches) -> Result<Vec<&'a Booking>> {
    let (status, search) = filter_args(sub)?;
    debug!("bookings: status={} search={:?}", status, search);
    Ok(dash.filtered_bookings(status, &search))
}

fn list(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(dash, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &crate::bookings::rows(&data, dash.currency_symbol()))? {
        return Ok(());
    }
    if data.is_empty() {
        println!("{}", EMPTY_STATE);
        return Ok(());
    }
    let sym = dash.currency_symbol();
    let rows: Vec<Vec<Cell>> = data
        .iter()
        .map(|b| {
            vec![
                Cell::new(&b.guest_name),
                Cell::new(&b.property),
                Cell::new(format!("{} - {}", fmt_date(b.check_in), fmt_date(b.check_out))),
                Cell::new(b.platform.label()).fg(b.platform.color()),
                Cell::new(b.status.label()).fg(b.status.color()),
                Cell::new(b.guests),
                Cell::new(fmt_symbol(&b.amount, sym)),
            ]
        })
        .collect();
    println!(
        "{}",
        styled_table(
            &["Guest", "Property", "Dates", "Platform", "Status", "Guests", "Amount"],
            rows,
        )
    );
    Ok(())
}
