// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::listings::platform_name_for;
use crate::models::Listing;
use crate::state::Dashboard;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(dash: &Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(dash, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ListingRow {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub status: String,
    pub guest: String,
    pub dates: String,
    pub rate: String,
}

pub fn query_rows<'a>(dash: &'a Dashboard, sub: &clap::ArgMatches) -> Vec<&'a Listing> {
    let selected = sub.get_one::<String>("platform").map(|s| s.trim());
    dash.listings_for(selected)
}

fn list(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let selected = sub.get_one::<String>("platform").map(|s| s.trim());
    let data: Vec<ListingRow> = query_rows(dash, sub)
        .into_iter()
        .map(|l| ListingRow {
            id: l.id.clone(),
            name: l.name.clone(),
            platform: platform_name_for(dash.platforms(), l).to_string(),
            status: l.hosting_status.label().to_string(),
            guest: l.guest_name.clone().unwrap_or_default(),
            dates: l.date_range.clone(),
            rate: format!("{} / night", fmt_money(&l.rate, &l.currency)),
        })
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    println!("{} ({} listing(s))", dash.selected_platform_name(selected), data.len());
    let rows = data
        .into_iter()
        .map(|r| vec![r.name, r.platform, r.status, r.guest, r.dates, r.rate])
        .collect();
    println!(
        "{}",
        pretty_table(&["Listing", "Platform", "Status", "Guest", "Dates", "Rate"], rows)
    );
    Ok(())
}
