// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::Dashboard;
use crate::summary::{overview, platform_distribution};
use crate::utils::{fmt_symbol, maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

pub fn handle(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let cards = overview(dash.bookings(), dash.listings());
    let dist = platform_distribution(dash.bookings());
    let payload = json!({ "overview": cards, "distribution": dist });
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payload)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(
            &["Total Bookings", "Occupancy Rate", "Total Revenue", "Pending Inquiries"],
            vec![vec![
                cards.total_bookings.to_string(),
                format!("{}%", cards.occupancy_rate),
                fmt_symbol(&cards.total_revenue, dash.currency_symbol()),
                cards.pending_inquiries.to_string(),
            ]],
        )
    );
    let rows = dist
        .into_iter()
        .map(|s| {
            vec![
                s.platform.label().to_string(),
                s.bookings.to_string(),
                format!("{}%", s.percent),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Platform", "Bookings", "Share"], rows));
    Ok(())
}
