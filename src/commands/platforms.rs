// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Platform;
use crate::platforms::{ERROR_BANNER, any_errors};
use crate::state::Dashboard;
use crate::sync::SyncTrigger;
use crate::utils::{fmt_sync_time, maybe_print_json, styled_table};
use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Cell;
use log::info;

pub fn handle(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(dash, sub)?,
        Some(("toggle", sub)) => {
            let id = required_id(sub)?;
            let p = dash.toggle_connection(id)?;
            println!("{} is now {}", p.name, p.status.label());
        }
        Some(("auto-sync", sub)) => {
            let id = required_id(sub)?;
            let p = dash.toggle_auto_sync(id)?;
            println!(
                "Auto sync {} for {}",
                if p.auto_sync { "enabled" } else { "disabled" },
                p.name
            );
        }
        Some(("add", sub)) => {
            let name = sub
                .get_one::<String>("name")
                .context("--name is required")?;
            let p = dash.add_platform(name, sub.get_flag("auto-sync"))?;
            println!("Added platform '{}' (id {})", p.name, p.id);
        }
        Some(("sync", sub)) => sync(dash, sub.get_flag("wait"))?,
        _ => {}
    }
    Ok(())
}

fn required_id(sub: &clap::ArgMatches) -> Result<&str> {
    sub.get_one::<String>("id")
        .map(|s| s.trim())
        .context("--id is required")
}

fn sync(dash: &mut Dashboard, wait: bool) -> Result<()> {
    let due_at = match dash.trigger_sync(Utc::now()) {
        SyncTrigger::AlreadyRunning { due_at } => {
            println!("Sync already in progress (due {})", due_at.format("%H:%M:%S"));
            return Ok(());
        }
        SyncTrigger::Started { due_at } => due_at,
    };
    println!("Syncing...");
    if !wait {
        return Ok(());
    }
    let remaining = (due_at - Utc::now()).to_std().unwrap_or_default();
    info!("waiting {:?} for sync", remaining);
    std::thread::sleep(remaining);
    if let Some(done) = dash.poll_sync(Utc::now().max(due_at)) {
        let n = dash.platforms().iter().filter(|p| p.is_connected()).count();
        println!("Synced {} connected platform(s) at {}", n, fmt_sync_time(Some(done)));
    }
    Ok(())
}

pub fn platform_cells(p: &Platform) -> Vec<Cell> {
    vec![
        Cell::new(&p.id),
        Cell::new(&p.name),
        Cell::new(p.status.label()).fg(p.status.color()),
        Cell::new(fmt_sync_time(p.last_sync)),
        Cell::new(match (p.auto_sync, p.is_connected()) {
            (true, true) => "on",
            (false, true) => "off",
            (true, false) => "on (inactive)",
            (false, false) => "off (inactive)",
        }),
    ]
}

fn list(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dash.platforms())? {
        return Ok(());
    }
    let rows = dash.platforms().iter().map(platform_cells).collect();
    println!(
        "{}",
        styled_table(&["ID", "Platform", "Status", "Last synced", "Auto sync"], rows)
    );
    if dash.sync().in_progress() {
        println!("Syncing...");
    }
    if any_errors(dash.platforms()) {
        println!("{}", ERROR_BANNER);
    }
    Ok(())
}
