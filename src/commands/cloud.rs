// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cloud::{BackupFrequency, CloudProvider, CloudStorage};
use crate::state::Dashboard;
use crate::utils::{fmt_sync_time, maybe_print_json, pretty_table};
use anyhow::{Context, Result, anyhow};

pub fn handle(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    let updated = match m.subcommand() {
        Some(("status", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), dash.cloud())? {
                print_status(dash.cloud());
            }
            return Ok(());
        }
        Some(("toggle", _)) => dash.update_cloud(|c| Ok(c.with_enabled_toggled()))?,
        Some(("provider", sub)) => {
            let provider = sub
                .get_one::<String>("name")
                .context("--name is required")?
                .parse::<CloudProvider>()
                .map_err(|e| anyhow!(e))?;
            dash.update_cloud(|c| c.with_provider(provider))?
        }
        Some(("auto-backup", _)) => dash.update_cloud(|c| c.with_auto_backup_toggled())?,
        Some(("frequency", sub)) => {
            let freq = sub
                .get_one::<String>("value")
                .context("--value is required")?
                .parse::<BackupFrequency>()
                .map_err(|e| anyhow!(e))?;
            dash.update_cloud(|c| c.with_frequency(freq))?
        }
        Some(("reset", _)) => dash.update_cloud(|c| c.reset())?,
        _ => return Ok(()),
    };
    print_status(updated);
    Ok(())
}

fn on_off(b: bool) -> String {
    if b { "on".into() } else { "off".into() }
}

fn print_status(c: &CloudStorage) {
    let rows = vec![
        vec!["Cloud storage".into(), on_off(c.enabled)],
        vec!["Provider".into(), c.provider.label().into()],
        vec!["Automatic backup".into(), on_off(c.auto_backup)],
        vec!["Frequency".into(), format!("{:?}", c.frequency).to_lowercase()],
        vec!["Last backup".into(), fmt_sync_time(c.last_backup)],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
}
