// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bookings;
pub mod cloud;
pub mod doctor;
pub mod exporter;
pub mod finance;
pub mod listings;
pub mod platforms;
pub mod shell;
pub mod summary;

use crate::state::Dashboard;
use anyhow::Result;

/// Routes one parsed command line. Returns `false` when nothing matched.
pub fn dispatch(dash: &mut Dashboard, matches: &clap::ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("summary", sub)) => summary::handle(dash, sub)?,
        Some(("bookings", sub)) => bookings::handle(dash, sub)?,
        Some(("finance", sub)) => finance::handle(dash, sub)?,
        Some(("platforms", sub)) => platforms::handle(dash, sub)?,
        Some(("listings", sub)) => listings::handle(dash, sub)?,
        Some(("cloud", sub)) => cloud::handle(dash, sub)?,
        Some(("export", sub)) => exporter::handle(dash, sub)?,
        Some(("doctor", _)) => doctor::handle(dash)?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Ends a one-shot invocation. A sync still pending cannot complete once the
/// process exits, so it is dropped and reported. Returns whether one was.
pub fn finish(dash: &mut Dashboard) -> bool {
    let discarded = dash.cancel_sync();
    if discarded {
        println!("Sync discarded on exit; rerun with --wait or use the shell to complete it");
    }
    discarded
}
