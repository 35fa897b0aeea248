// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::listings::orphaned;
use crate::models::ConnectionStatus;
use crate::state::Dashboard;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn issues(dash: &Dashboard) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    // 1) Listings pointing at a platform that does not exist
    for l in orphaned(dash.listings(), dash.platforms()) {
        rows.push(vec![
            "orphaned_listing".into(),
            format!("{} -> platform {}", l.name, l.platform_id),
        ]);
    }

    // 2) Platforms stuck in the error state
    for p in dash.platforms() {
        if p.status == ConnectionStatus::Error {
            rows.push(vec!["platform_error".into(), format!("{} (id {})", p.name, p.id)]);
        }
    }
    rows
}

pub fn handle(dash: &Dashboard) -> Result<()> {
    let rows = issues(dash);
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
