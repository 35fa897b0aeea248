// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use log::{LevelFilter, debug};
use std::path::PathBuf;

use hostboard::{cli, commands, config::Config, state::Dashboard, sync::SyncScheduler};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let level = match matches.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.init();

    let config = Config::resolve(matches.get_one::<PathBuf>("config").map(|p| p.as_path()))?;
    debug!("config: {:?}", config);
    let fixtures = config.fixtures(matches.get_one::<PathBuf>("fixtures").map(|p| p.as_path()))?;
    let mut dash = Dashboard::new(fixtures, SyncScheduler::with_delay_ms(config.sync_delay_ms))
        .with_currency_symbol(config.currency_symbol.clone());

    if let Some(("shell", _)) = matches.subcommand() {
        let stdin = std::io::stdin();
        return commands::shell::run(&mut dash, stdin.lock(), std::io::stdout());
    }
    if !commands::dispatch(&mut dash, &matches)? {
        cli::build_cli().print_help()?;
        println!();
    }
    commands::finish(&mut dash);
    Ok(())
}
