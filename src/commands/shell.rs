// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::cli::build_cli;
use crate::commands::dispatch;
use crate::state::Dashboard;
use crate::utils::fmt_sync_time;
use anyhow::{Result, bail};
use chrono::Utc;
use log::debug;
use std::io::{BufRead, Write};

/// Global flags that only take effect when the process starts.
const STARTUP_FLAGS: [&str; 2] = ["fixtures", "config"];

/// Names the first startup-only flag present on a shell command line.
pub fn startup_flag(m: &clap::ArgMatches) -> Option<&'static str> {
    STARTUP_FLAGS.into_iter().find(|id| m.contains_id(id))
}

/// Splits a command line on whitespace, keeping quoted runs together.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut cur = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;
    for ch in line.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => cur.push(c),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut cur));
                    in_word = false;
                }
            }
            (None, c) => {
                cur.push(c);
                in_word = true;
            }
        }
    }
    if quote.is_some() {
        bail!("Unterminated quote in '{}'", line);
    }
    if in_word {
        words.push(cur);
    }
    Ok(words)
}

fn announce_sync(dash: &mut Dashboard) {
    if let Some(done) = dash.poll_sync(Utc::now()) {
        println!("Sync finished at {}", fmt_sync_time(Some(done)));
    }
}

/// Reads commands from `input` until EOF or `exit`, applying each to `dash`.
pub fn run<R: BufRead, W: Write>(dash: &mut Dashboard, input: R, mut prompt: W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(prompt, "hostboard> ")?;
        prompt.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        announce_sync(dash);

        let words = match split_words(&line) {
            Ok(w) => w,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        match words.first().map(|w| w.as_str()) {
            None => continue,
            Some("exit" | "quit") => break,
            Some("help") => {
                build_cli().print_help()?;
                println!();
                continue;
            }
            Some("shell") => {
                println!("Already in a shell");
                continue;
            }
            _ => {}
        }

        debug!("shell command: {:?}", words);
        let matches = match build_cli().try_get_matches_from(std::iter::once("hostboard".to_string()).chain(words)) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        if let Some(flag) = startup_flag(&matches) {
            eprintln!("--{} only applies when starting hostboard; restart to change it", flag);
            continue;
        }
        match dispatch(dash, &matches) {
            Ok(true) => {}
            Ok(false) => println!("Unknown command; type 'help'"),
            Err(e) => eprintln!("Error: {:#}", e),
        }
    }
    if dash.cancel_sync() {
        println!("Pending sync cancelled");
    }
    Ok(())
}
