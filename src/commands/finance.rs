// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::finance::{CategoryFilter, NewTransaction, TransactionKind};
use crate::models::Transaction;
use crate::state::Dashboard;
use crate::utils::{fmt_symbol, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Result, bail};
use log::debug;
use serde::Serialize;

pub fn handle(dash: &mut Dashboard, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(dash, sub)?,
        Some(("earnings", sub)) => earnings(dash, sub)?,
        Some(("expenses", sub)) => expenses(dash, sub)?,
        Some(("add", sub)) => add(dash, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn category_arg(sub: &clap::ArgMatches) -> CategoryFilter {
    sub.get_one::<String>("category")
        .map(|s| CategoryFilter::parse(s))
        .unwrap_or_default()
}

fn summary(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let s = dash.financial_summary();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    let sym = dash.currency_symbol();
    println!(
        "{}",
        pretty_table(
            &["Total Earnings", "Total Expenses", "Net Profit"],
            vec![vec![
                fmt_symbol(&s.total_earnings, sym),
                fmt_symbol(&s.total_expenses, sym),
                fmt_symbol(&s.net_profit, sym),
            ]],
        )
    );
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub description: String,
    pub category: String,
    pub amount: String,
}

pub fn rows(data: &[&Transaction], symbol: &str) -> Vec<TransactionRow> {
    data.iter()
        .map(|t| TransactionRow {
            date: t.date.to_string(),
            description: t.description.clone(),
            category: t.category.clone().unwrap_or_default(),
            amount: fmt_symbol(&t.amount, symbol),
        })
        .collect()
}

fn earnings(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<&Transaction> = dash.earnings().iter().collect();
    let out = rows(&data, dash.currency_symbol());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        let rows = out
            .into_iter()
            .map(|r| vec![r.date, r.description, r.amount])
            .collect();
        println!("{}", pretty_table(&["Date", "Description", "Amount"], rows));
    }
    Ok(())
}

fn expenses(dash: &Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let filter = category_arg(sub);
    debug!("expenses: category={}", filter);
    let data = dash.filtered_expenses(&filter);
    let out = rows(&data, dash.currency_symbol());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &out)? {
        let rows = out
            .into_iter()
            .map(|r| vec![r.date, r.description, r.category, r.amount])
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn add(dash: &mut Dashboard, sub: &clap::ArgMatches) -> Result<()> {
    let kind = match sub.get_one::<String>("type").map(|s| s.as_str()) {
        Some("earning") => TransactionKind::Earning,
        Some("expense") => TransactionKind::Expense,
        other => bail!("Unknown transaction type {:?}", other),
    };
    let (Some(date), Some(description), Some(amount)) = (
        sub.get_one::<String>("date"),
        sub.get_one::<String>("description"),
        sub.get_one::<String>("amount"),
    ) else {
        bail!("--date, --description and --amount are required");
    };
    let tx = NewTransaction {
        kind,
        date: parse_date(date)?,
        description: description.clone(),
        amount: parse_decimal(amount)?,
        category: sub.get_one::<String>("category").cloned(),
    };
    let amount = tx.amount;
    dash.record_transaction(tx)?;
    let s = dash.financial_summary();
    let sym = dash.currency_symbol();
    println!(
        "Recorded {} of {}; net profit now {}",
        match kind {
            TransactionKind::Earning => "earning",
            TransactionKind::Expense => "expense",
        },
        fmt_symbol(&amount, sym),
        fmt_symbol(&s.net_profit, sym)
    );
    Ok(())
}
