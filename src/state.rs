// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Live dashboard state.
//!
//! Collections are never edited in place: each update computes a new value
//! and swaps it in, so a reader sees either the old or the new collection.

use crate::bookings::{self, StatusFilter};
use crate::cloud::CloudStorage;
use crate::errors::DashboardError;
use crate::finance::{self, CategoryFilter, FinancialSummary, NewTransaction, TransactionKind};
use crate::fixtures::Fixtures;
use crate::listings;
use crate::models::{Booking, Listing, Platform, Transaction};
use crate::platforms;
use crate::sync::{SyncScheduler, SyncTrigger};
use chrono::{DateTime, Utc};
use log::{info, warn};

#[derive(Debug)]
pub struct Dashboard {
    bookings: Vec<Booking>,
    earnings: Vec<Transaction>,
    expenses: Vec<Transaction>,
    platforms: Vec<Platform>,
    listings: Vec<Listing>,
    cloud: CloudStorage,
    sync: SyncScheduler,
    currency_symbol: String,
}

impl Dashboard {
    pub fn new(fx: Fixtures, sync: SyncScheduler) -> Self {
        for l in listings::orphaned(&fx.listings, &fx.platforms) {
            warn!(
                "listing '{}' references unknown platform '{}'",
                l.name, l.platform_id
            );
        }
        Dashboard {
            bookings: fx.bookings,
            earnings: fx.earnings,
            expenses: fx.expenses,
            platforms: fx.platforms,
            listings: fx.listings,
            cloud: fx.cloud_storage,
            sync,
            currency_symbol: "$".to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn earnings(&self) -> &[Transaction] {
        &self.earnings
    }

    pub fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn cloud(&self) -> &CloudStorage {
        &self.cloud
    }

    pub fn sync(&self) -> &SyncScheduler {
        &self.sync
    }

    pub fn filtered_bookings(&self, status: StatusFilter, search: &str) -> Vec<&Booking> {
        bookings::filter_bookings(&self.bookings, status, search)
    }

    pub fn filtered_expenses(&self, filter: &CategoryFilter) -> Vec<&Transaction> {
        finance::filter_expenses(&self.expenses, filter)
    }

    /// Recomputed from the current collections on every call.
    pub fn financial_summary(&self) -> FinancialSummary {
        finance::summarize(&self.earnings, &self.expenses)
    }

    pub fn listings_for(&self, selected: Option<&str>) -> Vec<&Listing> {
        listings::listings_for_platform(&self.listings, selected)
    }

    pub fn selected_platform_name(&self, selected: Option<&str>) -> &str {
        listings::selected_platform_name(&self.platforms, selected)
    }

    pub fn record_transaction(&mut self, tx: NewTransaction) -> Result<(), DashboardError> {
        match tx.kind {
            TransactionKind::Earning => self.earnings = finance::append(&self.earnings, tx)?,
            TransactionKind::Expense => self.expenses = finance::append(&self.expenses, tx)?,
        }
        Ok(())
    }

    pub fn toggle_connection(&mut self, id: &str) -> Result<&Platform, DashboardError> {
        self.platforms = platforms::toggle_connection(&self.platforms, id)?;
        self.platform(id)
    }

    pub fn toggle_auto_sync(&mut self, id: &str) -> Result<&Platform, DashboardError> {
        match platforms::toggle_auto_sync(&self.platforms, id) {
            Ok(next) => self.platforms = next,
            Err(e) => {
                warn!("auto sync toggle rejected: {}", e);
                return Err(e);
            }
        }
        self.platform(id)
    }

    pub fn add_platform(&mut self, name: &str, auto_sync: bool) -> Result<&Platform, DashboardError> {
        self.platforms = platforms::add_platform(&self.platforms, name, auto_sync)?;
        info!("added platform {}", name.trim());
        self.platforms
            .last()
            .ok_or_else(|| DashboardError::UnknownPlatform(name.to_string()))
    }

    fn platform(&self, id: &str) -> Result<&Platform, DashboardError> {
        self.platforms
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| DashboardError::UnknownPlatform(id.to_string()))
    }

    pub fn update_cloud<F>(&mut self, f: F) -> Result<&CloudStorage, DashboardError>
    where
        F: FnOnce(&CloudStorage) -> Result<CloudStorage, DashboardError>,
    {
        self.cloud = f(&self.cloud)?;
        Ok(&self.cloud)
    }

    pub fn trigger_sync(&mut self, now: DateTime<Utc>) -> SyncTrigger {
        self.sync.trigger(now)
    }

    /// Applies a due sync. Returns the completion instant when one landed.
    pub fn poll_sync(&mut self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let done = self.sync.poll(now)?;
        self.platforms = platforms::stamp_connected(&self.platforms, done);
        Some(done)
    }

    pub fn cancel_sync(&mut self) -> bool {
        self.sync.cancel()
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        if self.sync.cancel() {
            info!("dashboard closed with a pending sync; discarded");
        }
    }
}
