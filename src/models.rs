// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::DashboardError;
use chrono::{DateTime, NaiveDate, Utc};
use comfy_table::Color;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingPlatform {
    Airbnb,
    #[serde(rename = "Trip.com")]
    TripCom,
    #[serde(rename = "Booking.com")]
    BookingCom,
    Agoda,
    #[serde(other)]
    Other,
}

impl BookingPlatform {
    pub const KNOWN: [BookingPlatform; 4] = [
        BookingPlatform::Airbnb,
        BookingPlatform::TripCom,
        BookingPlatform::BookingCom,
        BookingPlatform::Agoda,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingPlatform::Airbnb => "Airbnb",
            BookingPlatform::TripCom => "Trip.com",
            BookingPlatform::BookingCom => "Booking.com",
            BookingPlatform::Agoda => "Agoda",
            BookingPlatform::Other => "Other",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            BookingPlatform::Airbnb => Color::Magenta,
            BookingPlatform::TripCom => Color::Blue,
            BookingPlatform::BookingCom => Color::DarkBlue,
            BookingPlatform::Agoda => Color::DarkMagenta,
            BookingPlatform::Other => Color::Grey,
        }
    }
}

impl fmt::Display for BookingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Booking lifecycle as reported by the platform. Values outside the known
/// set deserialize to `Unknown` and render with a generic label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Paid,
    Inquiry,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Paid => "Paid",
            BookingStatus::Inquiry => "Inquiry",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Unknown => "Unknown",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            BookingStatus::Paid => Color::Green,
            BookingStatus::Inquiry => Color::Blue,
            BookingStatus::Cancelled => Color::Red,
            BookingStatus::Unknown => Color::Grey,
        }
    }

    pub fn parse(s: &str) -> Option<BookingStatus> {
        match s.trim().to_lowercase().as_str() {
            "paid" => Some(BookingStatus::Paid),
            "inquiry" => Some(BookingStatus::Inquiry),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub platform: BookingPlatform,
    pub status: BookingStatus,
    pub amount: Decimal,
    pub guests: u32,
    pub property: String,
}

/// Earnings and expenses share this shape; only expenses carry a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
    Error,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Error => "Error",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ConnectionStatus::Connected => Color::Green,
            ConnectionStatus::Disconnected => Color::Grey,
            ConnectionStatus::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub status: ConnectionStatus,
    #[serde(default)]
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_sync: bool,
}

impl Platform {
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostingStatus {
    CurrentlyHosting,
    Available,
}

impl HostingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HostingStatus::CurrentlyHosting => "Currently hosting",
            HostingStatus::Available => "Available",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub name: String,
    pub platform_id: String,
    pub hosting_status: HostingStatus,
    #[serde(default)]
    pub guest_name: Option<String>,
    pub date_range: String,
    pub rate: Decimal,
    pub currency: String,
}

/// Next id after the largest numeric one; non-numeric ids are skipped.
pub fn next_id<'a>(
    ids: impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<String, DashboardError> {
    ids.filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .map(|n| n.to_string())
        .ok_or(DashboardError::IdsExhausted(what))
}
