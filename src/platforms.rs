// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-platform connection and auto-sync transitions.
//!
//! Every operation takes the current collection and hands back a new one;
//! callers swap the whole value in. A rejected transition leaves the
//! caller's value untouched.

use crate::errors::DashboardError;
use crate::models::{ConnectionStatus, Platform, next_id};
use chrono::{DateTime, Utc};
use log::debug;

pub const ERROR_BANNER: &str = "One or more platforms have connection errors. Please check your API credentials and try reconnecting.";

impl Platform {
    /// Connected goes to disconnected; disconnected and error both reconnect.
    pub fn with_connection_toggled(&self) -> Platform {
        let status = match self.status {
            ConnectionStatus::Connected => ConnectionStatus::Disconnected,
            ConnectionStatus::Disconnected | ConnectionStatus::Error => ConnectionStatus::Connected,
        };
        Platform {
            status,
            ..self.clone()
        }
    }

    pub fn with_auto_sync_toggled(&self) -> Result<Platform, DashboardError> {
        if !self.is_connected() {
            return Err(DashboardError::AutoSyncUnavailable {
                name: self.name.clone(),
                status: self.status,
            });
        }
        Ok(Platform {
            auto_sync: !self.auto_sync,
            ..self.clone()
        })
    }
}

fn replace_one<F>(platforms: &[Platform], id: &str, f: F) -> Result<Vec<Platform>, DashboardError>
where
    F: FnOnce(&Platform) -> Result<Platform, DashboardError>,
{
    let idx = platforms
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| DashboardError::UnknownPlatform(id.to_string()))?;
    let updated = f(&platforms[idx])?;
    let mut out = platforms.to_vec();
    out[idx] = updated;
    Ok(out)
}

pub fn toggle_connection(platforms: &[Platform], id: &str) -> Result<Vec<Platform>, DashboardError> {
    replace_one(platforms, id, |p| {
        let next = p.with_connection_toggled();
        debug!("{}: {} -> {}", p.name, p.status.label(), next.status.label());
        Ok(next)
    })
}

pub fn toggle_auto_sync(platforms: &[Platform], id: &str) -> Result<Vec<Platform>, DashboardError> {
    replace_one(platforms, id, |p| p.with_auto_sync_toggled())
}

/// Stamps `at` on every platform that is connected right now.
pub fn stamp_connected(platforms: &[Platform], at: DateTime<Utc>) -> Vec<Platform> {
    platforms
        .iter()
        .map(|p| {
            if p.is_connected() {
                Platform {
                    last_sync: Some(at),
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect()
}

pub fn add_platform(
    platforms: &[Platform],
    name: &str,
    auto_sync: bool,
) -> Result<Vec<Platform>, DashboardError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DashboardError::EmptyPlatformName);
    }
    if platforms.iter().any(|p| p.name.eq_ignore_ascii_case(name)) {
        return Err(DashboardError::DuplicatePlatform(name.to_string()));
    }
    let id = next_id(platforms.iter().map(|p| p.id.as_str()), "platforms")?;
    let mut out = platforms.to_vec();
    out.push(Platform {
        id,
        name: name.to_string(),
        status: ConnectionStatus::Connected,
        last_sync: None,
        auto_sync,
    });
    Ok(out)
}

pub fn any_errors(platforms: &[Platform]) -> bool {
    platforms.iter().any(|p| p.status == ConnectionStatus::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(status: ConnectionStatus) -> Platform {
        Platform {
            id: "1".into(),
            name: "Airbnb".into(),
            status,
            last_sync: None,
            auto_sync: false,
        }
    }

    #[test]
    fn error_state_exits_by_reconnecting() {
        let p = platform(ConnectionStatus::Error).with_connection_toggled();
        assert_eq!(p.status, ConnectionStatus::Connected);
        let p = p.with_connection_toggled();
        assert_eq!(p.status, ConnectionStatus::Disconnected);
    }

    #[test]
    fn auto_sync_rejected_in_error_state() {
        let err = platform(ConnectionStatus::Error)
            .with_auto_sync_toggled()
            .unwrap_err();
        assert!(err.to_string().contains("currently Error"));
    }
}
