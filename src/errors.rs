// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ConnectionStatus;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Platform '{0}' not found")]
    UnknownPlatform(String),

    #[error("Platform '{0}' already exists")]
    DuplicatePlatform(String),

    #[error("Platform name must not be empty")]
    EmptyPlatformName,

    #[error("No numeric id left for new {0}")]
    IdsExhausted(&'static str),

    #[error("Auto sync for {name} requires a connected platform (currently {})", .status.label())]
    AutoSyncUnavailable {
        name: String,
        status: ConnectionStatus,
    },

    #[error("Cloud storage is disabled; enable it before changing {0}")]
    CloudStorageDisabled(&'static str),

    #[error("Backup frequency requires automatic backups to be enabled")]
    AutoBackupDisabled,

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
}
