// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::DashboardError;
use crate::fixtures::Fixtures;
use crate::sync::DEFAULT_SYNC_DELAY_MS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Hostboard", "hostboard"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fixtures: Option<PathBuf>,
    pub sync_delay_ms: u64,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fixtures: None,
            sync_delay_ms: DEFAULT_SYNC_DELAY_MS,
            currency_symbol: "$".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

impl Config {
    /// Reads `path`, treating a missing file as all defaults.
    pub fn load_from(path: &Path) -> Result<Config, DashboardError> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| DashboardError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Explicit `--config` wins over the per-user config file.
    pub fn resolve(explicit: Option<&Path>) -> Result<Config> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => config_path()?,
        };
        Ok(Config::load_from(&path)?)
    }

    /// `--fixtures` wins over the configured seed file, which wins over the
    /// built-in seed.
    pub fn fixtures(&self, explicit: Option<&Path>) -> Result<Fixtures> {
        match explicit.or(self.fixtures.as_deref()) {
            Some(p) => {
                info!("loading fixtures from {}", p.display());
                Fixtures::load(p).with_context(|| format!("Loading fixtures {}", p.display()))
            }
            None => {
                info!("using built-in fixtures");
                Ok(Fixtures::builtin())
            }
        }
    }
}
