// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::DashboardError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CloudProvider {
    #[default]
    GoogleDrive,
    Dropbox,
    #[serde(rename = "onedrive")]
    OneDrive,
    #[serde(rename = "icloud")]
    ICloud,
}

impl CloudProvider {
    pub fn label(&self) -> &'static str {
        match self {
            CloudProvider::GoogleDrive => "Google Drive",
            CloudProvider::Dropbox => "Dropbox",
            CloudProvider::OneDrive => "OneDrive",
            CloudProvider::ICloud => "iCloud",
        }
    }
}

impl FromStr for CloudProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "google-drive" => Ok(CloudProvider::GoogleDrive),
            "dropbox" => Ok(CloudProvider::Dropbox),
            "onedrive" => Ok(CloudProvider::OneDrive),
            "icloud" => Ok(CloudProvider::ICloud),
            other => Err(format!(
                "Unknown provider '{}' (use google-drive|dropbox|onedrive|icloud)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    Hourly,
    #[default]
    Daily,
    Weekly,
}

impl FromStr for BackupFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hourly" => Ok(BackupFrequency::Hourly),
            "daily" => Ok(BackupFrequency::Daily),
            "weekly" => Ok(BackupFrequency::Weekly),
            other => Err(format!("Unknown frequency '{}' (use hourly|daily|weekly)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudStorage {
    pub enabled: bool,
    pub provider: CloudProvider,
    pub auto_backup: bool,
    #[serde(default)]
    pub frequency: BackupFrequency,
    #[serde(default)]
    pub last_backup: Option<DateTime<Utc>>,
}

impl Default for CloudStorage {
    fn default() -> Self {
        CloudStorage {
            enabled: true,
            provider: CloudProvider::GoogleDrive,
            auto_backup: true,
            frequency: BackupFrequency::Daily,
            last_backup: None,
        }
    }
}

impl CloudStorage {
    pub fn with_enabled_toggled(&self) -> CloudStorage {
        CloudStorage {
            enabled: !self.enabled,
            ..self.clone()
        }
    }

    pub fn with_provider(&self, provider: CloudProvider) -> Result<CloudStorage, DashboardError> {
        self.require_enabled("the provider")?;
        Ok(CloudStorage {
            provider,
            ..self.clone()
        })
    }

    pub fn with_auto_backup_toggled(&self) -> Result<CloudStorage, DashboardError> {
        self.require_enabled("automatic backups")?;
        Ok(CloudStorage {
            auto_backup: !self.auto_backup,
            ..self.clone()
        })
    }

    pub fn with_frequency(&self, frequency: BackupFrequency) -> Result<CloudStorage, DashboardError> {
        self.require_enabled("the backup frequency")?;
        if !self.auto_backup {
            return Err(DashboardError::AutoBackupDisabled);
        }
        Ok(CloudStorage {
            frequency,
            ..self.clone()
        })
    }

    /// Restores defaults but keeps the recorded last backup.
    pub fn reset(&self) -> Result<CloudStorage, DashboardError> {
        self.require_enabled("the configuration")?;
        Ok(CloudStorage {
            last_backup: self.last_backup,
            ..CloudStorage::default()
        })
    }

    fn require_enabled(&self, what: &'static str) -> Result<(), DashboardError> {
        if self.enabled {
            Ok(())
        } else {
            Err(DashboardError::CloudStorageDisabled(what))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_storage_rejects_changes() {
        let off = CloudStorage::default().with_enabled_toggled();
        assert!(off.with_provider(CloudProvider::Dropbox).is_err());
        assert!(off.with_auto_backup_toggled().is_err());
        assert!(off.reset().is_err());
        assert!(off.with_enabled_toggled().enabled);
    }

    #[test]
    fn frequency_needs_auto_backup() {
        let cfg = CloudStorage::default().with_auto_backup_toggled().unwrap();
        assert!(matches!(
            cfg.with_frequency(BackupFrequency::Weekly),
            Err(DashboardError::AutoBackupDisabled)
        ));
        let cfg = cfg.with_auto_backup_toggled().unwrap();
        assert_eq!(
            cfg.with_frequency(BackupFrequency::Weekly).unwrap().frequency,
            BackupFrequency::Weekly
        );
    }

    #[test]
    fn provider_names_parse() {
        assert_eq!("iCloud".parse::<CloudProvider>().unwrap(), CloudProvider::ICloud);
        assert!("box".parse::<CloudProvider>().is_err());
    }
}
