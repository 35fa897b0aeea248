// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Deferred "sync now" completion.
//!
//! A sync is started with [`SyncScheduler::trigger`] and finishes the first
//! time [`SyncScheduler::poll`] is called at or after its due time. Only one
//! sync may be pending; triggering again while pending is ignored.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info};

pub const DEFAULT_SYNC_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncState {
    #[default]
    Idle,
    Pending {
        started_at: DateTime<Utc>,
        due_at: DateTime<Utc>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTrigger {
    Started { due_at: DateTime<Utc> },
    AlreadyRunning { due_at: DateTime<Utc> },
}

#[derive(Debug, Clone)]
pub struct SyncScheduler {
    delay: TimeDelta,
    state: SyncState,
}

impl Default for SyncScheduler {
    fn default() -> Self {
        SyncScheduler::with_delay_ms(DEFAULT_SYNC_DELAY_MS)
    }
}

impl SyncScheduler {
    pub fn with_delay_ms(ms: u64) -> Self {
        let ms = i64::try_from(ms).unwrap_or(i64::MAX);
        SyncScheduler {
            delay: TimeDelta::try_milliseconds(ms).unwrap_or(TimeDelta::MAX),
            state: SyncState::Idle,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn in_progress(&self) -> bool {
        matches!(self.state, SyncState::Pending { .. })
    }

    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        match self.state {
            SyncState::Idle => None,
            SyncState::Pending { due_at, .. } => Some(due_at),
        }
    }

    pub fn trigger(&mut self, now: DateTime<Utc>) -> SyncTrigger {
        if let SyncState::Pending { due_at, .. } = self.state {
            debug!("sync already pending until {}, ignoring trigger", due_at);
            return SyncTrigger::AlreadyRunning { due_at };
        }
        let due_at = now.checked_add_signed(self.delay).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.state = SyncState::Pending {
            started_at: now,
            due_at,
        };
        info!("sync started, completes at {}", due_at);
        SyncTrigger::Started { due_at }
    }

    /// Completes a due sync, returning the instant it completed at.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.state {
            SyncState::Pending { due_at, .. } if now >= due_at => {
                self.state = SyncState::Idle;
                info!("sync completed at {}", due_at);
                Some(due_at)
            }
            _ => None,
        }
    }

    /// Drops a pending sync. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        if let SyncState::Pending { started_at, .. } = self.state {
            self.state = SyncState::Idle;
            info!("sync started at {} cancelled", started_at);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn poll_before_due_keeps_pending() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut s = SyncScheduler::with_delay_ms(2000);
        assert_eq!(
            s.trigger(t0),
            SyncTrigger::Started {
                due_at: t0 + TimeDelta::seconds(2)
            }
        );
        assert_eq!(s.poll(t0 + TimeDelta::milliseconds(1999)), None);
        assert!(s.in_progress());
        assert_eq!(s.poll(t0 + TimeDelta::seconds(5)), Some(t0 + TimeDelta::seconds(2)));
        assert!(!s.in_progress());
        assert_eq!(s.poll(t0 + TimeDelta::seconds(6)), None);
    }

    #[test]
    fn cancel_only_reports_pending() {
        let mut s = SyncScheduler::default();
        assert!(!s.cancel());
        s.trigger(Utc::now());
        assert!(s.cancel());
        assert_eq!(s.state(), SyncState::Idle);
    }
}
