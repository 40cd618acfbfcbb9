//! Working-set watchdog
//!
//! Polls the host process footprint on a fixed interval and asks the host to
//! shed memory when it crosses the configured limits. The actual reduction
//! (collector pass, working-set trim) is supplied by the host through
//! [`MemoryReducer`]; this module only decides when to call it.

use std::time::Duration;

use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{LivecapError, LivecapResult};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Host-side memory reduction hook.
pub trait MemoryReducer: Send {
    /// Release memory. `aggressive` asks for the expensive path (full
    /// collection plus working-set trim) instead of a routine pass.
    fn reduce_memory(&mut self, aggressive: bool) -> LivecapResult<()>;
}

/// What a single poll decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimAction {
    None,
    Gentle,
    Aggressive,
}

/// Periodic working-set monitor for the current process.
pub struct MemoryWatchdog {
    interval: Duration,
    soft_limit_bytes: u64,
    hard_limit_bytes: u64,
    regrowth_bytes: u64,
    /// Footprint right after the last successful trim.
    last_trimmed: Option<u64>,
    sys: System,
    pid: Pid,
}

impl MemoryWatchdog {
    pub fn new(config: &Config) -> LivecapResult<Self> {
        let pid = sysinfo::get_current_pid().map_err(|e| LivecapError::Memory(e.to_string()))?;
        Ok(Self {
            interval: Duration::from_secs(config.trim_interval_secs),
            soft_limit_bytes: config.soft_limit_mb * BYTES_PER_MB,
            hard_limit_bytes: config.hard_limit_mb * BYTES_PER_MB,
            regrowth_bytes: config.regrowth_mb * BYTES_PER_MB,
            last_trimmed: None,
            sys: System::new(),
            pid,
        })
    }

    /// Current resident footprint of this process in bytes.
    pub fn working_set_bytes(&mut self) -> u64 {
        self.sys
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        self.sys.process(self.pid).map(|p| p.memory()).unwrap_or(0)
    }

    /// Threshold decision for a given footprint.
    ///
    /// Past the hard limit the reduction is always aggressive. Past the soft
    /// limit a gentle trim fires only once the footprint has regrown beyond
    /// the level left by the last trim, so a process that cannot shrink any
    /// further is not re-trimmed every poll.
    pub fn evaluate(&self, working_set: u64) -> TrimAction {
        if working_set >= self.hard_limit_bytes {
            return TrimAction::Aggressive;
        }
        if working_set < self.soft_limit_bytes {
            return TrimAction::None;
        }
        match self.last_trimmed {
            Some(baseline) if working_set < baseline + self.regrowth_bytes => TrimAction::None,
            _ => TrimAction::Gentle,
        }
    }

    /// One poll step: read the footprint, decide, and invoke the reducer.
    ///
    /// Reducer failures are logged and swallowed; the next poll retries.
    pub fn poll(&mut self, reducer: &mut dyn MemoryReducer) -> TrimAction {
        let working_set = self.working_set_bytes();
        let action = self.evaluate(working_set);
        match action {
            TrimAction::None => {
                debug!("Working set {} MB, no trim needed", working_set / BYTES_PER_MB);
            }
            TrimAction::Gentle | TrimAction::Aggressive => {
                let aggressive = action == TrimAction::Aggressive;
                info!(
                    "🧹 Working set {} MB over limit, requesting {} reduction",
                    working_set / BYTES_PER_MB,
                    if aggressive { "aggressive" } else { "gentle" }
                );
                match reducer.reduce_memory(aggressive) {
                    Ok(()) => self.last_trimmed = Some(self.working_set_bytes()),
                    Err(e) => warn!("⚠️ Memory reduction failed: {}", e),
                }
            }
        }
        action
    }

    /// Run the poll loop until the surrounding task is dropped.
    pub async fn run(mut self, mut reducer: impl MemoryReducer) {
        info!(
            "🧹 Memory watchdog started ({}s interval)",
            self.interval.as_secs()
        );
        loop {
            tokio::time::sleep(self.interval).await;
            self.poll(&mut reducer);
        }
    }
}
