//! Heuristic detection of simulations that hang before finishing guest boot.

use std::fs;
use std::path::Path;
use std::time::Duration;

/// Printed by the guest once the Linux kernel has finished booting. Every
/// suite here performs a full-system boot, so one marker covers all of them.
pub const BOOT_MARKER: &str = "Done booting Linux";

/// Scanning the captured output is expensive, so the check only inspects it
/// while elapsed time is inside `[timeout, timeout + 5 * interval)` — a
/// handful of polls per job instead of every poll for the job's whole life.
#[derive(Debug, Clone)]
pub struct BootCheck {
    pub timeout: Duration,
    pub interval: Duration,
    pub marker: String,
}

impl BootCheck {
    pub fn new(timeout: Duration, interval: Duration) -> BootCheck {
        BootCheck {
            timeout,
            interval,
            marker: BOOT_MARKER.to_string(),
        }
    }

    /// Verdict for one poll. `true` means the run has probably hung before
    /// booting and should be aborted by the engine; this is a heuristic, not
    /// a crash detection. The check never terminates anything itself.
    pub fn suspected_failure(&self, elapsed: Duration, outdir: &Path) -> bool {
        if elapsed < self.timeout || elapsed >= self.timeout + self.interval * 5 {
            return false;
        }

        // Inside the checking window: the marker must have shown up by now.
        match fs::read_to_string(outdir.join("simout")) {
            Ok(output) => !output.lines().any(|line| line.contains(&self.marker)),
            Err(_) => true,
        }
    }
}
