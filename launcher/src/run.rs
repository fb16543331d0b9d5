//! Run-execution collaborator seam. The launcher hands a complete run
//! descriptor to an engine and blocks on it; `ProcessEngine` is the thin
//! production engine, tests substitute their own through `RunEngine`.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::artifact::Artifact;
use crate::boot_check::BootCheck;

/// Everything needed to execute one simulation run.
#[derive(Debug, Clone)]
pub struct RunSpec {
    pub name: String,
    /// gem5 build to invoke.
    pub binary: PathBuf,
    /// Run-configuration script handed to gem5.
    pub run_script: PathBuf,
    /// Captured output lands in `{outdir}/simout`.
    pub outdir: PathBuf,
    /// Provenance handles; passed through untouched.
    pub artifacts: Vec<Artifact>,
    /// Positional parameters for the run script, suite-specific order.
    pub params: Vec<String>,
    pub timeout: Duration,
    pub check: BootCheck,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("can't launch `{}`: {source}", .binary.display())]
    Spawn { binary: PathBuf, source: io::Error },
    #[error("simulation timed out after {0:?}")]
    Timeout(Duration),
    #[error("suspected boot failure after {0:?}")]
    SuspectedFailure(Duration),
    #[error("simulator exited with {0}")]
    Failed(ExitStatus),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Blocking execution of one run. Implementations own process lifetime,
/// output capture and the failure-check cadence.
pub trait RunEngine: Sync {
    fn execute(&self, spec: &RunSpec) -> Result<(), RunError>;
}

/// Spawns the simulator binary, captures its output to `simout`, and polls
/// the boot check on its interval. Kills the child on timeout or on a
/// positive verdict; both surface as errors at the job boundary.
pub struct ProcessEngine;

impl RunEngine for ProcessEngine {
    fn execute(&self, spec: &RunSpec) -> Result<(), RunError> {
        fs::create_dir_all(&spec.outdir)?;
        let simout = File::create(spec.outdir.join("simout"))?;
        let stderr = simout.try_clone()?;

        let mut child = Command::new(&spec.binary)
            .arg(format!("--outdir={}", spec.outdir.display()))
            .arg(&spec.run_script)
            .args(&spec.params)
            .stdin(Stdio::null())
            .stdout(simout)
            .stderr(stderr)
            .spawn()
            .map_err(|source| RunError::Spawn {
                binary: spec.binary.clone(),
                source,
            })?;

        let start = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return if status.success() {
                    Ok(())
                } else {
                    Err(RunError::Failed(status))
                };
            }

            let elapsed = start.elapsed();
            if elapsed >= spec.timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(RunError::Timeout(elapsed));
            }
            if spec.check.suspected_failure(elapsed, &spec.outdir) {
                let _ = child.kill();
                let _ = child.wait();
                return Err(RunError::SuspectedFailure(elapsed));
            }

            thread::sleep(spec.check.interval);
        }
    }
}
