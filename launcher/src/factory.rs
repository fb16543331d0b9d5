//! Run factory: turns an accepted combination into a full run descriptor —
//! binary variant, output directory, timeout tier and failure-check policy.

use std::path::PathBuf;
use std::time::Duration;

use crate::artifact::SweepArtifacts;
use crate::boot_check::BootCheck;
use crate::config::LaunchConfig;
use crate::run::RunSpec;
use crate::space::{Assignment, SuiteKind, SweepJob};

const HOUR: u64 = 60 * 60;
const DAY: u64 = 24 * HOUR;

/// One dispatched unit of work: the accepted combination plus its derived
/// run descriptor. Built immediately before dispatch, read-only afterwards,
/// consumed exactly once by a worker.
#[derive(Debug, Clone)]
pub struct Job {
    pub suite: SuiteKind,
    pub params: Assignment,
    pub spec: RunSpec,
}

impl SuiteKind {
    /// Wall-clock timeout tiers: (kvm, cycle-accurate CPU modes).
    fn timeouts(&self) -> (Duration, Duration) {
        let (short, long) = match self {
            SuiteKind::BootExit => (12 * HOUR, 2 * DAY),
            SuiteKind::Npb | SuiteKind::Gapbs | SuiteKind::Parsec => (DAY, 10 * DAY),
            SuiteKind::Spec2006 | SuiteKind::Spec2017 => (DAY, 20 * DAY),
        };
        (Duration::from_secs(short), Duration::from_secs(long))
    }

    fn disk_image_file(&self) -> &'static str {
        match self {
            SuiteKind::BootExit => "boot-exit.img",
            SuiteKind::Npb => "npb.img",
            SuiteKind::Gapbs => "gapbs.img",
            SuiteKind::Parsec => "parsec.img",
            SuiteKind::Spec2006 => "spec-2006",
            SuiteKind::Spec2017 => "spec-2017",
        }
    }

    /// Run-configuration script, relative to the resources checkout. PARSEC
    /// ships a separate config tree for the MESI_Two_Level protocol.
    fn run_script(&self, params: &Assignment) -> &'static str {
        match self {
            SuiteKind::BootExit => "src/boot-exit/configs/run_exit.py",
            SuiteKind::Npb => "src/npb/configs/run_npb.py",
            SuiteKind::Gapbs => "src/gapbs/configs/run_gapbs.py",
            SuiteKind::Parsec => {
                if params.get("mem_sys") == "classic" {
                    "src/parsec/configs/run_parsec.py"
                } else {
                    "src/parsec/configs-mesi-two-level/run_parsec_mesi_two_level.py"
                }
            }
            SuiteKind::Spec2006 => "src/spec-2006/configs/run_spec.py",
            SuiteKind::Spec2017 => "src/spec-2017/configs/run_spec.py",
        }
    }

    /// Axis values forwarded to the run script, in the order the script
    /// expects its positional arguments.
    fn script_params(&self, params: &Assignment) -> Vec<String> {
        let keys: &[&str] = match self {
            SuiteKind::BootExit => &["cpu", "mem_sys", "num_cpu", "boot_type"],
            SuiteKind::Npb => &["cpu", "mem_sys", "workload", "num_cpu"],
            SuiteKind::Gapbs => &["cpu", "num_cpu", "mem_sys", "workload", "synthetic", "n_nodes"],
            SuiteKind::Parsec => &["cpu", "workload", "size", "num_cpu"],
            SuiteKind::Spec2006 => &["cpu", "mem_sys", "workload", "size"],
            SuiteKind::Spec2017 => &["cpu", "workload", "size"],
        };
        keys.iter().map(|k| params.get(k).to_string()).collect()
    }
}

/// gem5 build variant for a memory system: the default build for the classic
/// hierarchy, a protocol-specific build for every Ruby protocol.
pub fn gem5_binary_path(config: &LaunchConfig, mem_sys: &str) -> PathBuf {
    if mem_sys == "classic" {
        config.gem5_dir.join("build/X86/gem5.opt")
    } else {
        config.gem5_dir.join(format!("build/X86_{}/gem5.opt", mem_sys))
    }
}

/// Deterministic output directory: suite name, then every axis value in
/// declared order. Injective per suite because the axis set is fixed and
/// every accepted assignment covers all of it.
pub fn output_dir(config: &LaunchConfig, job: &SweepJob) -> PathBuf {
    let mut dir = config.output_root.join(job.suite.name());
    for value in job.params.values() {
        dir.push(value);
    }
    dir
}

pub fn build_job(job: SweepJob, config: &LaunchConfig, artifacts: &SweepArtifacts) -> Job {
    let suite = job.suite;
    // spec-2017 declares no mem_sys axis; it always runs the classic build.
    let mem_sys = job.params.try_get("mem_sys").unwrap_or("classic");
    let kernel = job.params.get("kernel");

    let (short, long) = suite.timeouts();
    let timeout = if job.params.get("cpu") == "kvm" {
        short
    } else {
        long
    };

    let outdir = output_dir(config, &job);
    let kernel_path = config.kernels_dir.join(format!("vmlinux-{}", kernel));
    let disk_image_path = config.disk_images_dir.join(suite.disk_image_file());

    let mut params = vec![
        kernel_path.display().to_string(),
        disk_image_path.display().to_string(),
    ];
    params.extend(suite.script_params(&job.params));

    let spec = RunSpec {
        name: format!("{};{}", suite.name(), config.run_name_suffix),
        binary: gem5_binary_path(config, mem_sys),
        run_script: config.resources_dir.join(suite.run_script(&job.params)),
        outdir,
        artifacts: vec![
            artifacts.gem5_binary(mem_sys).clone(),
            artifacts.gem5_repo.clone(),
            artifacts.experiments_repo.clone(),
            artifacts.linux_kernel(kernel).clone(),
            artifacts.disk_image(suite).clone(),
        ],
        params,
        timeout,
        check: BootCheck::new(timeout, config.check_interval()),
    };

    Job {
        suite,
        params: job.params,
        spec,
    }
}

pub fn build_jobs(
    jobs: Vec<SweepJob>,
    config: &LaunchConfig,
    artifacts: &SweepArtifacts,
) -> Vec<Job> {
    jobs.into_iter()
        .map(|job| build_job(job, config, artifacts))
        .collect()
}
