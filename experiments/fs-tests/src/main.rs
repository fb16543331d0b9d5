//! Launch the gem5 21.0 full-system test sweep: every suite, every feasible
//! combination, dispatched to a bounded worker pool.

mod artifacts;
mod input_space;

use std::io::Write;
use std::path::Path;

use clap::Parser;
use env_logger::Builder;

use gem5_launcher::{
    build_jobs, filtered_jobs, write_manifest, Assignment, LaunchConfig, ParallelLauncher,
    ProcessEngine, SuiteKind,
};

#[derive(Parser)]
#[command(about = "Launch the gem5 full-system test sweep")]
struct Args {
    /// Enumerate, filter and write the manifest, but load no artifacts and
    /// dispatch nothing.
    #[arg(long)]
    test: bool,
}

/// This batch runs only the KVM tier; the cycle-accurate tiers are launched
/// separately once these pass.
fn kvm_filter(_suite: SuiteKind, params: &Assignment) -> bool {
    params.get("cpu") == "kvm"
}

fn main() {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();
    let config = LaunchConfig::load(Path::new("launch.yaml"));

    let suites = input_space::all_suites();
    let jobs = filtered_jobs(&suites, kvm_filter);

    write_manifest(Path::new("jobs"), &jobs)
        .unwrap_or_else(|e| panic!("Can't write manifest: {}", e));
    log::info!("{} jobs in the manifest", jobs.len());

    if args.test {
        return;
    }

    let mut present: Vec<SuiteKind> = jobs.iter().map(|job| job.suite).collect();
    present.sort_by_key(|suite| suite.name());
    present.dedup();
    let artifacts = artifacts::load(&present);

    let jobs = build_jobs(jobs, &config, &artifacts);
    let launcher = ParallelLauncher::new(&config.err_dir);
    launcher.run_jobs(&ProcessEngine, jobs);
}
