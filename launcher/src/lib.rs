#![doc = include_str!("../readme.md")]

pub mod artifact;
pub mod boot_check;
pub mod config;
pub mod factory;
pub mod filters;
pub mod manifest;
pub mod parallel_launcher;
pub mod run;
pub mod space;

pub use artifact::{Artifact, ArtifactSpec, SweepArtifacts};
pub use boot_check::BootCheck;
pub use config::LaunchConfig;
pub use factory::{build_jobs, Job};
pub use filters::{filtered_jobs, universal_filter};
pub use manifest::write_manifest;
pub use parallel_launcher::ParallelLauncher;
pub use run::{ProcessEngine, RunEngine, RunError, RunSpec};
pub use space::{Assignment, Axis, Suite, SuiteKind, SweepJob};
