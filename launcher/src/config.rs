//! Launch configuration: the filesystem layout of a sweep and the
//! failure-check cadence. Read from `launch.yaml` when present.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Root under which every job's output directory is derived.
    pub output_root: PathBuf,
    /// gem5 checkout containing the `build/X86*` binaries.
    pub gem5_dir: PathBuf,
    /// gem5-resources checkout containing the per-suite run scripts.
    pub resources_dir: PathBuf,
    pub disk_images_dir: PathBuf,
    pub kernels_dir: PathBuf,
    /// Fault trace files land here, one per failed job.
    pub err_dir: PathBuf,
    /// Appended to every run name for provenance queries.
    pub run_name_suffix: String,
    pub check_interval_secs: u64,
}

impl Default for LaunchConfig {
    fn default() -> LaunchConfig {
        LaunchConfig {
            output_root: PathBuf::from("/projects/gem5/gem5-resources-21.0"),
            gem5_dir: PathBuf::from("gem5"),
            resources_dir: PathBuf::from("gem5-resources"),
            disk_images_dir: PathBuf::from("disk-images"),
            kernels_dir: PathBuf::from("linux-kernels"),
            err_dir: PathBuf::from("error_logs"),
            run_name_suffix: String::from("gem5art-status;v21.0"),
            check_interval_secs: 5,
        }
    }
}

impl LaunchConfig {
    pub fn from_file(path: &Path) -> LaunchConfig {
        let contents = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Can't read config file {}: {}", path.display(), e));
        serde_yaml::from_str(&contents)
            .unwrap_or_else(|e| panic!("Can't parse YAML from file {}: {}", path.display(), e))
    }

    /// `from_file` when the file exists, built-in defaults otherwise.
    pub fn load(path: &Path) -> LaunchConfig {
        if path.exists() {
            LaunchConfig::from_file(path)
        } else {
            LaunchConfig::default()
        }
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}
