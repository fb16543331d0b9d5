//! Provenance registration seam. Artifact bookkeeping itself lives in an
//! external library; the launcher only records the metadata and forwards
//! opaque handles into run descriptors.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::space::SuiteKind;

/// Descriptive metadata for one registered artifact: how it was produced and
/// where it lives.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtifactSpec {
    pub command: String,
    pub typ: String,
    pub name: String,
    pub path: String,
    pub cwd: String,
    pub inputs: Vec<Artifact>,
    pub documentation: String,
}

/// Opaque handle returned by registration. Downstream code only passes it
/// into `RunSpec`; there is no further contract.
#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    spec: ArtifactSpec,
}

impl Artifact {
    pub fn register(spec: ArtifactSpec) -> Artifact {
        log::debug!("Registered {} artifact `{}`", spec.typ, spec.name);
        Artifact { spec }
    }
}

/// Every artifact the run factory can reference, built once before the pool
/// starts and threaded through explicitly. Disk images are registered only
/// for the suites present in the filtered job set.
pub struct SweepArtifacts {
    pub gem5_repo: Artifact,
    pub experiments_repo: Artifact,
    /// Keyed by mem_sys value; "classic" is the default build.
    pub gem5_binaries: FxHashMap<String, Artifact>,
    /// Keyed by kernel version.
    pub linux_kernels: FxHashMap<String, Artifact>,
    pub disk_images: FxHashMap<SuiteKind, Artifact>,
}

impl SweepArtifacts {
    pub fn gem5_binary(&self, mem_sys: &str) -> &Artifact {
        self.gem5_binaries
            .get(mem_sys)
            .unwrap_or_else(|| panic!("Can't find gem5 binary artifact for mem_sys `{}`", mem_sys))
    }

    pub fn linux_kernel(&self, version: &str) -> &Artifact {
        self.linux_kernels
            .get(version)
            .unwrap_or_else(|| panic!("Can't find kernel artifact for version `{}`", version))
    }

    pub fn disk_image(&self, suite: SuiteKind) -> &Artifact {
        self.disk_images
            .get(&suite)
            .unwrap_or_else(|| panic!("Can't find disk image artifact for suite `{}`", suite))
    }
}
