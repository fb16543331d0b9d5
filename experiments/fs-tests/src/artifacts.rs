//! Artifact registrations: the gem5 builds, Linux kernels, disk images and
//! the repos they were produced from. Registered once before the worker
//! pool starts; disk images only for the suites that have accepted jobs.

use gem5_launcher::{Artifact, ArtifactSpec, SuiteKind, SweepArtifacts};
use rustc_hash::FxHashMap;

const GEM5_HEAD: &str = "ea7d012c00e5555857ef999b88a8ec2bde801a1f";

const RUBY_MEM_TYPES: [&str; 3] = ["MI_example", "MESI_Two_Level", "MOESI_CMP_directory"];
const LINUX_VERSIONS: [&str; 5] = ["5.4.49", "4.19.83", "4.14.134", "4.9.186", "4.4.186"];

fn experiments_repo() -> Artifact {
    Artifact::register(ArtifactSpec {
        command: String::from("git clone https://github.com/darchr/gem5art-experiments"),
        typ: String::from("git repo"),
        name: String::from("gem5art-tests"),
        path: String::from("./"),
        cwd: String::from("../"),
        documentation: String::from(
            "main experiments repo to run all full system tests with gem5",
        ),
        ..Default::default()
    })
}

fn gem5_repo() -> Artifact {
    Artifact::register(ArtifactSpec {
        command: String::from(
            "git clone https://gem5.googlesource.com/public/gem5; \
             cd gem5; git checkout v21.0.0.0",
        ),
        typ: String::from("git repo"),
        name: String::from("gem5"),
        path: String::from("gem5/"),
        cwd: String::from("./"),
        documentation: format!(
            "Cloned gem5 from googlesource, checked out the v21.0.0.0 tag. \
             The HEAD commit is: {}",
            GEM5_HEAD
        ),
        ..Default::default()
    })
}

fn m5_binary(gem5_repo: &Artifact) -> Artifact {
    Artifact::register(ArtifactSpec {
        command: String::from("scons build/x86/out/m5"),
        typ: String::from("binary"),
        name: String::from("m5"),
        path: String::from("gem5/util/m5/build/x86/out/m5"),
        cwd: String::from("gem5/util/m5"),
        inputs: vec![gem5_repo.clone()],
        documentation: String::from("m5 utility"),
    })
}

fn packer_binary() -> Artifact {
    Artifact::register(ArtifactSpec {
        command: String::from(
            "wget https://releases.hashicorp.com/packer/1.6.5/packer_1.6.5_linux_amd64.zip; \
             unzip packer_1.6.5_linux_amd64.zip",
        ),
        typ: String::from("binary"),
        name: String::from("packer"),
        path: String::from("packer"),
        cwd: String::from("./"),
        documentation: String::from("Program to build disk images"),
        ..Default::default()
    })
}

fn gem5_binaries(gem5_repo: &Artifact) -> FxHashMap<String, Artifact> {
    let mut binaries = FxHashMap::default();
    for mem in RUBY_MEM_TYPES {
        binaries.insert(
            mem.to_string(),
            Artifact::register(ArtifactSpec {
                command: format!(
                    "cd gem5; scons build/X86_{}/gem5.opt --default=X86 PROTOCOL={} -j48",
                    mem, mem
                ),
                typ: String::from("gem5 binary"),
                name: format!("gem5-{}", mem),
                path: format!("gem5/build/X86_{}/gem5.opt", mem),
                cwd: String::from("gem5/"),
                inputs: vec![gem5_repo.clone()],
                documentation: format!(
                    "gem5 {} binary based on gem5 v21.0.0.0, HEAD commit {}",
                    mem, GEM5_HEAD
                ),
            }),
        );
    }
    binaries.insert(
        String::from("classic"),
        Artifact::register(ArtifactSpec {
            command: String::from("cd gem5; scons build/X86/gem5.opt -j48"),
            typ: String::from("gem5 binary"),
            name: String::from("gem5-classic"),
            path: String::from("gem5/build/X86/gem5.opt"),
            cwd: String::from("gem5/"),
            inputs: vec![gem5_repo.clone()],
            documentation: format!(
                "gem5 binary based on gem5 v21.0.0.0, HEAD commit {}",
                GEM5_HEAD
            ),
        }),
    );
    binaries
}

fn linux_kernels(experiments_repo: &Artifact) -> FxHashMap<String, Artifact> {
    LINUX_VERSIONS
        .iter()
        .map(|version| {
            let artifact = Artifact::register(ArtifactSpec {
                command: format!(
                    "wget http://dist.gem5.org/dist/v21-0/kernels/x86/static/vmlinux-{}",
                    version
                ),
                typ: String::from("kernel"),
                name: format!("vmlinux-{}", version),
                path: format!("linux-kernels/vmlinux-{}", version),
                cwd: String::from("linux-kernels/"),
                inputs: vec![experiments_repo.clone()],
                documentation: format!("Kernel binary for {} with simple config file", version),
            });
            (version.to_string(), artifact)
        })
        .collect()
}

fn prebuilt_disk_image(suite: SuiteKind, documentation: &str) -> Artifact {
    let image = format!("{}.img", suite);
    Artifact::register(ArtifactSpec {
        command: format!(
            "wget http://dist.gem5.org/dist/v21-0/images/x86/ubuntu-18-04/{}.gz; gunzip {}.gz",
            image, image
        ),
        typ: String::from("disk image"),
        name: format!("{}-disk-image", suite),
        path: format!("disk-images/{}", image),
        cwd: String::from("disk-images/"),
        documentation: documentation.to_string(),
        ..Default::default()
    })
}

fn packer_disk_image(
    suite: SuiteKind,
    packer_json: &str,
    inputs: Vec<Artifact>,
    documentation: &str,
) -> Artifact {
    Artifact::register(ArtifactSpec {
        command: format!(
            "./packer build {}; mv disk-image/{}/{}-image/{} ../../../disk-images/",
            packer_json, suite, suite, suite
        ),
        typ: String::from("disk image"),
        name: format!("{}-disk-image", suite),
        path: format!("disk-images/{}", suite),
        cwd: format!("gem5-resources/src/{}/disk-image/", suite),
        inputs,
        documentation: documentation.to_string(),
    })
}

fn disk_image(
    suite: SuiteKind,
    packer: &Artifact,
    experiments_repo: &Artifact,
    m5: &Artifact,
) -> Artifact {
    match suite {
        SuiteKind::BootExit => prebuilt_disk_image(
            suite,
            "Ubuntu with m5 binary installed and root auto login",
        ),
        SuiteKind::Npb => prebuilt_disk_image(
            suite,
            "Ubuntu with m5 binary and NPB (with ROI annotations) installed",
        ),
        SuiteKind::Gapbs => prebuilt_disk_image(
            suite,
            "Ubuntu with m5 binary installed and root auto login and gapbs installed",
        ),
        SuiteKind::Parsec => prebuilt_disk_image(
            suite,
            "Disk-image using Ubuntu 18.04 with m5 binary and PARSEC installed",
        ),
        SuiteKind::Spec2006 => packer_disk_image(
            suite,
            "spec-2006/spec-2006.json",
            vec![packer.clone(), experiments_repo.clone(), m5.clone()],
            "Ubuntu Server with SPEC 2006 installed, m5 binary installed and root auto login",
        ),
        SuiteKind::Spec2017 => packer_disk_image(
            suite,
            "spec2017/spec2017.json",
            vec![packer.clone(), experiments_repo.clone(), m5.clone()],
            "Ubuntu Server with SPEC 2017 installed, m5 binary installed and root auto login",
        ),
    }
}

/// Register everything the run factory can reference. `present` is the set
/// of suites that survived filtering; only their disk images are loaded.
pub fn load(present: &[SuiteKind]) -> SweepArtifacts {
    let experiments = experiments_repo();
    let gem5 = gem5_repo();
    let m5 = m5_binary(&gem5);
    let packer = packer_binary();

    let mut disk_images = FxHashMap::default();
    for &suite in present {
        log::info!("Loading {} artifacts", suite);
        disk_images.insert(suite, disk_image(suite, &packer, &experiments, &m5));
    }

    SweepArtifacts {
        gem5_binaries: gem5_binaries(&gem5),
        linux_kernels: linux_kernels(&experiments),
        gem5_repo: gem5,
        experiments_repo: experiments,
        disk_images,
    }
}
