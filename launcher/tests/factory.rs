use std::path::Path;
use std::time::Duration;

use rustc_hash::FxHashMap;

use gem5_launcher::factory::{build_job, gem5_binary_path, output_dir};
use gem5_launcher::{
    Artifact, ArtifactSpec, Assignment, LaunchConfig, SuiteKind, SweepArtifacts, SweepJob,
};

fn handle(name: &str) -> Artifact {
    Artifact::register(ArtifactSpec {
        name: name.to_string(),
        ..Default::default()
    })
}

fn artifacts() -> SweepArtifacts {
    let mut gem5_binaries = FxHashMap::default();
    for mem_sys in ["classic", "MI_example", "MESI_Two_Level", "MOESI_CMP_directory"] {
        gem5_binaries.insert(mem_sys.to_string(), handle(&format!("gem5-{}", mem_sys)));
    }

    let mut linux_kernels = FxHashMap::default();
    for version in ["4.4.186", "4.19.83", "5.4.49"] {
        linux_kernels.insert(version.to_string(), handle(&format!("vmlinux-{}", version)));
    }

    let mut disk_images = FxHashMap::default();
    for suite in [
        SuiteKind::BootExit,
        SuiteKind::Npb,
        SuiteKind::Gapbs,
        SuiteKind::Parsec,
        SuiteKind::Spec2006,
        SuiteKind::Spec2017,
    ] {
        disk_images.insert(suite, handle(&format!("{}-disk-image", suite)));
    }

    SweepArtifacts {
        gem5_repo: handle("gem5"),
        experiments_repo: handle("gem5art-tests"),
        gem5_binaries,
        linux_kernels,
        disk_images,
    }
}

fn asg(pairs: &[(&str, &str)]) -> Assignment {
    Assignment::new(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn boot_job(cpu: &str, mem_sys: &str) -> SweepJob {
    SweepJob {
        suite: SuiteKind::BootExit,
        params: asg(&[
            ("kernel", "4.19.83"),
            ("cpu", cpu),
            ("mem_sys", mem_sys),
            ("num_cpu", "1"),
            ("boot_type", "init"),
        ]),
    }
}

#[test]
fn test_binary_variant_selection() {
    let config = LaunchConfig::default();
    assert_eq!(
        gem5_binary_path(&config, "classic"),
        config.gem5_dir.join("build/X86/gem5.opt")
    );
    assert_eq!(
        gem5_binary_path(&config, "MESI_Two_Level"),
        config.gem5_dir.join("build/X86_MESI_Two_Level/gem5.opt")
    );
}

#[test]
fn test_output_dir_follows_declared_axis_order() {
    let config = LaunchConfig::default();
    let dir = output_dir(&config, &boot_job("kvm", "classic"));
    assert_eq!(
        dir,
        config
            .output_root
            .join("boot-exit/4.19.83/kvm/classic/1/init")
    );
}

#[test]
fn test_output_dirs_are_disjoint_across_assignments() {
    let config = LaunchConfig::default();
    let a = output_dir(&config, &boot_job("kvm", "classic"));
    let b = output_dir(&config, &boot_job("kvm", "MESI_Two_Level"));
    let c = output_dir(&config, &boot_job("o3", "classic"));
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
}

#[test]
fn test_timeout_tiers() {
    let config = LaunchConfig::default();
    let artifacts = artifacts();

    let kvm = build_job(boot_job("kvm", "classic"), &config, &artifacts);
    assert_eq!(kvm.spec.timeout, Duration::from_secs(12 * 60 * 60));

    let o3 = build_job(boot_job("o3", "classic"), &config, &artifacts);
    assert_eq!(o3.spec.timeout, Duration::from_secs(2 * 24 * 60 * 60));

    let spec_ref = SweepJob {
        suite: SuiteKind::Spec2006,
        params: asg(&[
            ("kernel", "4.19.83"),
            ("cpu", "timing"),
            ("mem_sys", "classic"),
            ("workload", "401.bzip2"),
            ("size", "test"),
        ]),
    };
    let job = build_job(spec_ref, &config, &artifacts);
    assert_eq!(job.spec.timeout, Duration::from_secs(20 * 24 * 60 * 60));
}

#[test]
fn test_check_policy_matches_job_timeout() {
    let config = LaunchConfig::default();
    let job = build_job(boot_job("kvm", "classic"), &config, &artifacts());
    assert_eq!(job.spec.check.timeout, job.spec.timeout);
    assert_eq!(job.spec.check.interval, config.check_interval());
    assert_eq!(job.spec.check.marker, "Done booting Linux");
}

#[test]
fn test_spec_2017_always_runs_the_classic_build() {
    let config = LaunchConfig::default();
    let sweep_job = SweepJob {
        suite: SuiteKind::Spec2017,
        params: asg(&[
            ("kernel", "4.19.83"),
            ("cpu", "kvm"),
            ("workload", "619.lbm_s"),
            ("size", "ref"),
        ]),
    };
    let job = build_job(sweep_job, &config, &artifacts());
    assert_eq!(job.spec.binary, config.gem5_dir.join("build/X86/gem5.opt"));
}

#[test]
fn test_parsec_run_script_depends_on_mem_sys() {
    let config = LaunchConfig::default();
    let artifacts = artifacts();

    let classic = SweepJob {
        suite: SuiteKind::Parsec,
        params: asg(&[
            ("kernel", "4.19.83"),
            ("cpu", "kvm"),
            ("mem_sys", "classic"),
            ("num_cpu", "1"),
            ("workload", "blackscholes"),
            ("size", "simsmall"),
        ]),
    };
    let job = build_job(classic, &config, &artifacts);
    assert!(job
        .spec
        .run_script
        .ends_with(Path::new("src/parsec/configs/run_parsec.py")));

    let mesi = SweepJob {
        suite: SuiteKind::Parsec,
        params: asg(&[
            ("kernel", "4.19.83"),
            ("cpu", "kvm"),
            ("mem_sys", "MESI_Two_Level"),
            ("num_cpu", "1"),
            ("workload", "blackscholes"),
            ("size", "simsmall"),
        ]),
    };
    let job = build_job(mesi, &config, &artifacts);
    assert!(job.spec.run_script.ends_with(Path::new(
        "src/parsec/configs-mesi-two-level/run_parsec_mesi_two_level.py"
    )));
}

#[test]
fn test_script_params_follow_suite_order() {
    let config = LaunchConfig::default();
    let sweep_job = SweepJob {
        suite: SuiteKind::Gapbs,
        params: asg(&[
            ("kernel", "5.4.49"),
            ("cpu", "kvm"),
            ("num_cpu", "2"),
            ("mem_sys", "classic"),
            ("workload", "bfs"),
            ("synthetic", "1"),
            ("n_nodes", "10"),
        ]),
    };
    let job = build_job(sweep_job, &config, &artifacts());

    // Kernel and disk image paths lead, then the gapbs argument order.
    assert!(job.spec.params[0].ends_with("vmlinux-5.4.49"));
    assert!(job.spec.params[1].ends_with("gapbs.img"));
    let tail: Vec<&str> = job.spec.params[2..].iter().map(|s| s.as_str()).collect();
    assert_eq!(tail, vec!["kvm", "2", "classic", "bfs", "1", "10"]);
}

#[test]
#[should_panic(expected = "Can't find gem5 binary artifact")]
fn test_missing_binary_artifact_is_fatal() {
    let config = LaunchConfig::default();
    let mut artifacts = artifacts();
    artifacts.gem5_binaries.clear();
    build_job(boot_job("kvm", "classic"), &config, &artifacts);
}
