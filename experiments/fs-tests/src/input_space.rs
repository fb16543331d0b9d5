//! Static parameter tables: the axes and value domains of every suite in
//! this sweep. Axis order is significant — it fixes enumeration order,
//! output paths and manifest lines.

use gem5_launcher::{Axis, Suite, SuiteKind};

pub fn boot_exit() -> Suite {
    Suite::new(
        SuiteKind::BootExit,
        vec![
            Axis::new(
                "kernel",
                &["4.4.186", "4.9.186", "4.14.134", "4.19.83", "5.4.49"],
            ),
            Axis::new("cpu", &["kvm", "atomic", "simple", "o3"]),
            Axis::new(
                "mem_sys",
                &["classic", "MI_example", "MESI_Two_Level", "MOESI_CMP_directory"],
            ),
            Axis::new("num_cpu", &["1", "2", "4", "8"]),
            Axis::new("boot_type", &["init", "systemd"]),
        ],
    )
}

pub fn npb() -> Suite {
    Suite::new(
        SuiteKind::Npb,
        vec![
            Axis::new("kernel", &["4.19.83"]),
            Axis::new("cpu", &["kvm", "timing"]),
            Axis::new("mem_sys", &["classic", "MESI_Two_Level"]),
            Axis::new("num_cpu", &["1", "8", "16", "32", "64"]),
            Axis::new(
                "workload",
                &[
                    "is.A.x", "ep.A.x", "cg.A.x", "mg.A.x", "ft.A.x", "bt.A.x", "sp.A.x",
                    "lu.A.x",
                ],
            ),
        ],
    )
}

pub fn gapbs() -> Suite {
    Suite::new(
        SuiteKind::Gapbs,
        vec![
            Axis::new("kernel", &["5.4.49"]),
            Axis::new("cpu", &["kvm", "atomic", "simple", "o3"]),
            Axis::new("num_cpu", &["1", "2", "4"]),
            Axis::new("mem_sys", &["classic", "MI_example", "MESI_Two_Level"]),
            Axis::new("workload", &["cc", "bc", "bfs", "tc", "pr", "sssp"]),
            Axis::new("synthetic", &["1"]),
            // 2**10 graph nodes
            Axis::new("n_nodes", &["10"]),
        ],
    )
}

pub fn parsec() -> Suite {
    Suite::new(
        SuiteKind::Parsec,
        vec![
            Axis::new("kernel", &["4.19.83", "4.15.18"]),
            Axis::new("cpu", &["kvm", "timing"]),
            Axis::new("mem_sys", &["classic", "MESI_Two_Level"]),
            Axis::new("num_cpu", &["1", "2", "8"]),
            Axis::new(
                "workload",
                &[
                    "blackscholes",
                    "bodytrack",
                    "canneal",
                    "dedup",
                    "facesim",
                    "ferret",
                    "fluidanimate",
                    "freqmine",
                    "raytrace",
                    "streamcluster",
                    "swaptions",
                    "vips",
                    "x264",
                ],
            ),
            Axis::new("size", &["simsmall", "simmedium", "simlarge", "native"]),
        ],
    )
}

pub fn spec_2006() -> Suite {
    Suite::new(
        SuiteKind::Spec2006,
        vec![
            Axis::new("kernel", &["4.19.83"]),
            Axis::new("cpu", &["kvm", "atomic", "timing", "o3"]),
            Axis::new(
                "mem_sys",
                &["classic", "MI_example", "MESI_Two_Level", "MOESI_CMP_directory"],
            ),
            Axis::new(
                "workload",
                &[
                    "401.bzip2",
                    "403.gcc",
                    "410.bwaves",
                    "416.gamess",
                    "429.mcf",
                    "433.milc",
                    "434.zeusmp",
                    "435.gromacs",
                    "436.cactusADM",
                    "437.leslie3d",
                    "444.namd",
                    "445.gobmk",
                    "453.povray",
                    "454.calculix",
                    "456.hmmer",
                    "458.sjeng",
                    "459.GemsFDTD",
                    "462.libquantum",
                    "464.h264ref",
                    "465.tonto",
                    "470.lbm",
                    "471.omnetpp",
                    "473.astar",
                    "481.wrf",
                    "482.sphinx3",
                    "998.specrand",
                    "999.specrand",
                ],
            ),
            Axis::new("size", &["test", "ref"]),
        ],
    )
}

pub fn spec_2017() -> Suite {
    Suite::new(
        SuiteKind::Spec2017,
        vec![
            Axis::new("kernel", &["4.19.83"]),
            Axis::new("cpu", &["kvm", "atomic", "timing", "o3"]),
            Axis::new(
                "workload",
                &[
                    "503.bwaves_r",
                    "507.cactuBSSN_r",
                    "508.namd_r",
                    "510.parest_r",
                    "511.povray_r",
                    "519.lbm_r",
                    "521.wrf_r",
                    "526.blender_r",
                    "527.cam4_r",
                    "538.imagick_r",
                    "544.nab_r",
                    "549.fotonik3d_r",
                    "554.roms_r",
                    "997.specrand_fr",
                    "603.bwaves_s",
                    "607.cactuBSSN_s",
                    "619.lbm_s",
                    "621.wrf_s",
                    "627.cam4_s",
                    "628.pop2_s",
                    "638.imagick_s",
                    "644.nab_s",
                    "649.fotonik3d_s",
                    "654.roms_s",
                    "996.specrand_fs",
                    "500.perlbench_r",
                    "502.gcc_r",
                    "505.mcf_r",
                    "520.omnetpp_r",
                    "523.xalancbmk_r",
                    "525.x264_r",
                    "531.deepsjeng_r",
                    "541.leela_r",
                    "548.exchange2_r",
                    "557.xz_r",
                    "999.specrand_ir",
                    "600.perlbench_s",
                    "602.gcc_s",
                    "605.mcf_s",
                    "620.omnetpp_s",
                    "623.xalancbmk_s",
                    "625.x264_s",
                    "631.deepsjeng_s",
                    "641.leela_s",
                    "648.exchange2_s",
                    "657.xz_s",
                    "998.specrand_is",
                ],
            ),
            Axis::new("size", &["test", "ref"]),
        ],
    )
}

pub fn all_suites() -> Vec<Suite> {
    vec![
        boot_exit(),
        npb(),
        gapbs(),
        parsec(),
        spec_2006(),
        spec_2017(),
    ]
}
