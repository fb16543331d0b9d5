//! Infeasible-combination filtering: a universal rule set, a per-suite rule
//! set, and a caller-supplied predicate, combined by logical AND.

use crate::space::{Assignment, Suite, SuiteKind, SweepJob};

/// Suite-independent infeasibility rules. Conditional on the keys being
/// declared at all, since not every suite carries every axis.
pub fn universal_filter(params: &Assignment) -> bool {
    if params.try_get("cpu") == Some("atomic") {
        if let Some(mem_sys) = params.try_get("mem_sys") {
            if mem_sys != "classic" {
                return false;
            }
        }
    }
    if params.try_get("cpu") == Some("o3") && params.try_get("mem_sys") == Some("classic") {
        if let Some(num_cpu) = params.try_get("num_cpu") {
            if num_cpu != "1" {
                return false;
            }
        }
    }
    true
}

impl SuiteKind {
    /// Per-suite feasibility. These rules come from the upstream benchmark
    /// support matrix; a required axis key missing here is a registry bug
    /// and panics.
    pub fn feasible(&self, params: &Assignment) -> bool {
        match self {
            SuiteKind::BootExit => true,
            SuiteKind::Npb => {
                params.get("cpu") != "timing" || matches!(params.get("num_cpu"), "1" | "8")
            }
            // Overlaps with the universal atomic rule on purpose; the two
            // are enforced independently.
            SuiteKind::Gapbs => {
                params.get("cpu") != "atomic" || params.get("mem_sys") == "classic"
            }
            SuiteKind::Parsec => parsec_feasible(params),
            SuiteKind::Spec2006 | SuiteKind::Spec2017 => {
                params.get("size") != "ref" || params.get("cpu") == "kvm"
            }
        }
    }
}

fn parsec_feasible(params: &Assignment) -> bool {
    let cpu = params.get("cpu");
    let mem_sys = params.get("mem_sys");
    let num_cpu = params.get("num_cpu");
    let size = params.get("size");

    match (cpu, mem_sys) {
        ("kvm", "classic") => num_cpu == "1",
        ("kvm", "MESI_Two_Level") => true,
        ("timing", "classic") => size == "simsmall" && num_cpu == "1",
        ("timing", "MESI_Two_Level") => {
            (size == "simsmall" && matches!(num_cpu, "1" | "2")) || size == "simmedium"
        }
        _ => false,
    }
}

/// A combination is dispatched iff the caller's filter, the suite filter and
/// the universal filter all accept it.
pub fn accepted<F>(suite: SuiteKind, params: &Assignment, custom_filter: &F) -> bool
where
    F: Fn(SuiteKind, &Assignment) -> bool,
{
    custom_filter(suite, params) && suite.feasible(params) && universal_filter(params)
}

/// Enumerate every suite in order and keep the accepted combinations.
/// Materialized so the manifest and the job count exist before dispatch.
pub fn filtered_jobs<F>(suites: &[Suite], custom_filter: F) -> Vec<SweepJob>
where
    F: Fn(SuiteKind, &Assignment) -> bool,
{
    let mut jobs = Vec::new();
    for suite in suites {
        for params in suite.assignments() {
            if accepted(suite.kind, &params, &custom_filter) {
                jobs.push(SweepJob {
                    suite: suite.kind,
                    params,
                });
            }
        }
    }
    jobs
}
