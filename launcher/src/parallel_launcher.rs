//! Bounded parallel dispatch of sweep jobs with per-job fault isolation.

use std::any::Any;
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::thread;

use crate::factory::Job;
use crate::run::{RunEngine, RunError};

pub struct ParallelLauncher {
    pub workers: usize,
    err_dir: PathBuf,
}

impl ParallelLauncher {
    /// Pool sized at half the host's available parallelism: each job's
    /// simulator process may itself use several host threads.
    pub fn new(err_dir: &Path) -> ParallelLauncher {
        let workers = thread::available_parallelism()
            .map(|n| n.get() / 2)
            .unwrap_or(1);
        ParallelLauncher::with_workers(err_dir, workers)
    }

    pub fn with_workers(err_dir: &Path, workers: usize) -> ParallelLauncher {
        fs::create_dir_all(err_dir)
            .unwrap_or_else(|e| panic!("Can't create error dir {}: {}", err_dir.display(), e));
        ParallelLauncher {
            workers: workers.max(1),
            err_dir: err_dir.to_path_buf(),
        }
    }

    /// Run every job to completion. Jobs are independent — disjoint output
    /// directories, checked here — so workers need no coordination beyond
    /// the shared queue.
    pub fn run_jobs<E: RunEngine>(&self, engine: &E, jobs: Vec<Job>) {
        let mut output_dirs = HashSet::new();
        for job in &jobs {
            if !output_dirs.insert(job.spec.outdir.clone()) {
                panic!("Output dir {} is already in use", job.spec.outdir.display());
            }
        }

        log::info!("Dispatching {} jobs on {} workers", jobs.len(), self.workers);

        let (tx, rx) = crossbeam_channel::unbounded();
        for job in jobs {
            tx.send(job).unwrap();
        }
        drop(tx);

        thread::scope(|scope| {
            for _ in 0..self.workers {
                let rx = rx.clone();
                scope.spawn(move || {
                    for job in rx.iter() {
                        self.run_one(engine, job);
                    }
                });
            }
        });
    }

    /// Single-job boundary: any fault raised by the blocking run call —
    /// error or panic — is serialized to a trace file and the worker moves
    /// on. No retry.
    fn run_one<E: RunEngine>(&self, engine: &E, job: Job) {
        log::info!("Starting running {} {}", job.suite, job.params);
        match panic::catch_unwind(AssertUnwindSafe(|| engine.execute(&job.spec))) {
            Ok(Ok(())) => log::info!("Finished {} {}", job.suite, job.params),
            Ok(Err(err)) => self.write_fault_trace(&job, &render_error(&err)),
            Err(payload) => self.write_fault_trace(&job, &render_panic(&payload)),
        }
    }

    fn write_fault_trace(&self, job: &Job, trace: &str) {
        let path = self.err_dir.join(job.params.joined_values("_"));
        log::error!("{} {} failed, trace in {}", job.suite, job.params, path.display());

        let identity = serde_json::json!({ "suite": job.suite, "params": job.params });
        if let Err(err) = fs::write(&path, format!("{}\n{}\n", identity, trace)) {
            log::error!("Can't write fault trace {}: {}", path.display(), err);
        }
    }
}

fn render_error(err: &RunError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

fn render_panic(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {}", s)
    } else {
        String::from("panic with non-string payload")
    }
}
