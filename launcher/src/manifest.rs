//! Plain-text job manifest: one line per accepted combination, written
//! before dispatch so the full sweep is on disk up front.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::space::SweepJob;

pub fn write_manifest(path: &Path, jobs: &[SweepJob]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for job in jobs {
        writeln!(out, "{}", job)?;
    }
    out.flush()
}
