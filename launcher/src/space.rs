//! Suite parameter spaces and their enumeration.

use std::fmt;

use serde::Serialize;

/// Identifies one sweep suite. Every per-suite table (feasibility rules,
/// timeouts, run scripts, disk images) dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuiteKind {
    #[serde(rename = "boot-exit")]
    BootExit,
    #[serde(rename = "npb")]
    Npb,
    #[serde(rename = "gapbs")]
    Gapbs,
    #[serde(rename = "parsec")]
    Parsec,
    #[serde(rename = "spec-2006")]
    Spec2006,
    #[serde(rename = "spec-2017")]
    Spec2017,
}

impl SuiteKind {
    pub fn name(&self) -> &'static str {
        match self {
            SuiteKind::BootExit => "boot-exit",
            SuiteKind::Npb => "npb",
            SuiteKind::Gapbs => "gapbs",
            SuiteKind::Parsec => "parsec",
            SuiteKind::Spec2006 => "spec-2006",
            SuiteKind::Spec2017 => "spec-2017",
        }
    }
}

impl fmt::Display for SuiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named, enumerated dimension of a suite's parameter space.
#[derive(Debug, Clone)]
pub struct Axis {
    pub name: String,
    pub values: Vec<String>,
}

impl Axis {
    pub fn new(name: &str, values: &[&str]) -> Axis {
        Axis {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// A suite: a tag plus its axes in declaration order. Axis order fixes both
/// the enumeration order and the key order used for output paths, manifest
/// lines and fault-trace file names.
#[derive(Debug, Clone)]
pub struct Suite {
    pub kind: SuiteKind,
    pub axes: Vec<Axis>,
}

impl Suite {
    pub fn new(kind: SuiteKind, axes: Vec<Axis>) -> Suite {
        Suite { kind, axes }
    }

    /// Number of raw combinations before filtering.
    pub fn combination_count(&self) -> usize {
        self.axes.iter().map(|a| a.values.len()).product()
    }

    /// Lazy cartesian product of the axis domains, in lexicographic order
    /// with the last declared axis varying fastest. Restartable: every call
    /// yields the same sequence.
    pub fn assignments(&self) -> Assignments<'_> {
        Assignments {
            suite: self,
            cursor: vec![0; self.axes.len()],
            done: self.axes.iter().any(|a| a.values.is_empty()),
        }
    }
}

/// One concrete value selection for every axis of a suite, stored as
/// `(axis, value)` pairs in the suite's declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assignment {
    pairs: Vec<(String, String)>,
}

impl Assignment {
    pub fn new(pairs: Vec<(String, String)>) -> Assignment {
        Assignment { pairs }
    }

    /// Value of a declared axis. A missing key is a registry/filter
    /// mismatch, not a filterable condition.
    pub fn get(&self, key: &str) -> &str {
        self.try_get(key)
            .unwrap_or_else(|| panic!("Can't find axis `{}` in assignment `{}`", key, self))
    }

    /// Lookup for rules that are conditional on an axis existing at all
    /// (e.g. spec-2017 declares no mem_sys axis).
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Axis values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, v)| v.as_str())
    }

    pub fn joined_values(&self, sep: &str) -> String {
        self.values().collect::<Vec<_>>().join(sep)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        Ok(())
    }
}

/// Iterator over the full cartesian product of a suite's axis domains.
pub struct Assignments<'a> {
    suite: &'a Suite,
    cursor: Vec<usize>,
    done: bool,
}

impl Iterator for Assignments<'_> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        if self.done || self.cursor.is_empty() {
            return None;
        }

        let pairs = self
            .suite
            .axes
            .iter()
            .zip(&self.cursor)
            .map(|(axis, &i)| (axis.name.clone(), axis.values[i].clone()))
            .collect();

        // Advance, last axis fastest.
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.suite.axes[pos].values.len() {
                return Some(Assignment::new(pairs));
            }
            self.cursor[pos] = 0;
            if pos == 0 {
                self.done = true;
            }
        }

        Some(Assignment::new(pairs))
    }
}

/// An accepted combination, ready for the manifest and the run factory.
#[derive(Debug, Clone, Serialize)]
pub struct SweepJob {
    pub suite: SuiteKind,
    pub params: Assignment,
}

impl fmt::Display for SweepJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suite, self.params)
    }
}
