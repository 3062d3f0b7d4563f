// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;

use std::fs::File;
use std::io::{self, BufReader, Write};

use tracing::debug;

use crate::cli::CliArgs;
use crate::dag::{DepGraph, Interner, ScheduleOutcome, Scheduler, TaskId};
use crate::errors::Result;

/// The computed result for one input batch.
///
/// Exactly one of the two is ever produced for well-formed input: a full
/// ordering, or the bare cycle report. Never both, never a mix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Every distinct task name exactly once, in topological order.
    Ordered(Vec<String>),
    /// At least one dependency cycle; no partial ordering is reported.
    Cycle,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - line collection from stdin or the optional input file
/// - interning / graph building / scheduling
/// - output to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let lines = match &args.input {
        Some(path) => input::read_lines(BufReader::new(File::open(path)?))?,
        None => input::read_lines(io::stdin().lock())?,
    };

    let plan = plan_from_lines(&lines)?;
    write_plan(io::stdout().lock(), &plan)
}

/// Run the full pipeline over an already-collected line sequence.
///
/// Element `2k` of `lines` is a task, element `2k + 1` its prerequisite.
/// Fails only on the structural precondition (odd line count); everything
/// else, including self-loops and duplicate pairs, is valid data.
pub fn plan_from_lines(lines: &[String]) -> Result<Plan> {
    input::ensure_even(lines)?;

    // Intern over the whole flattened sequence first, so prerequisite-only
    // names still get IDs in first-seen order.
    let mut interner = Interner::default();
    let pair_ids: Vec<TaskId> = lines.iter().map(|line| interner.intern(line)).collect();
    debug!(
        distinct = interner.len(),
        pairs = pair_ids.len() / 2,
        "interned task names"
    );

    let graph = DepGraph::from_pairs(interner.len(), &pair_ids);

    match Scheduler::new(&graph, &interner).run() {
        ScheduleOutcome::Ordered(ids) => Ok(Plan::Ordered(
            ids.into_iter()
                .map(|id| interner.name_of(id).to_string())
                .collect(),
        )),
        ScheduleOutcome::Cycle => Ok(Plan::Cycle),
    }
}

/// Print the plan: one task name per line, or the literal `cycle`.
pub fn write_plan(mut out: impl Write, plan: &Plan) -> Result<()> {
    match plan {
        Plan::Ordered(names) => {
            for name in names {
                writeln!(out, "{name}")?;
            }
        }
        Plan::Cycle => writeln!(out, "cycle")?,
    }
    Ok(())
}
