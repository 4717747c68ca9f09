use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::{
    aggregate,
    ast::{Command, Measure},
    error::QueryError,
    output,
    parser::parse_line,
    predicate,
    record::{Record, RecordStore},
};

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Script lines read
    pub lines: usize,
    /// Lines that reported an error
    pub errors: usize,
}

/// Executes script lines against a record store.
///
/// The interpreter owns the working set: the records that aggregation and
/// display commands currently see. It starts as the whole store and is
/// replaced by every filter command. Filters narrow cumulatively, each one
/// applying to the result of the previous filter; the full store is never
/// re-read after construction.
///
/// One interpreter serves one script. Build a new one per run.
///
/// # Examples
///
/// ```
/// use county_query::{Interpreter, Record, RecordStore};
///
/// let store = RecordStore::new(vec![
///     Record::new("Alpha County", "CA", 100).with_poverty_rate(10.0),
///     Record::new("Beta County", "NV", 200).with_poverty_rate(50.0),
/// ]);
///
/// let mut interpreter = Interpreter::new(&store);
/// assert_eq!(interpreter.execute_line("population-total").unwrap(), "2014 Population: 300");
///
/// interpreter.execute_line("filter-state:CA").unwrap();
/// assert_eq!(interpreter.working_set().len(), 1);
/// ```
pub struct Interpreter<'a> {
    store: &'a RecordStore,
    working_set: Vec<&'a Record>,
    line_number: usize,
}

impl<'a> Interpreter<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Interpreter {
            store,
            working_set: store.iter().collect(),
            line_number: 0,
        }
    }

    pub fn working_set(&self) -> &[&'a Record] {
        &self.working_set
    }

    /// Number of lines executed so far, across [`Interpreter::execute_line`] and [`Interpreter::run`]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Runs a whole script, writing the banner, one message per line, and an
    /// error message for every line that fails.
    ///
    /// Errors are reported with the line's position in `script`, counted from 1.
    /// Bytes that are not valid UTF-8 are replaced, so such a line fails like
    /// any other malformed line. A failing line never stops the run; only a
    /// read failure on `script` or a write failure on `out` does.
    pub fn run<R: BufRead, W: Write>(&mut self, script: R, out: &mut W) -> Result<RunSummary, QueryError> {
        let mut summary = RunSummary::default();
        writeln!(out, "{}", output::banner(self.store.len()))?;

        for raw in script.split(b'\n') {
            let mut raw = raw?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = String::from_utf8_lossy(&raw);
            summary.lines += 1;

            match self.execute_line(&line) {
                Ok(message) if message.is_empty() => {}
                Ok(message) => writeln!(out, "{}", message)?,
                Err(e) => {
                    warn!(line = summary.lines, error = %e, "line failed");
                    summary.errors += 1;
                    writeln!(out, "{}", output::line_error(summary.lines, &line))?;
                }
            }
        }

        info!(
            lines = summary.lines,
            errors = summary.errors,
            remaining = self.working_set.len(),
            "script finished"
        );
        Ok(summary)
    }

    /// Parses and executes one line, returning the message to print.
    ///
    /// On error the working set is left as it was.
    pub fn execute_line(&mut self, line: &str) -> Result<String, QueryError> {
        self.line_number += 1;
        let command = parse_line(line);
        debug!(line = self.line_number, kind = command.kind(), "executing command");
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<String, QueryError> {
        let records = self.working_set.as_slice();
        match command {
            Command::FilterState(code) => {
                let narrowed = predicate::filter_state(records, &code);
                let message = output::state_filter_summary(&code, narrowed.len());
                Ok(self.narrow(narrowed, message))
            }
            Command::FilterThreshold {
                category,
                comparison,
                threshold,
            } => {
                let narrowed =
                    predicate::filter_threshold(records, &category, comparison, threshold);
                let message = output::threshold_filter_summary(
                    &category,
                    comparison,
                    threshold,
                    narrowed.len(),
                );
                Ok(self.narrow(narrowed, message))
            }
            Command::PopulationTotal => Ok(output::population_total(
                aggregate::total_population(records),
            )),
            Command::Display => Ok(output::display(records)),
            Command::Measure { measure, category } => {
                let value = match measure {
                    Measure::Population => {
                        aggregate::subpopulation(records, category.domain, &category.key)
                    }
                    Measure::Percent => {
                        aggregate::percentage(records, category.domain, &category.key)?
                    }
                };
                Ok(output::measure_result(measure, &category.key, value))
            }
            Command::Malformed { error, .. } => Err(error.into()),
        }
    }

    fn narrow(&mut self, narrowed: Vec<&'a Record>, message: String) -> String {
        debug!(
            before = self.working_set.len(),
            after = narrowed.len(),
            "working set narrowed"
        );
        self.working_set = narrowed;
        message
    }
}
