//! Run a query script against a record file

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::CliError;
use crate::{Interpreter, RecordStore, RunSummary, StoreError};

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Script to execute; `None` reads the script from the provided reader
    pub script: Option<PathBuf>,
    /// JSON file holding the county records
    pub data: PathBuf,
}

fn not_found(path: &Path, e: io::Error) -> CliError {
    if e.kind() == io::ErrorKind::NotFound {
        CliError::ResourceNotFound(path.to_path_buf())
    } else {
        CliError::Io(e)
    }
}

fn load_store(path: &Path) -> Result<RecordStore, CliError> {
    match RecordStore::load_json(path) {
        Ok(store) => Ok(store),
        Err(StoreError::Io(e)) => Err(not_found(path, e)),
        Err(e) => Err(CliError::Store(e)),
    }
}

/// Load the records, then execute the script line by line into `out`.
///
/// `stdin` is only read when `options.script` is `None`.
pub fn execute_run<R: BufRead, W: Write>(
    options: &RunOptions,
    stdin: R,
    out: &mut W,
) -> Result<RunSummary, CliError> {
    // Open the script first so a bad path fails before any output
    match &options.script {
        Some(path) => {
            debug!(script = %path.display(), "opening script");
            let file = File::open(path).map_err(|e| not_found(path, e))?;
            run_script(&options.data, BufReader::new(file), out)
        }
        None => run_script(&options.data, stdin, out),
    }
}

fn run_script<R: BufRead, W: Write>(
    data: &Path,
    script: R,
    out: &mut W,
) -> Result<RunSummary, CliError> {
    let store = load_store(data)?;
    let mut interpreter = Interpreter::new(&store);
    let summary = interpreter.run(script, out)?;
    Ok(summary)
}
