use crate::error::{EngineError, Result};
use crate::scanner;
use linecount_shared_kernel::LineCount;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open `path`, scan it to the end and release the handle.
///
/// The file is owned by this function and dropped on every return path,
/// including a failed scan.
pub fn process_path(path: &Path) -> Result<LineCount> {
    let file = File::open(path).map_err(|e| EngineError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::debug!("opened {}", path.display());

    let mut reader = BufReader::new(file);
    let lines = scanner::count_lines(&mut reader).map_err(|e| EngineError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::trace!("{}: scanned {lines} lines", path.display());

    Ok(lines)
}

/// Scan an already-open standard input stream. The stream is not closed.
pub fn process_stdin<R: BufRead + ?Sized>(reader: &mut R) -> Result<LineCount> {
    let lines = scanner::count_lines(reader).map_err(EngineError::StdinRead)?;
    log::trace!("<stdin>: scanned {lines} lines");
    Ok(lines)
}
