// crates/engine/src/report.rs
use crate::error::EngineError;
use linecount_shared_kernel::LineCount;
use std::io;
use std::path::Path;

/// Sink for everything a run reports, called in real time as each resource finishes.
pub trait Reporter {
    fn on_file(&mut self, path: &Path, lines: LineCount) -> io::Result<()>;
    fn on_stdin(&mut self, lines: LineCount) -> io::Result<()>;
    fn on_failure(&mut self, error: &EngineError) -> io::Result<()>;
    fn on_total(&mut self, lines: LineCount, files: usize) -> io::Result<()>;

    fn on_complete(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_file(&mut self, path: &Path, lines: LineCount) -> io::Result<()> {
        (**self).on_file(path, lines)
    }

    fn on_stdin(&mut self, lines: LineCount) -> io::Result<()> {
        (**self).on_stdin(lines)
    }

    fn on_failure(&mut self, error: &EngineError) -> io::Result<()> {
        (**self).on_failure(error)
    }

    fn on_total(&mut self, lines: LineCount, files: usize) -> io::Result<()> {
        (**self).on_total(lines, files)
    }

    fn on_complete(&mut self) -> io::Result<()> {
        (**self).on_complete()
    }
}
