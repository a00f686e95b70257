// crates/cli/src/presentation.rs
use linecount_engine::error::EngineError;
use linecount_engine::report::Reporter;
use linecount_shared_kernel::LineCount;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Plain `wc -l` style lines. Diagnostics go to `err`, never to `out`.
pub struct TextReporter<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> TextReporter<O, E> {
    pub const fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for TextReporter<O, E> {
    fn on_file(&mut self, path: &Path, lines: LineCount) -> io::Result<()> {
        writeln!(self.out, "{}: {lines} lines", path.display())
    }

    fn on_stdin(&mut self, lines: LineCount) -> io::Result<()> {
        writeln!(self.out, "{lines} lines")
    }

    fn on_failure(&mut self, error: &EngineError) -> io::Result<()> {
        writeln!(self.err, "Error: {error}")
    }

    fn on_total(&mut self, lines: LineCount, _files: usize) -> io::Result<()> {
        writeln!(self.out, "Total: {lines} lines")
    }

    fn on_complete(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Record<'a> {
    File { name: &'a str, lines: LineCount },
    Stdin { lines: LineCount },
    Total { files: usize, lines: LineCount },
}

/// One JSON object per line on `out`. Diagnostics stay plain text on `err`.
pub struct JsonlReporter<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> JsonlReporter<O, E> {
    pub const fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn emit(&mut self, record: &Record<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")
    }
}

impl<O: Write, E: Write> Reporter for JsonlReporter<O, E> {
    fn on_file(&mut self, path: &Path, lines: LineCount) -> io::Result<()> {
        let name = path.to_string_lossy();
        self.emit(&Record::File { name: &name, lines })
    }

    fn on_stdin(&mut self, lines: LineCount) -> io::Result<()> {
        self.emit(&Record::Stdin { lines })
    }

    fn on_failure(&mut self, error: &EngineError) -> io::Result<()> {
        writeln!(self.err, "Error: {error}")
    }

    fn on_total(&mut self, lines: LineCount, files: usize) -> io::Result<()> {
        self.emit(&Record::Total { files, lines })
    }

    fn on_complete(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
