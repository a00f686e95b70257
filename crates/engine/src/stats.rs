use linecount_shared_kernel::LineCount;

/// Outcome of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sum of the counts of every successfully scanned resource.
    pub total: LineCount,
    /// Resources scanned successfully (standard input counts as one).
    pub processed: usize,
    /// Named resources that could not be opened.
    pub failures: usize,
    /// Resources that opened but failed mid-stream. Reported, never fatal.
    pub read_failures: usize,
}

impl RunSummary {
    /// Only open failures decide the exit status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failures == 0
    }
}
