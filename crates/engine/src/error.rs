use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Cannot open '{}'", .path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read '{}': {source}", .path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read standard input: {0}")]
    StdinRead(#[source] std::io::Error),

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}

impl EngineError {
    /// The named resource this error belongs to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => Some(path),
            Self::StdinRead(_) | Self::Output(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
