use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Resources to count, in order. Empty means standard input.
    #[builder(default)]
    pub inputs: Vec<PathBuf>,
    /// Emit a total report after the last input.
    #[builder(default)]
    pub total_row: bool,
}
