use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<name>: <count> lines` per file
    #[default]
    Text,
    /// One JSON object per line
    Jsonl,
}
