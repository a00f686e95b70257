// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use linecount_engine::config::{Config, ConfigBuilder};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        // 複数ファイル指定時のみ Total 行を出す
        let total_row = args.files.len() > 1;

        Ok(ConfigBuilder::default()
            .inputs(args.files)
            .total_row(total_row)
            .build()?)
    }
}
