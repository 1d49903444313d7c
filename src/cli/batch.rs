//! # batch 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use super::{DatabaseArgs, OutputFormat};

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing setup files
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "transmission")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Glob pattern for setup files (comma separated)
    #[arg(long, default_value = "*.toml")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Include the isolated transmission of every layer
    #[arg(long, default_value_t = false)]
    pub layers: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,
}
