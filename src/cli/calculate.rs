//! # calculate 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calculate.rs`

use super::{DatabaseArgs, OutputFormat};

use clap::Args;
use std::path::PathBuf;

/// calculate 子命令参数
#[derive(Args, Debug)]
pub struct CalculateArgs {
    /// Setup file (TOML) with energy range and channel stacks
    #[arg(short, long)]
    pub setup: Option<PathBuf>,

    /// Channel stack, appended after the setup file's channels
    /// (e.g. "Be:10,Al:5@2.7" = MATERIAL:THICKNESS_UM[@DENSITY], comma separated)
    #[arg(short, long)]
    pub channel: Vec<String>,

    /// Start energy in keV [default: 1, or the setup file]
    #[arg(long)]
    pub start: Option<f64>,

    /// Stop energy in keV [default: 30, or the setup file]
    #[arg(long)]
    pub stop: Option<f64>,

    /// Energy step in keV [default: 0.1, or the setup file]
    #[arg(long)]
    pub step: Option<f64>,

    /// Output file
    #[arg(short, long, default_value = "transmission.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include the isolated transmission of every layer
    #[arg(long, default_value_t = false)]
    pub layers: bool,

    /// Leave out the differences between consecutive channels
    #[arg(long, default_value_t = false)]
    pub no_differences: bool,

    /// Title for the plot (default: setup title or "Ross Filter Transmission")
    #[arg(long)]
    pub title: Option<String>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    #[command(flatten)]
    pub database: DatabaseArgs,
}
