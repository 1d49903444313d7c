//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calculate`: 计算一组通道的透过率并输出图表/数据
//! - `materials`: 列出可用材料
//! - `batch`: 批量计算配置文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: calculate, materials, batch

pub mod batch;
pub mod calculate;
pub mod materials;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// rossfilter - Ross 滤片透过率计算器
#[derive(Parser)]
#[command(name = "rossfilter")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "X-ray transmission calculator for stacked Ross filter channels", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Print debug diagnostics (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate transmission of one or more filter channels
    Calculate(calculate::CalculateArgs),

    /// List materials available in the attenuation database
    Materials(materials::MaterialsArgs),

    /// Calculate every setup file in a directory
    Batch(batch::BatchArgs),
}

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
    /// CSV data file (energy, one column per curve)
    Csv,
    /// XY data file (tab separated, commented header)
    Xy,
}

impl OutputFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
            OutputFormat::Xy => "xy",
        }
    }

    /// 从文件扩展名推断输出格式
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("svg") => OutputFormat::Svg,
            Some("csv") => OutputFormat::Csv,
            Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
            _ => OutputFormat::Png,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 各子命令共用的材料数据库参数
#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Extra material tables (TOML) merged over the built-in database
    #[arg(long, env = "ROSSFILTER_MATERIALS")]
    pub materials_file: Option<PathBuf>,
}
