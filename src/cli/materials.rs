//! # materials 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/materials.rs`

use super::DatabaseArgs;

use clap::Args;

/// materials 子命令参数
#[derive(Args, Debug)]
pub struct MaterialsArgs {
    /// Only list materials whose name or symbol contains this text
    #[arg(long)]
    pub filter: Option<String>,

    #[command(flatten)]
    pub database: DatabaseArgs,
}
