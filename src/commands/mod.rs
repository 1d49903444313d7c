//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`, `material/`, `transmission/`, `utils/`
//! - 子模块: calculate, materials, batch

pub mod batch;
pub mod calculate;
pub mod materials;

use crate::cli::{Commands, DatabaseArgs};
use crate::error::Result;
use crate::material::TableDatabase;
use crate::utils::output;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calculate(args) => calculate::execute(args),
        Commands::Materials(args) => materials::execute(args),
        Commands::Batch(args) => batch::execute(args),
    }
}

/// 内置材料库，叠加可选的额外材料文件
fn load_database(args: &DatabaseArgs) -> Result<TableDatabase> {
    let mut db = TableDatabase::builtin();
    if let Some(path) = &args.materials_file {
        let count = db.load_file(path)?;
        output::print_info(&format!(
            "Loaded {} material table(s) from '{}'",
            count,
            path.display()
        ));
    }
    Ok(db)
}
