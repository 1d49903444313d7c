//! # materials 子命令实现
//!
//! 列出材料数据库中的全部材料。
//!
//! ## 依赖关系
//! - 使用 `cli/materials.rs` 定义的 MaterialsArgs
//! - 使用 `material/tables.rs` 的 TableDatabase

use crate::cli::materials::MaterialsArgs;
use crate::error::Result;
use crate::material::MaterialTable;
use crate::utils::output;

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MaterialRow {
    #[tabled(rename = "Material")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Density (g/cm³)")]
    density: String,
    #[tabled(rename = "Range (keV)")]
    range: String,
    #[tabled(rename = "Points")]
    points: usize,
}

impl From<&MaterialTable> for MaterialRow {
    fn from(table: &MaterialTable) -> Self {
        let (min, max) = table.energy_range_kev();
        Self {
            name: table.name.clone(),
            symbol: table.symbol.clone().unwrap_or_else(|| "-".to_string()),
            density: format!("{}", table.density),
            range: format!("{} - {}", min, max),
            points: table.energies_kev.len(),
        }
    }
}

/// 执行材料列表
pub fn execute(args: MaterialsArgs) -> Result<()> {
    output::print_header("Available Materials");

    let db = super::load_database(&args.database)?;
    let rows = select_rows(db.tables(), args.filter.as_deref());

    if rows.is_empty() {
        output::print_warning("No materials match the filter");
        return Ok(());
    }

    println!("{}", Table::new(&rows));
    output::print_info(&format!("{} material(s)", rows.len()));
    Ok(())
}

fn select_rows(tables: Vec<&MaterialTable>, filter: Option<&str>) -> Vec<MaterialRow> {
    let needle = filter.map(str::to_lowercase);
    tables
        .into_iter()
        .filter(|t| match &needle {
            Some(n) => {
                t.name.to_lowercase().contains(n)
                    || t.symbol.as_deref().is_some_and(|s| s.to_lowercase().contains(n))
            }
            None => true,
        })
        .map(MaterialRow::from)
        .collect()
}
