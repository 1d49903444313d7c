//! # 内置质量衰减系数数据库
//!
//! 提供常用滤片材料的总质量衰减系数 μ/ρ (cm²/g)。
//!
//! ## 公式
//! μ(E) = (μ/ρ)(E) × ρ
//! 其中 (μ/ρ)(E) 在相邻表格点之间做 log-log 线性插值。
//!
//! 数据见 `material/data.rs`。吸收边以同一能量的两行表示（边前值、边后值），
//! 恰好落在边上的能量取边后值。
//!
//! 化合物按混合物法则合成：(μ/ρ) = Σ wᵢ (μ/ρ)ᵢ，wᵢ 为质量分数。
//!
//! ## 依赖关系
//! - 实现 `material/mod.rs` 的 MaterialDatabase
//! - 额外材料表通过 `toml` 从文件加载

use super::data::{Compound, COMPOUNDS, ELEMENTS};
use crate::error::{Result, RossFilterError};
use crate::material::{LookupError, MaterialDatabase};
use crate::utils::units::kev_to_ev;

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// 单个材料的衰减系数表
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialTable {
    /// 材料名称（查询时不区分大小写）
    pub name: String,
    /// 元素符号（查询时区分大小写）
    #[serde(default)]
    pub symbol: Option<String>,
    /// 参考密度 (g/cm³)
    pub density: f64,
    /// 能量 (keV)，非递减
    pub energies_kev: Vec<f64>,
    /// 质量衰减系数 (cm²/g)
    pub mass_attenuation: Vec<f64>,
}

impl MaterialTable {
    fn from_pairs(name: &str, symbol: &str, density: f64, data: &[(f64, f64)]) -> Self {
        Self {
            name: name.to_string(),
            symbol: Some(symbol.to_string()),
            density,
            energies_kev: data.iter().map(|(e, _)| *e).collect(),
            mass_attenuation: data.iter().map(|(_, m)| *m).collect(),
        }
    }

    /// 混合物法则合成，`parts` 为 (组分表, 质量分数)
    ///
    /// 能量点取各组分表格点的并集（限于公共范围），
    /// 任一组分在该点有吸收边时输出边前、边后两行。
    fn mixture(name: &str, density: f64, parts: &[(&MaterialTable, f64)]) -> Self {
        let lo = parts
            .iter()
            .map(|(t, _)| t.energy_range_kev().0)
            .fold(f64::NEG_INFINITY, f64::max);
        let hi = parts
            .iter()
            .map(|(t, _)| t.energy_range_kev().1)
            .fold(f64::INFINITY, f64::min);

        let mut energies: Vec<f64> = parts
            .iter()
            .flat_map(|(t, _)| t.energies_kev.iter().copied())
            .filter(|&e| e >= lo && e <= hi)
            .collect();
        energies.sort_by(f64::total_cmp);
        energies.dedup();

        // e 在公共范围内，各组分查询均有值
        let weighted = |lookup: fn(&MaterialTable, f64) -> Option<f64>, e: f64| -> f64 {
            parts
                .iter()
                .map(|(t, w)| w * lookup(t, e).unwrap_or(0.0))
                .sum()
        };

        let mut table = Self {
            name: name.to_string(),
            symbol: None,
            density,
            energies_kev: Vec::with_capacity(energies.len()),
            mass_attenuation: Vec::with_capacity(energies.len()),
        };
        for e in energies {
            let below = weighted(Self::mass_attenuation_below, e);
            let above = weighted(Self::mass_attenuation_at, e);
            if below != above {
                table.energies_kev.push(e);
                table.mass_attenuation.push(below);
            }
            table.energies_kev.push(e);
            table.mass_attenuation.push(above);
        }
        table
    }

    /// 名称或符号是否匹配
    pub fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.symbol.as_deref() == Some(query)
    }

    /// 表格覆盖的能量范围 (keV)
    pub fn energy_range_kev(&self) -> (f64, f64) {
        let first = self.energies_kev.first().copied().unwrap_or(0.0);
        let last = self.energies_kev.last().copied().unwrap_or(0.0);
        (first, last)
    }

    /// 检查表格结构是否合法
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("material name must not be empty".to_string());
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(format!("'{}': density must be positive", self.name));
        }
        if self.energies_kev.len() != self.mass_attenuation.len() {
            return Err(format!(
                "'{}': {} energies but {} attenuation values",
                self.name,
                self.energies_kev.len(),
                self.mass_attenuation.len()
            ));
        }
        if self.energies_kev.len() < 2 {
            return Err(format!("'{}': at least two table points required", self.name));
        }
        if self.energies_kev.iter().any(|e| !(e.is_finite() && *e > 0.0)) {
            return Err(format!("'{}': energies must be positive", self.name));
        }
        if self.energies_kev.windows(2).any(|w| w[1] < w[0]) {
            return Err(format!("'{}': energies must be non-decreasing", self.name));
        }
        if self
            .mass_attenuation
            .iter()
            .any(|m| !(m.is_finite() && *m > 0.0))
        {
            return Err(format!(
                "'{}': attenuation values must be positive",
                self.name
            ));
        }
        Ok(())
    }

    /// 插值得到质量衰减系数 μ/ρ (cm²/g)，超出表格范围返回 `None`
    pub fn mass_attenuation_at(&self, energy_kev: f64) -> Option<f64> {
        let (first, last) = self.energy_range_kev();
        if !(energy_kev >= first && energy_kev <= last) {
            return None;
        }

        // 不大于 energy 的点数；吸收边上两行同能量时落在边后值
        let upper = self.energies_kev.partition_point(|&e| e <= energy_kev);
        if upper == self.energies_kev.len() {
            return self.mass_attenuation.last().copied();
        }
        let lower = upper - 1;

        let (e0, e1) = (self.energies_kev[lower], self.energies_kev[upper]);
        let (m0, m1) = (self.mass_attenuation[lower], self.mass_attenuation[upper]);
        if energy_kev == e0 {
            return Some(m0);
        }

        let t = (energy_kev.ln() - e0.ln()) / (e1.ln() - e0.ln());
        Some((m0.ln() + t * (m1.ln() - m0.ln())).exp())
    }

    /// 左极限：吸收边上取边前值，其余与 [`Self::mass_attenuation_at`] 相同
    fn mass_attenuation_below(&self, energy_kev: f64) -> Option<f64> {
        let first = self.energies_kev.partition_point(|&e| e < energy_kev);
        if self.energies_kev.get(first) == Some(&energy_kev) {
            return self.mass_attenuation.get(first).copied();
        }
        self.mass_attenuation_at(energy_kev)
    }
}

/// 内置材料表：元素在前，化合物由元素表按质量分数合成
pub static BUILTIN_TABLES: LazyLock<Vec<MaterialTable>> = LazyLock::new(|| {
    let mut tables: Vec<MaterialTable> = ELEMENTS
        .iter()
        .map(|e| MaterialTable::from_pairs(e.name, e.symbol, e.density, e.data))
        .collect();

    let compounds: Vec<MaterialTable> = COMPOUNDS
        .iter()
        .map(|c| compound_table(&tables, c))
        .collect();
    tables.extend(compounds);
    tables
});

/// 按化学式计算质量分数后合成化合物表
fn compound_table(elements: &[MaterialTable], compound: &Compound) -> MaterialTable {
    let masses: Vec<(usize, f64)> = compound
        .formula
        .iter()
        .filter_map(|(symbol, count)| {
            let idx = ELEMENTS.iter().position(|e| e.symbol == *symbol)?;
            Some((idx, count * ELEMENTS[idx].atomic_mass))
        })
        .collect();
    let total: f64 = masses.iter().map(|(_, m)| m).sum();

    let parts: Vec<(&MaterialTable, f64)> = masses
        .iter()
        .map(|&(idx, m)| (&elements[idx], m / total))
        .collect();
    MaterialTable::mixture(compound.name, compound.density, &parts)
}

/// 额外材料文件格式
#[derive(Debug, Deserialize)]
struct MaterialFile {
    #[serde(default)]
    material: Vec<MaterialTable>,
}

/// 基于衰减系数表的材料数据库
#[derive(Debug, Clone)]
pub struct TableDatabase {
    tables: Vec<MaterialTable>,
}

impl Default for TableDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TableDatabase {
    /// 仅含内置材料
    pub fn builtin() -> Self {
        Self {
            tables: BUILTIN_TABLES.clone(),
        }
    }

    /// 插入材料表，同名（不区分大小写）的旧表被替换
    pub fn insert(&mut self, table: MaterialTable) {
        self.tables
            .retain(|t| !t.name.eq_ignore_ascii_case(&table.name));
        self.tables.push(table);
    }

    /// 从 TOML 文件加载额外材料，返回加载数量
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let text = fs::read_to_string(path).map_err(|e| RossFilterError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let count = self.load_str(&text).map_err(|reason| RossFilterError::ConfigError {
            path: path.display().to_string(),
            reason,
        })?;
        log::debug!("loaded {} material table(s) from {}", count, path.display());
        Ok(count)
    }

    /// 解析 TOML 文本并加载；任一表格非法时不修改数据库
    fn load_str(&mut self, text: &str) -> std::result::Result<usize, String> {
        let file: MaterialFile = toml::from_str(text).map_err(|e| e.to_string())?;
        for table in &file.material {
            table.validate()?;
        }
        let count = file.material.len();
        for table in file.material {
            self.insert(table);
        }
        Ok(count)
    }

    /// 按名称或符号查找
    pub fn find(&self, query: &str) -> Option<&MaterialTable> {
        self.tables.iter().find(|t| t.matches(query))
    }

    /// 全部材料表（按名称排序）
    pub fn tables(&self) -> Vec<&MaterialTable> {
        let mut tables: Vec<_> = self.tables.iter().collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        tables
    }
}

impl MaterialDatabase for TableDatabase {
    fn material_exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn linear_attenuation(
        &self,
        material: &str,
        energy_ev: f64,
        density: Option<f64>,
    ) -> std::result::Result<f64, LookupError> {
        let table = self
            .find(material)
            .ok_or_else(|| LookupError::UnknownMaterial(material.to_string()))?;

        let rho = density.unwrap_or(table.density);
        if !(rho.is_finite() && rho > 0.0) {
            return Err(LookupError::InvalidDensity(rho));
        }

        let mass_mu = table.mass_attenuation_at(energy_ev / 1e3).ok_or_else(|| {
            let (min_kev, max_kev) = table.energy_range_kev();
            LookupError::EnergyOutOfRange {
                material: table.name.clone(),
                energy_ev,
                min_ev: kev_to_ev(min_kev),
                max_ev: kev_to_ev(max_kev),
            }
        })?;

        Ok(mass_mu * rho)
    }

    fn list_materials(&self) -> BTreeSet<String> {
        self.tables.iter().map(|t| t.name.clone()).collect()
    }
}
