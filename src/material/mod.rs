//! # 材料数据库接口
//!
//! 计算核心只通过 [`MaterialDatabase`] 访问材料数据：
//! - 材料是否存在
//! - 单个能量点的线衰减系数 μ (cm⁻¹)
//! - 可用材料列表
//!
//! 衰减查询视为纯函数，核心不假定其可向量化，逐能量点调用。
//!
//! ## 子模块
//! - `data`: 内置元素与化合物数据
//! - `tables`: 质量衰减系数表与查询 ([`TableDatabase`])
//!
//! ## 依赖关系
//! - 被 `models/channel.rs`, `transmission/calculator.rs` 使用
//! - 使用 `error.rs`

mod data;
pub mod tables;

pub use tables::{MaterialTable, TableDatabase};

use crate::error::{Result, RossFilterError};

use std::collections::BTreeSet;
use thiserror::Error;

/// 衰减查询错误
///
/// 由数据库实现返回；计算过程中出现时统一上报为 [`RossFilterError::Unexpected`]。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("unknown material '{0}'")]
    UnknownMaterial(String),

    #[error(
        "energy {energy_ev} eV is outside the tabulated range {min_ev}-{max_ev} eV of '{material}'"
    )]
    EnergyOutOfRange {
        material: String,
        energy_ev: f64,
        min_ev: f64,
        max_ev: f64,
    },

    #[error("invalid density {0} g/cm³")]
    InvalidDensity(f64),
}

/// 材料数据库能力
pub trait MaterialDatabase {
    /// 材料名称能否解析
    fn material_exists(&self, name: &str) -> bool;

    /// 线衰减系数 μ (cm⁻¹)
    ///
    /// `density` 为 `None` 时使用材料的参考密度。
    fn linear_attenuation(
        &self,
        material: &str,
        energy_ev: f64,
        density: Option<f64>,
    ) -> std::result::Result<f64, LookupError>;

    /// 可用材料名称
    fn list_materials(&self) -> BTreeSet<String>;
}

/// 校验材料名与（可选的）厚度
///
/// 顺序：名称非空 -> 名称存在 -> 厚度为有限正数。无副作用。
pub fn validate_material(
    db: &dyn MaterialDatabase,
    name: &str,
    thickness: Option<f64>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RossFilterError::InvalidMaterialName(
            "material name must not be empty".to_string(),
        ));
    }

    if !db.material_exists(name) {
        return Err(RossFilterError::MaterialNotFound {
            name: name.to_string(),
        });
    }

    if let Some(value) = thickness {
        if !value.is_finite() || value <= 0.0 {
            return Err(RossFilterError::InvalidThickness { value });
        }
    }

    Ok(())
}

/// 校验密度覆盖值（存在时必须为有限正数）
pub fn validate_density(density: Option<f64>) -> Result<()> {
    match density {
        Some(value) if !value.is_finite() || value <= 0.0 => {
            Err(RossFilterError::InvalidDensity { value })
        }
        _ => Ok(()),
    }
}

/// 测试用的确定性数据库：μ(E) = k × ρ，与能量无关
#[cfg(test)]
pub(crate) mod stub {
    use super::{LookupError, MaterialDatabase};
    use std::collections::BTreeSet;

    /// (名称, 质量衰减系数 k, 参考密度)
    const ENTRIES: &[(&str, f64, f64)] = &[("Be", 2.0, 1.0), ("Al", 10.0, 1.0), ("Cu", 50.0, 2.0)];

    /// 存在但每次查询都失败的材料
    pub const BROKEN: &str = "Broken";

    pub struct StubDatabase;

    impl MaterialDatabase for StubDatabase {
        fn material_exists(&self, name: &str) -> bool {
            name == BROKEN || ENTRIES.iter().any(|(n, _, _)| *n == name)
        }

        fn linear_attenuation(
            &self,
            material: &str,
            _energy_ev: f64,
            density: Option<f64>,
        ) -> Result<f64, LookupError> {
            let (_, k, rho) = ENTRIES
                .iter()
                .find(|(n, _, _)| *n == material)
                .ok_or_else(|| LookupError::UnknownMaterial(material.to_string()))?;
            Ok(k * density.unwrap_or(*rho))
        }

        fn list_materials(&self) -> BTreeSet<String> {
            ENTRIES.iter().map(|(n, _, _)| n.to_string()).collect()
        }
    }
}
