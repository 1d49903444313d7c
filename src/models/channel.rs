//! # 通道数据模型
//!
//! 一个通道是有序的滤片堆叠。组合透过率遵循 Beer–Lambert 定律：
//!
//! T(E) = exp(-Σᵢ μᵢ(E) · tᵢ)
//!
//! 指数中的求和与顺序无关，顺序只用于显示与按索引编辑。
//!
//! ## 依赖关系
//! - 被 `transmission/calculator.rs` 使用
//! - 使用 `material/` 的 MaterialDatabase 做校验与衰减查询

use crate::error::{IndexTarget, Result, RossFilterError};
use crate::material::{self, MaterialDatabase};
use crate::models::Filter;

/// 滤片堆叠
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Channel {
    filters: Vec<Filter>,
}

impl Channel {
    /// 创建空通道
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部滤片（插入顺序）
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// 滤片数量
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// 是否没有滤片
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// 追加一层滤片，校验失败时通道不变
    pub fn add_filter(
        &mut self,
        db: &dyn MaterialDatabase,
        material: &str,
        thickness_cm: f64,
        density: Option<f64>,
    ) -> Result<()> {
        material::validate_material(db, material, Some(thickness_cm))?;
        material::validate_density(density)?;

        self.filters
            .push(Filter::new(material, thickness_cm, density));
        Ok(())
    }

    /// 删除指定滤片，后续滤片前移
    pub fn remove_filter(&mut self, index: usize) -> Result<Filter> {
        self.check_index(index)?;
        Ok(self.filters.remove(index))
    }

    /// 整体替换指定滤片，先检查索引再校验参数
    pub fn update_filter(
        &mut self,
        db: &dyn MaterialDatabase,
        index: usize,
        material: &str,
        thickness_cm: f64,
        density: Option<f64>,
    ) -> Result<()> {
        self.check_index(index)?;
        material::validate_material(db, material, Some(thickness_cm))?;
        material::validate_density(density)?;

        self.filters[index] = Filter::new(material, thickness_cm, density);
        Ok(())
    }

    /// 计算整个堆叠的透过率
    ///
    /// 空通道在每个能量点的透过率为 1。
    pub fn calculate_transmission(
        &self,
        db: &dyn MaterialDatabase,
        energies_ev: &[f64],
    ) -> Result<Vec<f64>> {
        let mut optical_depth = vec![0.0; energies_ev.len()];

        for filter in &self.filters {
            for (depth, &energy) in optical_depth.iter_mut().zip(energies_ev) {
                *depth += attenuation(db, filter, energy)? * filter.thickness_cm();
            }
        }

        Ok(optical_depth.into_iter().map(|d| (-d).exp()).collect())
    }

    /// 单独计算某一层的透过率（视作该层是唯一一层）
    pub fn calculate_single_filter(
        &self,
        db: &dyn MaterialDatabase,
        index: usize,
        energies_ev: &[f64],
    ) -> Result<Vec<f64>> {
        self.check_index(index)?;
        let filter = &self.filters[index];

        energies_ev
            .iter()
            .map(|&energy| -> Result<f64> {
                Ok((-attenuation(db, filter, energy)? * filter.thickness_cm()).exp())
            })
            .collect()
    }

    /// 逐点绝对差 |a - b|，对称
    pub fn difference(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
        if a.len() != b.len() {
            return Err(RossFilterError::Unexpected(format!(
                "cannot compare curves of length {} and {}",
                a.len(),
                b.len()
            )));
        }
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).collect())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.filters.len() {
            Ok(())
        } else {
            Err(RossFilterError::IndexOutOfRange {
                target: IndexTarget::Filter,
                index,
                len: self.filters.len(),
            })
        }
    }
}

/// 查询单层在某能量点的线衰减系数，数据库错误统一归为 Unexpected
fn attenuation(db: &dyn MaterialDatabase, filter: &Filter, energy_ev: f64) -> Result<f64> {
    db.linear_attenuation(filter.material(), energy_ev, filter.density())
        .map_err(|e| RossFilterError::Unexpected(e.to_string()))
}
