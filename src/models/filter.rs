//! # 滤片数据模型
//!
//! 单层滤片：材料、厚度与可选的密度覆盖值。
//! 构造后不可变，更新时整体替换。
//!
//! ## 依赖关系
//! - 被 `models/channel.rs` 使用
//! - 使用 `utils/units.rs` 做显示换算

use crate::utils::units::cm_to_um;

use serde::Serialize;
use std::fmt;

/// 单层滤片
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    material: String,
    thickness_cm: f64,
    density: Option<f64>,
}

impl Filter {
    /// 由已校验的参数构造，只在 `Channel` 内部调用
    pub(crate) fn new(material: &str, thickness_cm: f64, density: Option<f64>) -> Self {
        Self {
            material: material.to_string(),
            thickness_cm,
            density,
        }
    }

    /// 材料名称
    pub fn material(&self) -> &str {
        &self.material
    }

    /// 厚度 (cm)
    pub fn thickness_cm(&self) -> f64 {
        self.thickness_cm
    }

    /// 厚度 (µm)
    pub fn thickness_um(&self) -> f64 {
        cm_to_um(self.thickness_cm)
    }

    /// 密度覆盖值 (g/cm³)
    pub fn density(&self) -> Option<f64> {
        self.density
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} µm", self.material, self.thickness_um())?;
        if let Some(rho) = self.density {
            write!(f, ", {} g/cm³", rho)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let filter = Filter::new("Be", 0.001, None);
        assert_eq!(filter.to_string(), "Be (10.0 µm)");

        let filter = Filter::new("Al", 0.0005, Some(2.7));
        assert_eq!(filter.to_string(), "Al (5.0 µm, 2.7 g/cm³)");
    }
}
