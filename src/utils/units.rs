//! # 单位换算
//!
//! 外部接口使用 keV 与 µm，内部计算统一使用 eV 与 cm。
//! 每次跨越边界只换算一次。

/// keV -> eV
pub fn kev_to_ev(energy_kev: f64) -> f64 {
    energy_kev * 1e3
}

/// eV -> keV
pub fn ev_to_kev(energy_ev: f64) -> f64 {
    energy_ev / 1e3
}

/// µm -> cm
pub fn um_to_cm(thickness_um: f64) -> f64 {
    thickness_um * 1e-4
}

/// cm -> µm
pub fn cm_to_um(thickness_cm: f64) -> f64 {
    thickness_cm * 1e4
}
