//! # 内置衰减系数数据 (keV, cm²/g)
//!
//! 总质量衰减系数 μ/ρ，含相干与非相干散射。
//!
//! ## 数据来源
//! - 1–100 keV: NIST XCOM / Hubbell & Seltzer (NISTIR 5632)
//!   https://physics.nist.gov/PhysRefData/XrayMassCoef/
//! - 0.1–1 keV: Henke, Gullikson & Davis (1993) 光吸收数据
//!
//! 保留四位有效数字。吸收边以同一能量的两行表示（边前值、边后值）。
//! L2/L3 与 M4/M5、M2/M3 子壳层边合并到能量较低的一条边上。
//!
//! ## 依赖关系
//! - 被 `material/tables.rs` 使用

/// 元素表
pub(super) struct Element {
    pub name: &'static str,
    pub symbol: &'static str,
    /// 原子量 (g/mol)
    pub atomic_mass: f64,
    /// 参考密度 (g/cm³)
    pub density: f64,
    pub data: &'static [(f64, f64)],
}

/// 化合物：名称、密度、化学式（元素符号, 原子数）
pub(super) struct Compound {
    pub name: &'static str,
    pub density: f64,
    pub formula: &'static [(&'static str, f64)],
}

pub(super) const ELEMENTS: &[Element] = &[
    Element {
        name: "hydrogen",
        symbol: "H",
        atomic_mass: 1.008,
        density: 8.375e-5,
        data: HYDROGEN,
    },
    Element {
        name: "beryllium",
        symbol: "Be",
        atomic_mass: 9.0122,
        density: 1.848,
        data: BERYLLIUM,
    },
    Element {
        name: "carbon",
        symbol: "C",
        atomic_mass: 12.011,
        density: 2.26,
        data: CARBON,
    },
    Element {
        name: "nitrogen",
        symbol: "N",
        atomic_mass: 14.007,
        density: 0.001165,
        data: NITROGEN,
    },
    Element {
        name: "oxygen",
        symbol: "O",
        atomic_mass: 15.999,
        density: 0.001332,
        data: OXYGEN,
    },
    Element {
        name: "aluminum",
        symbol: "Al",
        atomic_mass: 26.982,
        density: 2.699,
        data: ALUMINUM,
    },
    Element {
        name: "titanium",
        symbol: "Ti",
        atomic_mass: 47.867,
        density: 4.54,
        data: TITANIUM,
    },
    Element {
        name: "vanadium",
        symbol: "V",
        atomic_mass: 50.942,
        density: 6.11,
        data: VANADIUM,
    },
    Element {
        name: "chromium",
        symbol: "Cr",
        atomic_mass: 51.996,
        density: 7.19,
        data: CHROMIUM,
    },
    Element {
        name: "manganese",
        symbol: "Mn",
        atomic_mass: 54.938,
        density: 7.43,
        data: MANGANESE,
    },
    Element {
        name: "iron",
        symbol: "Fe",
        atomic_mass: 55.845,
        density: 7.874,
        data: IRON,
    },
    Element {
        name: "cobalt",
        symbol: "Co",
        atomic_mass: 58.933,
        density: 8.9,
        data: COBALT,
    },
    Element {
        name: "nickel",
        symbol: "Ni",
        atomic_mass: 58.693,
        density: 8.902,
        data: NICKEL,
    },
    Element {
        name: "copper",
        symbol: "Cu",
        atomic_mass: 63.546,
        density: 8.96,
        data: COPPER,
    },
    Element {
        name: "zinc",
        symbol: "Zn",
        atomic_mass: 65.38,
        density: 7.133,
        data: ZINC,
    },
    Element {
        name: "zirconium",
        symbol: "Zr",
        atomic_mass: 91.224,
        density: 6.506,
        data: ZIRCONIUM,
    },
    Element {
        name: "niobium",
        symbol: "Nb",
        atomic_mass: 92.906,
        density: 8.57,
        data: NIOBIUM,
    },
    Element {
        name: "molybdenum",
        symbol: "Mo",
        atomic_mass: 95.95,
        density: 10.22,
        data: MOLYBDENUM,
    },
    Element {
        name: "silver",
        symbol: "Ag",
        atomic_mass: 107.868,
        density: 10.5,
        data: SILVER,
    },
    Element {
        name: "tin",
        symbol: "Sn",
        atomic_mass: 118.71,
        density: 7.31,
        data: TIN,
    },
    Element {
        name: "gadolinium",
        symbol: "Gd",
        atomic_mass: 157.25,
        density: 7.9,
        data: GADOLINIUM,
    },];

pub(super) const COMPOUNDS: &[Compound] = &[
    Compound {
        name: "kapton",
        density: 1.42,
        formula: &[("C", 22.0), ("H", 10.0), ("N", 2.0), ("O", 5.0)],
    },
    Compound {
        name: "mylar",
        density: 1.38,
        formula: &[("C", 10.0), ("H", 8.0), ("O", 4.0)],
    },
    Compound {
        name: "polypropylene",
        density: 0.9,
        formula: &[("C", 3.0), ("H", 6.0)],
    },
];

const HYDROGEN: &[(f64, f64)] = &[
    (0.1, 285.1),
    (0.15, 195.3),
    (0.2, 140.7),
    (0.3, 80.34),
    (0.4, 49.92),
    (0.5, 32.95),
    (0.6, 22.79),
    (0.8, 12.15),
    (1.0, 7.217),
    (1.5, 2.148),
    (2.0, 1.059),
    (3.0, 0.5612),
    (4.0, 0.4546),
    (5.0, 0.4193),
    (6.0, 0.4042),
    (8.0, 0.3914),
    (10.0, 0.3854),
    (15.0, 0.3764),
    (20.0, 0.3695),
    (30.0, 0.357),
    (40.0, 0.3458),
    (50.0, 0.3355),
    (60.0, 0.326),
    (80.0, 0.3091),
    (100.0, 0.2944),
];

const BERYLLIUM: &[(f64, f64)] = &[
    (0.1, 818.7),
    (0.1115, 745.9),
    (0.1115, 18650.0),
    (0.15, 15260.0),
    (0.2, 11490.0),
    (0.3, 6734.0),
    (0.4, 4214.0),
    (0.5, 2787.0),
    (0.6, 1928.0),
    (0.8, 1024.0),
    (1.0, 604.1),
    (1.5, 179.7),
    (2.0, 74.69),
    (3.0, 21.27),
    (4.0, 8.685),
    (5.0, 4.369),
    (6.0, 2.527),
    (8.0, 1.124),
    (10.0, 0.6466),
    (15.0, 0.307),
    (20.0, 0.2251),
    (30.0, 0.1792),
    (40.0, 0.164),
    (50.0, 0.1554),
    (60.0, 0.1493),
    (80.0, 0.1401),
    (100.0, 0.1328),
];

const CARBON: &[(f64, f64)] = &[
    (0.1, 3735.0),
    (0.15, 2557.0),
    (0.2, 1845.0),
    (0.2838, 1145.0),
    (0.2838, 22900.0),
    (0.3, 21540.0),
    (0.4, 14500.0),
    (0.5, 9876.0),
    (0.6, 6931.0),
    (0.8, 3729.0),
    (1.0, 2211.0),
    (1.5, 700.2),
    (2.0, 302.6),
    (3.0, 90.33),
    (4.0, 37.78),
    (5.0, 19.12),
    (6.0, 10.95),
    (8.0, 4.576),
    (10.0, 2.373),
    (15.0, 0.8071),
    (20.0, 0.442),
    (30.0, 0.2562),
    (40.0, 0.2076),
    (50.0, 0.1871),
    (60.0, 0.1753),
    (80.0, 0.161),
    (100.0, 0.1514),
];

const NITROGEN: &[(f64, f64)] = &[
    (0.1, 6290.0),
    (0.15, 4309.0),
    (0.2, 3103.0),
    (0.3, 1772.0),
    (0.4, 1100.0),
    (0.4099, 1053.0),
    (0.4099, 18950.0),
    (0.5, 14010.0),
    (0.6, 10070.0),
    (0.8, 5535.0),
    (1.0, 3311.0),
    (1.5, 1083.0),
    (2.0, 476.9),
    (3.0, 145.6),
    (4.0, 61.66),
    (5.0, 31.44),
    (6.0, 18.09),
    (8.0, 7.562),
    (10.0, 3.879),
    (15.0, 1.236),
    (20.0, 0.6044),
    (30.0, 0.3076),
    (40.0, 0.2288),
    (50.0, 0.1981),
    (60.0, 0.1823),
    (80.0, 0.1639),
    (100.0, 0.1529),
];

const OXYGEN: &[(f64, f64)] = &[
    (0.1, 10010.0),
    (0.15, 6850.0),
    (0.2, 4936.0),
    (0.3, 2817.0),
    (0.4, 1751.0),
    (0.5, 1154.0),
    (0.5431, 978.7),
    (0.5431, 15660.0),
    (0.6, 13270.0),
    (0.8, 7561.0),
    (1.0, 4590.0),
    (1.5, 1549.0),
    (2.0, 694.9),
    (3.0, 217.1),
    (4.0, 93.15),
    (5.0, 47.9),
    (6.0, 27.7),
    (8.0, 11.63),
    (10.0, 5.952),
    (15.0, 1.836),
    (20.0, 0.8651),
    (30.0, 0.3779),
    (40.0, 0.2585),
    (50.0, 0.2132),
    (60.0, 0.1907),
    (80.0, 0.1678),
    (100.0, 0.1551),
];

const ALUMINUM: &[(f64, f64)] = &[
    (0.1, 47590.0),
    (0.15, 32590.0),
    (0.2, 23490.0),
    (0.3, 13400.0),
    (0.4, 8321.0),
    (0.5, 5487.0),
    (0.6, 3790.0),
    (0.8, 2010.0),
    (1.0, 1185.0),
    (1.5, 402.2),
    (1.5596, 362.1),
    (1.5596, 3957.0),
    (2.0, 2263.0),
    (3.0, 788.0),
    (4.0, 360.5),
    (5.0, 193.4),
    (6.0, 115.3),
    (8.0, 50.33),
    (10.0, 26.23),
    (15.0, 7.955),
    (20.0, 3.441),
    (30.0, 1.128),
    (40.0, 0.5685),
    (50.0, 0.3681),
    (60.0, 0.2778),
    (80.0, 0.2018),
    (100.0, 0.1704),
];

const TITANIUM: &[(f64, f64)] = &[
    (0.1, 47330.0),
    (0.15, 32460.0),
    (0.2, 23350.0),
    (0.3, 13370.0),
    (0.4, 8292.0),
    (0.4555, 6538.0),
    (0.4555, 22880.0),
    (0.5, 19860.0),
    (0.5637, 16200.0),
    (0.5637, 18630.0),
    (0.6, 16800.0),
    (0.8, 9640.0),
    (1.0, 5869.0),
    (1.5, 2096.0),
    (2.0, 986.6),
    (3.0, 332.3),
    (4.0, 151.7),
    (4.9664, 83.84),
    (4.9664, 687.8),
    (5.0, 683.8),
    (6.0, 432.3),
    (8.0, 202.3),
    (10.0, 110.7),
    (15.0, 35.87),
    (20.0, 15.85),
    (30.0, 4.972),
    (40.0, 2.214),
    (50.0, 1.213),
    (60.0, 0.7661),
    (80.0, 0.4052),
    (100.0, 0.2721),
];

const VANADIUM: &[(f64, f64)] = &[
    (0.1, 50370.0),
    (0.15, 34560.0),
    (0.2, 24890.0),
    (0.3, 14210.0),
    (0.4, 8819.0),
    (0.5, 5811.0),
    (0.5121, 5548.0),
    (0.5121, 19420.0),
    (0.6, 14900.0),
    (0.6282, 13700.0),
    (0.6282, 15750.0),
    (0.8, 9992.0),
    (1.0, 6144.0),
    (1.5, 2299.0),
    (2.0, 1095.0),
    (3.0, 373.6),
    (4.0, 172.0),
    (5.0, 93.71),
    (5.4651, 73.48),
    (5.4651, 594.2),
    (6.0, 477.2),
    (8.0, 231.7),
    (10.0, 128.1),
    (15.0, 42.03),
    (20.0, 18.75),
    (30.0, 5.971),
    (40.0, 2.674),
    (50.0, 1.461),
    (60.0, 0.9118),
    (80.0, 0.4657),
    (100.0, 0.3017),
];

const CHROMIUM: &[(f64, f64)] = &[
    (0.1, 57770.0),
    (0.15, 39540.0),
    (0.2, 28470.0),
    (0.3, 16250.0),
    (0.4, 10070.0),
    (0.5, 6643.0),
    (0.5741, 5036.0),
    (0.5741, 17630.0),
    (0.6, 16380.0),
    (0.6958, 12510.0),
    (0.6958, 14390.0),
    (0.8, 11070.0),
    (1.0, 6893.0),
    (1.5, 2606.0),
    (2.0, 1245.0),
    (3.0, 425.5),
    (4.0, 196.0),
    (5.0, 106.8),
    (5.9892, 65.16),
    (5.9892, 517.0),
    (6.0, 514.9),
    (8.0, 254.7),
    (10.0, 141.9),
    (15.0, 46.85),
    (20.0, 20.93),
    (30.0, 6.662),
    (40.0, 2.977),
    (50.0, 1.62),
    (60.0, 1.006),
    (80.0, 0.5075),
    (100.0, 0.3245),
];

const MANGANESE: &[(f64, f64)] = &[
    (0.1, 65510.0),
    (0.15, 45050.0),
    (0.2, 32360.0),
    (0.3, 18480.0),
    (0.4, 11490.0),
    (0.5, 7568.0),
    (0.6, 5224.0),
    (0.6387, 4579.0),
    (0.6387, 16030.0),
    (0.769, 11360.0),
    (0.769, 13060.0),
    (0.8, 12140.0),
    (1.0, 7672.0),
    (1.5, 2939.0),
    (2.0, 1409.0),
    (3.0, 482.9),
    (4.0, 222.6),
    (5.0, 121.3),
    (6.0, 73.64),
    (6.539, 58.13),
    (6.539, 452.4),
    (8.0, 277.9),
    (10.0, 156.3),
    (15.0, 51.98),
    (20.0, 23.26),
    (30.0, 7.4),
    (40.0, 3.296),
    (50.0, 1.785),
    (60.0, 1.102),
    (80.0, 0.5471),
    (100.0, 0.3439),
];

const IRON: &[(f64, f64)] = &[
    (0.1, 79660.0),
    (0.15, 54750.0),
    (0.2, 39380.0),
    (0.3, 22470.0),
    (0.4, 13960.0),
    (0.5, 9201.0),
    (0.6, 6371.0),
    (0.7069, 4462.0),
    (0.7069, 15620.0),
    (0.8, 12380.0),
    (0.8461, 11070.0),
    (0.8461, 12720.0),
    (1.0, 9085.0),
    (1.5, 3399.0),
    (2.0, 1626.0),
    (3.0, 557.6),
    (4.0, 256.7),
    (5.0, 139.8),
    (6.0, 84.69),
    (7.112, 53.95),
    (7.112, 407.6),
    (8.0, 305.6),
    (10.0, 170.6),
    (15.0, 57.08),
    (20.0, 25.68),
    (30.0, 8.176),
    (40.0, 3.629),
    (50.0, 1.958),
    (60.0, 1.205),
    (80.0, 0.5952),
    (100.0, 0.3717),
];

const COBALT: &[(f64, f64)] = &[
    (0.1, 84680.0),
    (0.15, 57930.0),
    (0.2, 41800.0),
    (0.3, 23880.0),
    (0.4, 14790.0),
    (0.5, 9763.0),
    (0.6, 6743.0),
    (0.7786, 3803.0),
    (0.7786, 13310.0),
    (0.8, 12660.0),
    (0.9256, 9464.0),
    (0.9256, 10880.0),
    (1.0, 9325.0),
    (1.5, 3699.0),
    (2.0, 1792.0),
    (3.0, 617.9),
    (4.0, 285.3),
    (5.0, 155.6),
    (6.0, 94.47),
    (7.7089, 47.36),
    (7.7089, 351.8),
    (8.0, 322.5),
    (10.0, 185.7),
    (15.0, 62.99),
    (20.0, 28.34),
    (30.0, 9.021),
    (40.0, 4.004),
    (50.0, 2.154),
    (60.0, 1.318),
    (80.0, 0.6396),
    (100.0, 0.3918),
];

const NICKEL: &[(f64, f64)] = &[
    (0.1, 94760.0),
    (0.15, 64870.0),
    (0.2, 46790.0),
    (0.3, 26700.0),
    (0.4, 16580.0),
    (0.5, 10920.0),
    (0.6, 7553.0),
    (0.8, 3998.0),
    (0.8547, 3433.0),
    (0.8547, 12020.0),
    (1.0, 8760.0),
    (1.0081, 8608.0),
    (1.0081, 9899.0),
    (1.5, 4081.0),
    (2.0, 1990.0),
    (3.0, 688.8),
    (4.0, 318.4),
    (5.0, 173.7),
    (6.0, 105.5),
    (8.0, 47.74),
    (8.3328, 42.64),
    (8.3328, 312.4),
    (10.0, 200.6),
    (15.0, 68.92),
    (20.0, 31.12),
    (30.0, 9.921),
    (40.0, 4.401),
    (50.0, 2.364),
    (60.0, 1.443),
    (80.0, 0.6963),
    (100.0, 0.4234),
];

const COPPER: &[(f64, f64)] = &[
    (0.1, 117500.0),
    (0.15, 80420.0),
    (0.2, 58190.0),
    (0.3, 33100.0),
    (0.4, 20620.0),
    (0.5, 13570.0),
    (0.6, 9376.0),
    (0.8, 4971.0),
    (0.9311, 3483.0),
    (0.9311, 12190.0),
    (1.0, 10570.0),
    (1.0961, 8704.0),
    (1.0961, 9835.0),
    (1.5, 4418.0),
    (2.0, 2154.0),
    (3.0, 748.8),
    (4.0, 347.3),
    (5.0, 189.9),
    (6.0, 115.6),
    (8.0, 52.55),
    (8.979, 38.29),
    (8.979, 278.4),
    (10.0, 215.9),
    (15.0, 74.05),
    (20.0, 33.79),
    (30.0, 10.92),
    (40.0, 4.862),
    (50.0, 2.613),
    (60.0, 1.593),
    (80.0, 0.763),
    (100.0, 0.4584),
];

const ZINC: &[(f64, f64)] = &[
    (0.1, 117500.0),
    (0.15, 80540.0),
    (0.2, 58040.0),
    (0.3, 33140.0),
    (0.4, 20600.0),
    (0.5, 13560.0),
    (0.6, 9360.0),
    (0.8, 4969.0),
    (1.0, 2926.0),
    (1.0197, 2794.0),
    (1.0197, 9779.0),
    (1.1936, 7023.0),
    (1.1936, 8077.0),
    (1.5, 4881.0),
    (2.0, 2424.0),
    (3.0, 847.9),
    (4.0, 393.2),
    (5.0, 214.8),
    (6.0, 130.5),
    (8.0, 59.05),
    (9.6586, 35.01),
    (9.6586, 249.3),
    (10.0, 229.7),
    (15.0, 81.48),
    (20.0, 37.11),
    (30.0, 11.87),
    (40.0, 5.253),
    (50.0, 2.807),
    (60.0, 1.7),
    (80.0, 0.8025),
    (100.0, 0.4754),
];

const ZIRCONIUM: &[(f64, f64)] = &[
    (0.1, 57770.0),
    (0.15, 39540.0),
    (0.1785, 32600.0),
    (0.1785, 65200.0),
    (0.2, 59590.0),
    (0.3, 36990.0),
    (0.3305, 32130.0),
    (0.3305, 41770.0),
    (0.4, 32340.0),
    (0.4303, 28900.0),
    (0.4303, 31210.0),
    (0.5, 24870.0),
    (0.6, 17930.0),
    (0.8, 9895.0),
    (1.0, 5947.0),
    (1.5, 2170.0),
    (2.0, 1028.0),
    (2.2223, 778.3),
    (2.2223, 2257.0),
    (2.3067, 2077.0),
    (2.3067, 2907.0),
    (2.5316, 2355.0),
    (2.5316, 2708.0),
    (3.0, 1828.0),
    (4.0, 892.1),
    (5.0, 497.5),
    (6.0, 305.2),
    (8.0, 139.3),
    (10.0, 75.12),
    (15.0, 24.16),
    (17.9976, 14.47),
    (17.9976, 97.43),
    (20.0, 75.18),
    (30.0, 25.64),
    (40.0, 11.47),
    (50.0, 6.087),
    (60.0, 3.628),
    (80.0, 1.624),
    (100.0, 0.8949),
];

const NIOBIUM: &[(f64, f64)] = &[
    (0.1, 63230.0),
    (0.15, 43530.0),
    (0.2, 31220.0),
    (0.2023, 30800.0),
    (0.2023, 61600.0),
    (0.3, 39840.0),
    (0.3609, 30380.0),
    (0.3609, 39490.0),
    (0.4, 34360.0),
    (0.4656, 27260.0),
    (0.4656, 29440.0),
    (0.5, 26330.0),
    (0.6, 19230.0),
    (0.8, 10710.0),
    (1.0, 6440.0),
    (1.5, 2364.0),
    (2.0, 1120.0),
    (2.3705, 715.0),
    (2.3705, 2073.0),
    (2.4647, 1900.0),
    (2.4647, 2661.0),
    (2.6977, 2167.0),
    (2.6977, 2492.0),
    (3.0, 1954.0),
    (4.0, 963.3),
    (5.0, 539.5),
    (6.0, 331.7),
    (8.0, 151.6),
    (10.0, 81.83),
    (15.0, 26.33),
    (18.9856, 13.56),
    (18.9856, 89.89),
    (20.0, 79.19),
    (30.0, 27.34),
    (40.0, 12.27),
    (50.0, 6.517),
    (60.0, 3.884),
    (80.0, 1.735),
    (100.0, 0.9523),
];

const MOLYBDENUM: &[(f64, f64)] = &[
    (0.1, 69330.0),
    (0.15, 47590.0),
    (0.2, 34190.0),
    (0.227, 29040.0),
    (0.227, 58090.0),
    (0.3, 42860.0),
    (0.3923, 28640.0),
    (0.3923, 37230.0),
    (0.4, 36280.0),
    (0.5, 25710.0),
    (0.5045, 25380.0),
    (0.5045, 27410.0),
    (0.6, 20530.0),
    (0.8, 11570.0),
    (1.0, 6971.0),
    (1.5, 2570.0),
    (2.0, 1218.0),
    (2.5202, 661.4),
    (2.5202, 1918.0),
    (2.6251, 1749.0),
    (2.6251, 2449.0),
    (2.8655, 2006.0),
    (2.8655, 2307.0),
    (3.0, 2080.0),
    (4.0, 1037.0),
    (5.0, 583.7),
    (6.0, 359.7),
    (8.0, 164.7),
    (10.0, 88.99),
    (15.0, 28.64),
    (19.9995, 12.73),
    (19.9995, 83.09),
    (20.0, 83.08),
    (30.0, 29.08),
    (40.0, 13.09),
    (50.0, 6.963),
    (60.0, 4.148),
    (80.0, 1.849),
    (100.0, 1.01),
];

const SILVER: &[(f64, f64)] = &[
    (0.1, 102900.0),
    (0.15, 70760.0),
    (0.2, 51130.0),
    (0.3, 29010.0),
    (0.367, 20990.0),
    (0.367, 41980.0),
    (0.4, 37330.0),
    (0.5, 26280.0),
    (0.5714, 20490.0),
    (0.5714, 26640.0),
    (0.6, 24530.0),
    (0.719, 17570.0),
    (0.719, 18980.0),
    (0.8, 15530.0),
    (1.0, 9725.0),
    (1.5, 3689.0),
    (2.0, 1767.0),
    (3.0, 604.8),
    (3.3511, 449.1),
    (3.3511, 1302.0),
    (3.5237, 1161.0),
    (3.5237, 1626.0),
    (3.8058, 1362.0),
    (3.8058, 1566.0),
    (4.0, 1397.0),
    (5.0, 813.7),
    (6.0, 510.0),
    (8.0, 237.1),
    (10.0, 128.8),
    (15.0, 41.62),
    (20.0, 18.48),
    (25.514, 9.274),
    (25.514, 57.56),
    (30.0, 38.32),
    (40.0, 17.71),
    (50.0, 9.5),
    (60.0, 5.67),
    (80.0, 2.511),
    (100.0, 1.352),
];

const TIN: &[(f64, f64)] = &[
    (0.1, 130800.0),
    (0.15, 89190.0),
    (0.2, 64170.0),
    (0.3, 36730.0),
    (0.4, 22780.0),
    (0.4848, 15950.0),
    (0.4848, 31910.0),
    (0.5, 30450.0),
    (0.6, 22300.0),
    (0.7144, 15920.0),
    (0.7144, 20690.0),
    (0.8, 16710.0),
    (0.8838, 13670.0),
    (0.8838, 14760.0),
    (1.0, 11490.0),
    (1.5, 4520.0),
    (2.0, 2184.0),
    (3.0, 749.9),
    (3.9288, 363.6),
    (3.9288, 1054.0),
    (4.0, 1012.0),
    (4.1561, 926.7),
    (4.1561, 1297.0),
    (4.4647, 1099.0),
    (4.4647, 1264.0),
    (5.0, 969.8),
    (6.0, 617.8),
    (8.0, 291.3),
    (10.0, 159.2),
    (15.0, 51.67),
    (20.0, 22.96),
    (29.2001, 7.843),
    (29.2001, 47.04),
    (30.0, 44.02),
    (40.0, 20.84),
    (50.0, 11.28),
    (60.0, 6.749),
    (80.0, 2.984),
    (100.0, 1.597),
];

const GADOLINIUM: &[(f64, f64)] = &[
    (0.1, 321400.0),
    (0.15, 220500.0),
    (0.2, 159200.0),
    (0.3, 90660.0),
    (0.4, 56480.0),
    (0.5, 37220.0),
    (0.6, 25550.0),
    (0.8, 13650.0),
    (1.0, 8001.0),
    (1.1852, 5266.0),
    (1.1852, 10530.0),
    (1.5, 6266.0),
    (1.5441, 5875.0),
    (1.5441, 7638.0),
    (1.8808, 4880.0),
    (1.8808, 5270.0),
    (2.0, 4607.0),
    (3.0, 1721.0),
    (4.0, 813.9),
    (5.0, 447.6),
    (6.0, 272.9),
    (7.2428, 163.0),
    (7.2428, 472.6),
    (7.9303, 381.1),
    (7.9303, 533.5),
    (8.0, 522.7),
    (8.3756, 468.9),
    (8.3756, 539.2),
    (10.0, 350.7),
    (15.0, 120.5),
    (20.0, 54.32),
    (30.0, 17.22),
    (40.0, 7.556),
    (50.0, 3.995),
    (50.2391, 3.941),
    (50.2391, 21.05),
    (60.0, 13.34),
    (80.0, 6.082),
    (100.0, 3.247),
];
