//! # 通道配置
//!
//! 两种来源描述通道堆叠：
//! - TOML 配置文件（能量范围 + 通道列表）
//! - 命令行通道描述 `"Be:10,Al:5@2.7"`（材料:厚度µm[@密度]，逗号分隔各层）
//!
//! ## 配置文件格式
//! ```toml
//! title = "Ti/V pair"
//! [energy]            # keV
//! start = 1.0
//! stop = 30.0
//! step = 0.05
//! [[channel]]
//! filters = [ { material = "Ti", thickness_um = 10.0 } ]
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 通过 `transmission/calculator.rs` 的校验接口写入通道
//! - 使用 `toml`, `serde`, `regex`

use crate::error::{Result, RossFilterError};
use crate::material::MaterialDatabase;
use crate::transmission::Calculator;

use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// 能量范围 (keV)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EnergyRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for EnergyRange {
    fn default() -> Self {
        Self {
            start: 1.0,
            stop: 30.0,
            step: 0.1,
        }
    }
}

/// 单层描述，厚度单位 µm
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerSpec {
    pub material: String,
    pub thickness_um: f64,
    #[serde(default)]
    pub density: Option<f64>,
}

/// 单通道描述
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChannelSpec {
    #[serde(default)]
    pub filters: Vec<LayerSpec>,
}

/// 配置文件
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Setup {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub energy: Option<EnergyRange>,
    #[serde(default, rename = "channel")]
    pub channels: Vec<ChannelSpec>,
}

impl Setup {
    /// 读取 TOML 配置文件
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RossFilterError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&text).map_err(|reason| RossFilterError::ConfigError {
            path: path.display().to_string(),
            reason,
        })
    }

    /// 解析 TOML 文本
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    /// 把所有通道写入计算器
    ///
    /// 任一滤片校验失败时撤销本次新增的全部通道，并在错误中指明位置。
    pub fn apply<D: MaterialDatabase>(
        &self,
        calculator: &mut Calculator<D>,
        source: &str,
    ) -> Result<()> {
        let first_new = calculator.channels().len();

        for spec in &self.channels {
            if let Err((f_idx, err)) = add_channel_from_spec(calculator, spec) {
                let c_idx = calculator.channels().len() - 1;
                while calculator.channels().len() > first_new {
                    calculator.remove_channel(calculator.channels().len() - 1)?;
                }
                return Err(RossFilterError::ConfigError {
                    path: source.to_string(),
                    reason: format!(
                        "channel {}, filter {}: {}",
                        c_idx + 1 - first_new,
                        f_idx + 1,
                        err
                    ),
                });
            }
        }

        log::debug!(
            "{}: applied {} channel(s)",
            source,
            calculator.channels().len() - first_new
        );
        Ok(())
    }
}

/// 新增一个通道并写入各层；失败时返回出错的层索引
fn add_channel_from_spec<D: MaterialDatabase>(
    calculator: &mut Calculator<D>,
    spec: &ChannelSpec,
) -> std::result::Result<(), (usize, RossFilterError)> {
    let c_idx = calculator.add_channel();
    for (f_idx, layer) in spec.filters.iter().enumerate() {
        calculator
            .add_filter_to_channel(c_idx, &layer.material, layer.thickness_um, layer.density)
            .map_err(|e| (f_idx, e))?;
    }
    Ok(())
}

static LAYER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([^:@,]+?)\s*:\s*([^@\s]+)\s*(?:@\s*(\S+))?\s*$")
        .expect("layer pattern is a valid regex")
});

/// 解析命令行通道描述，例如 `"Be:10,Al:5@2.7"`
///
/// 只做语法解析，材料与数值的合法性由计算器校验。
pub fn parse_channel_spec(spec: &str) -> Result<ChannelSpec> {
    let mut filters = Vec::new();

    for part in spec.split(',').filter(|p| !p.trim().is_empty()) {
        let caps = LAYER_RE.captures(part).ok_or_else(|| {
            RossFilterError::InvalidArgument(format!(
                "Invalid layer '{}' (expected MATERIAL:THICKNESS_UM[@DENSITY])",
                part.trim()
            ))
        })?;

        let thickness_um = parse_number(&caps[2], part)?;
        let density = caps
            .get(3)
            .map(|m| parse_number(m.as_str(), part))
            .transpose()?;

        filters.push(LayerSpec {
            material: caps[1].to_string(),
            thickness_um,
            density,
        });
    }

    Ok(ChannelSpec { filters })
}

fn parse_number(text: &str, part: &str) -> Result<f64> {
    text.parse::<f64>().map_err(|_| {
        RossFilterError::InvalidArgument(format!(
            "Invalid number '{}' in layer '{}'",
            text,
            part.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::stub::StubDatabase;
    use std::io::Write;

    #[test]
    fn test_parse_channel_spec() {
        let spec = parse_channel_spec("Be:10, Al : 5@2.7").unwrap();
        assert_eq!(
            spec.filters,
            vec![
                LayerSpec {
                    material: "Be".to_string(),
                    thickness_um: 10.0,
                    density: None,
                },
                LayerSpec {
                    material: "Al".to_string(),
                    thickness_um: 5.0,
                    density: Some(2.7),
                },
            ]
        );
    }

    #[test]
    fn test_parse_empty_channel_spec() {
        assert!(parse_channel_spec("").unwrap().filters.is_empty());
    }

    #[test]
    fn test_parse_channel_spec_errors() {
        assert!(matches!(
            parse_channel_spec("Be"),
            Err(RossFilterError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_channel_spec("Be:ten"),
            Err(RossFilterError::InvalidArgument(_))
        ));
        assert!(parse_channel_spec("Be:10@x").is_err());
    }

    #[test]
    fn test_parse_setup() {
        let setup = Setup::parse(
            r#"
            title = "Be/Al"
            [energy]
            start = 1.0
            stop = 10.0
            step = 0.5

            [[channel]]
            filters = [ { material = "Be", thickness_um = 10.0 } ]

            [[channel]]
            filters = [ { material = "Al", thickness_um = 5.0, density = 2.7 } ]
            "#,
        )
        .unwrap();

        assert_eq!(setup.title.as_deref(), Some("Be/Al"));
        assert_eq!(setup.energy.unwrap().step, 0.5);
        assert_eq!(setup.channels.len(), 2);
        assert_eq!(setup.channels[1].filters[0].density, Some(2.7));
    }

    #[test]
    fn test_setup_rejects_unknown_fields() {
        assert!(Setup::parse("colour = \"red\"").is_err());
    }

    #[test]
    fn test_apply_setup() {
        let setup = Setup {
            channels: vec![
                parse_channel_spec("Be:10").unwrap(),
                parse_channel_spec("Al:5,Cu:1").unwrap(),
            ],
            ..Setup::default()
        };

        let mut calc = Calculator::new(StubDatabase);
        setup.apply(&mut calc, "test").unwrap();
        assert_eq!(calc.channels().len(), 2);
        assert_eq!(calc.channel(1).unwrap().len(), 2);
    }

    #[test]
    fn test_apply_rolls_back_on_error() {
        let setup = Setup {
            channels: vec![
                parse_channel_spec("Be:10").unwrap(),
                parse_channel_spec("Al:5,Unobtainium:1").unwrap(),
            ],
            ..Setup::default()
        };

        let mut calc = Calculator::new(StubDatabase);
        calc.add_channel();

        let err = setup.apply(&mut calc, "test").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("channel 2, filter 2"), "{}", message);
        assert!(message.contains("Unobtainium"));
        assert_eq!(calc.channels().len(), 1);
    }

    #[test]
    fn test_setup_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[channel]]\nfilters = [ {{ material = \"Be\", thickness_um = 25.0 }} ]")
            .unwrap();

        let setup = Setup::from_file(file.path()).unwrap();
        assert_eq!(setup.channels[0].filters[0].thickness_um, 25.0);
        assert!(setup.energy.is_none());

        assert!(matches!(
            Setup::from_file(Path::new("/nonexistent/setup.toml")),
            Err(RossFilterError::FileReadError { .. })
        ));
    }
}
