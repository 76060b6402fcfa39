//! 提供者配置

use crate::errors::{ConfigError, ConfigResult};
use crate::lifecycle::Lifetime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 提供者配置
///
/// 所有字段都可以省略，缺省时使用 [`Default`] 中的值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// 提供者名称，用于日志和错误信息
    pub name: Option<String>,
    /// 实例生命周期
    pub lifetime: Lifetime,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            name: None,
            lifetime: Lifetime::default(),
        }
    }
}

impl FactoryConfig {
    /// 从 JSON 字符串解析配置
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "提供者名称不能为空".to_string(),
                });
            }
        }
        Ok(())
    }
}
