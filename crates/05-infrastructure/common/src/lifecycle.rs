//! 提供者生命周期策略

use serde::{Deserialize, Serialize};
use std::fmt;

/// 实例生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// 原型模式 - 每次调用都创建新实例
    Prototype,
    /// 共享模式 - 所有调用返回同一个实例
    Shared,
}

impl Lifetime {
    /// 是否为共享模式
    pub fn is_shared(self) -> bool {
        matches!(self, Self::Shared)
    }

    /// 配置中使用的名称
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prototype => "prototype",
            Self::Shared => "shared",
        }
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::Prototype
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
