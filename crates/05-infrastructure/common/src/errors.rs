//! 错误类型定义

use thiserror::Error;

/// 装箱的底层错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 对象创建错误
///
/// 提供者无法产生值时返回的唯一错误类型。调用方应通过 `?` 传播，
/// 而不是把它当作致命错误。
#[derive(Error, Debug)]
#[error("对象创建失败: {type_name}, 原因: {message}")]
pub struct CreationError {
    /// 创建失败的类型或提供者名称
    pub type_name: String,
    /// 失败说明
    pub message: String,
    /// 底层错误（如果有）
    #[source]
    pub source: Option<BoxError>,
}

impl CreationError {
    /// 创建新的对象创建错误
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// 以类型 `T` 的名称创建错误
    pub fn of<T: ?Sized>(message: impl Into<String>) -> Self {
        Self::new(std::any::type_name::<T>(), message)
    }

    /// 包装底层错误，说明取自底层错误的描述
    pub fn from_source<T: ?Sized>(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self {
            type_name: std::any::type_name::<T>().to_string(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// 附加底层错误
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 配置文件不存在
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    /// 读取配置文件时发生 IO 错误
    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    /// 配置内容不是合法的 JSON 或字段类型不符
    #[error("配置解析失败: {source}")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },

    /// 配置内容未通过校验
    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 对象创建结果类型别名
pub type CreationResult<T> = Result<T, CreationError>;
/// 配置结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug)]
    struct Database;

    #[test]
    fn test_of_uses_type_name() {
        let err = CreationError::of::<Database>("连接被拒绝");
        assert!(err.type_name.ends_with("Database"));
        assert_eq!(err.message, "连接被拒绝");
        assert!(err.source().is_none());
        assert!(err.to_string().contains("连接被拒绝"));
    }

    #[test]
    fn test_from_source_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing socket");
        let err = CreationError::from_source::<Database>(io);

        assert_eq!(err.message, "missing socket");
        let cause = err.source().expect("source should be kept");
        assert_eq!(cause.to_string(), "missing socket");
    }

    #[test]
    fn test_with_source() {
        let err = CreationError::new("pool", "初始化失败").with_source("timeout");
        assert_eq!(err.type_name, "pool");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("timeout"));
    }
}
