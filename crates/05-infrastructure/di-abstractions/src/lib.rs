//! # Dependency Injection Abstractions
//!
//! 对象提供者抽象层，定义按需获取实例的核心接口。
//!
//! ## 核心接口
//!
//! - [`ObjectFactory`] - 同步对象工厂接口
//! - [`AsyncObjectFactory`] - 异步对象工厂接口
//! - [`LambdaFactory`] - 闭包工厂包装器

pub mod async_factory;
pub mod factory;

pub use async_factory::*;
pub use factory::*;

pub use infrastructure_common::{CreationError, CreationResult};
