//! # Infrastructure Common
//!
//! 这个 crate 提供了对象提供者各层共用的错误、生命周期和配置类型。
//!
//! ## 核心类型
//!
//! - [`CreationError`] - 提供者无法产生值时的错误
//! - [`Lifetime`] - 原型 / 共享策略
//! - [`FactoryConfig`] - 可序列化的提供者配置

pub mod configuration;
pub mod errors;
pub mod lifecycle;

pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
