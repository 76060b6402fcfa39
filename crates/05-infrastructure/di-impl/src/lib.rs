//! # 对象工厂具体实现
//!
//! 提供原型、共享和实例三种策略的对象工厂，以及对应的异步版本。
//! 每个工厂都在自己的文档中说明实例策略与线程安全性。

pub mod async_providers;
pub mod builder;
mod cycle;
pub mod instance;
pub mod prototype;
pub mod shared;

pub use async_providers::{AsyncPrototypeFactory, AsyncSharedFactory};
pub use builder::{BoxedAsyncFactory, BoxedFactory, FactoryBuilder};
pub use instance::InstanceFactory;
pub use prototype::PrototypeFactory;
pub use shared::SharedFactory;
