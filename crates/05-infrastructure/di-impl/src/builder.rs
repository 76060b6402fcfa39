//! 工厂构建器

use crate::async_providers::{AsyncPrototypeFactory, AsyncSharedFactory};
use crate::prototype::PrototypeFactory;
use crate::shared::SharedFactory;
use di_abstractions::{AsyncObjectFactory, ObjectFactory};
use infrastructure_common::{ConfigResult, CreationResult, FactoryConfig, Lifetime};
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// 装箱的同步工厂
pub type BoxedFactory<T> = Box<dyn ObjectFactory<Arc<T>> + Send + Sync>;

/// 装箱的异步工厂
pub type BoxedAsyncFactory<T> = Box<dyn AsyncObjectFactory<Arc<T>>>;

/// 工厂构建器
///
/// 根据 [`Lifetime`] 选择原型或共享实现
pub struct FactoryBuilder<T> {
    config: FactoryConfig,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FactoryBuilder<T>
where
    T: Send + Sync + 'static,
{
    /// 创建新的构建器
    pub fn new() -> Self {
        Self::from_config(FactoryConfig::default())
    }

    /// 从配置创建构建器
    pub fn from_config(config: FactoryConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    /// 设置工厂名称
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// 设置生命周期
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.config.lifetime = lifetime;
        self
    }

    /// 构建同步工厂
    pub fn build<F>(self, constructor: F) -> ConfigResult<BoxedFactory<T>>
    where
        F: Fn() -> CreationResult<T> + Send + Sync + 'static,
    {
        self.config.validate()?;
        let lifetime = self.config.lifetime;
        let name = self.resolved_name();
        info!("构建工厂: {} (生命周期: {})", name, lifetime);

        let factory: BoxedFactory<T> = match lifetime {
            Lifetime::Prototype => Box::new(PrototypeFactory::with_name(name, constructor)),
            Lifetime::Shared => Box::new(SharedFactory::with_name(name, constructor)),
        };
        Ok(factory)
    }

    /// 构建异步工厂
    pub fn build_async<F, Fut>(self, constructor: F) -> ConfigResult<BoxedAsyncFactory<T>>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CreationResult<T>> + Send + 'static,
    {
        self.config.validate()?;
        let lifetime = self.config.lifetime;
        let name = self.resolved_name();
        info!("构建异步工厂: {} (生命周期: {})", name, lifetime);

        let factory: BoxedAsyncFactory<T> = match lifetime {
            Lifetime::Prototype => Box::new(AsyncPrototypeFactory::with_name(name, constructor)),
            Lifetime::Shared => Box::new(AsyncSharedFactory::with_name(name, constructor)),
        };
        Ok(factory)
    }

    fn resolved_name(&self) -> String {
        self.config
            .name
            .clone()
            .unwrap_or_else(|| std::any::type_name::<T>().to_string())
    }
}

impl<T> Default for FactoryBuilder<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
