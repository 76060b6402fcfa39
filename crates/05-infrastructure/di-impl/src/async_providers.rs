//! 异步工厂实现

use crate::cycle::{circular_creation, factory_key, scoped, task_chain_with};
use async_trait::async_trait;
use di_abstractions::AsyncObjectFactory;
use infrastructure_common::CreationResult;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// 异步原型工厂
///
/// 每次调用都等待构造 future 并返回新的 `Arc`。不持有锁，构造 future 可以再次调用本工厂。
pub struct AsyncPrototypeFactory<T, F> {
    name: String,
    constructor: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F> AsyncPrototypeFactory<T, F> {
    /// 创建异步原型工厂，名称默认为 `T` 的类型名
    pub fn new<Fut>(constructor: F) -> Self
    where
        F: Fn() -> Fut,
        Fut: Future<Output = CreationResult<T>>,
    {
        Self::with_name(std::any::type_name::<T>(), constructor)
    }

    /// 创建带名称的异步原型工厂
    pub fn with_name<Fut>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Fut,
        Fut: Future<Output = CreationResult<T>>,
    {
        Self {
            name: name.into(),
            constructor,
            _marker: PhantomData,
        }
    }

    /// 工厂名称
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl<T, F, Fut> AsyncObjectFactory<Arc<T>> for AsyncPrototypeFactory<T, F>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = CreationResult<T>> + Send + 'static,
{
    async fn get(&self) -> CreationResult<Arc<T>> {
        match (self.constructor)().await {
            Ok(value) => {
                debug!("创建异步原型实例: {}", self.name);
                Ok(Arc::new(value))
            }
            Err(e) => {
                warn!("异步原型实例创建失败: {}, 错误: {}", self.name, e);
                Err(e)
            }
        }
    }
}

/// 异步共享工厂
///
/// 第一次调用时等待构造 future 并缓存结果，之后返回同一个 `Arc`。
/// 并发的首次调用只会运行一次构造；构造失败或被取消时单元保持为空，
/// 下一次调用会重试。
///
/// 不可重入：构造 future 在同一任务内再次等待本工厂的 `get` 时返回“循环创建”的
/// [`CreationError`](infrastructure_common::CreationError)。构造 future 另起任务
/// 调用本工厂并等待其结果仍会死锁。
pub struct AsyncSharedFactory<T, F> {
    name: String,
    constructor: F,
    instance: OnceCell<Arc<T>>,
}

impl<T, F> AsyncSharedFactory<T, F> {
    /// 创建异步共享工厂，名称默认为 `T` 的类型名
    pub fn new<Fut>(constructor: F) -> Self
    where
        F: Fn() -> Fut,
        Fut: Future<Output = CreationResult<T>>,
    {
        Self::with_name(std::any::type_name::<T>(), constructor)
    }

    /// 创建带名称的异步共享工厂
    pub fn with_name<Fut>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Fut,
        Fut: Future<Output = CreationResult<T>>,
    {
        Self {
            name: name.into(),
            constructor,
            instance: OnceCell::new(),
        }
    }

    /// 工厂名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 是否已缓存实例
    pub fn is_initialized(&self) -> bool {
        self.instance.initialized()
    }
}

#[async_trait]
impl<T, F, Fut> AsyncObjectFactory<Arc<T>> for AsyncSharedFactory<T, F>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = CreationResult<T>> + Send + 'static,
{
    async fn get(&self) -> CreationResult<Arc<T>> {
        if let Some(instance) = self.instance.get() {
            debug!("返回异步共享实例: {}", self.name);
            return Ok(Arc::clone(instance));
        }

        let chain = task_chain_with(factory_key(self)).ok_or_else(|| {
            warn!("检测到循环创建: {}", self.name);
            circular_creation(&self.name)
        })?;

        let instance = self
            .instance
            .get_or_try_init(|| {
                scoped(chain, async {
                    match (self.constructor)().await {
                        Ok(value) => {
                            info!("异步共享实例已初始化: {}", self.name);
                            Ok(Arc::new(value))
                        }
                        Err(e) => {
                            warn!("异步共享实例创建失败: {}, 错误: {}", self.name, e);
                            Err(e)
                        }
                    }
                })
            })
            .await?;

        Ok(Arc::clone(instance))
    }
}
