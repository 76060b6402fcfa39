//! 共享工厂

use crate::cycle::{circular_creation, factory_key, CreationGuard};
use di_abstractions::ObjectFactory;
use infrastructure_common::CreationResult;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 共享工厂
///
/// 第一次调用 `get` 时运行构造函数并缓存结果，之后的成功调用都返回同一个 `Arc`。
///
/// 构造失败不会被缓存：错误直接返回给调用方，下一次调用会重新运行构造函数。
/// 多个线程同时发起首次调用时只有一个会运行构造函数，其余线程阻塞等待其结束。
///
/// 不可重入：构造函数在同一线程上再次调用本工厂的 `get`（直接或经由其他共享工厂）
/// 时返回“循环创建”的 [`CreationError`](infrastructure_common::CreationError)，
/// 而不是等待自己。把调用转交给其他线程并等待其结果仍会死锁。
pub struct SharedFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    name: String,
    constructor: F,
    instance: OnceCell<Arc<T>>,
}

impl<T, F> SharedFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    /// 创建共享工厂，名称默认为 `T` 的类型名
    pub fn new(constructor: F) -> Self {
        Self::with_name(std::any::type_name::<T>(), constructor)
    }

    /// 创建带名称的共享工厂
    pub fn with_name(name: impl Into<String>, constructor: F) -> Self {
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
        self.instance.get().is_some()
    }
}

impl<T, F> ObjectFactory<Arc<T>> for SharedFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    fn get(&self) -> CreationResult<Arc<T>> {
        if let Some(instance) = self.instance.get() {
            debug!("返回共享实例: {}", self.name);
            return Ok(Arc::clone(instance));
        }

        let _guard = CreationGuard::enter(factory_key(self)).ok_or_else(|| {
            warn!("检测到循环创建: {}", self.name);
            circular_creation(&self.name)
        })?;

        let instance = self.instance.get_or_try_init(|| {
            let value = (self.constructor)().map_err(|e| {
                warn!("共享实例创建失败: {}, 错误: {}", self.name, e);
                e
            })?;
            info!("共享实例已初始化: {}", self.name);
            Ok(Arc::new(value))
        })?;

        Ok(Arc::clone(instance))
    }
}

impl<T, F> std::fmt::Debug for SharedFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedFactory")
            .field("name", &self.name)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
