//! 原型工厂

use di_abstractions::ObjectFactory;
use infrastructure_common::CreationResult;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// 原型工厂
///
/// 每次成功调用 `get` 都会运行构造函数并返回新的 `Arc`，
/// 两次调用返回的实例不会是同一个。
///
/// 工厂本身不持有可变状态，只要构造函数是 `Send + Sync` 就可以跨线程共享，
/// 是否阻塞取决于构造函数。不持有锁，构造函数可以再次调用本工厂的 `get`。
pub struct PrototypeFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    name: String,
    constructor: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F> PrototypeFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    /// 创建原型工厂，名称默认为 `T` 的类型名
    pub fn new(constructor: F) -> Self {
        Self::with_name(std::any::type_name::<T>(), constructor)
    }

    /// 创建带名称的原型工厂
    pub fn with_name(name: impl Into<String>, constructor: F) -> Self {
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

impl<T, F> ObjectFactory<Arc<T>> for PrototypeFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    fn get(&self) -> CreationResult<Arc<T>> {
        match (self.constructor)() {
            Ok(value) => {
                debug!("创建原型实例: {}", self.name);
                Ok(Arc::new(value))
            }
            Err(e) => {
                warn!("原型实例创建失败: {}, 错误: {}", self.name, e);
                Err(e)
            }
        }
    }
}

impl<T, F> std::fmt::Debug for PrototypeFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrototypeFactory")
            .field("name", &self.name)
            .field("constructor", &"<function>")
            .finish()
    }
}
