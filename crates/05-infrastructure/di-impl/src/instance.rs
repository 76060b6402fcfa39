//! 实例工厂

use di_abstractions::ObjectFactory;
use infrastructure_common::CreationResult;
use std::sync::Arc;

/// 包装已有实例的工厂，`get` 永远成功并返回同一个实例
///
/// `T: Send + Sync` 时可在线程间共享；`get` 只克隆 `Arc`，从不阻塞，可重入。
#[derive(Debug)]
pub struct InstanceFactory<T: ?Sized> {
    instance: Arc<T>,
}

impl<T> InstanceFactory<T> {
    /// 用给定的值创建实例工厂
    pub fn new(value: T) -> Self {
        Self {
            instance: Arc::new(value),
        }
    }
}

impl<T: ?Sized> InstanceFactory<T> {
    /// 包装已有的 `Arc`，`get` 返回与之相同的实例
    pub fn from_arc(instance: Arc<T>) -> Self {
        Self { instance }
    }
}

impl<T: ?Sized> ObjectFactory<Arc<T>> for InstanceFactory<T> {
    fn get(&self) -> CreationResult<Arc<T>> {
        Ok(Arc::clone(&self.instance))
    }
}

impl<T: ?Sized> Clone for InstanceFactory<T> {
    fn clone(&self) -> Self {
        Self {
            instance: Arc::clone(&self.instance),
        }
    }
}
