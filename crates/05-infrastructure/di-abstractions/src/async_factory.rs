//! 异步对象工厂抽象接口

use async_trait::async_trait;
use infrastructure_common::CreationResult;
use std::sync::Arc;

/// 异步对象工厂 trait
///
/// 与 [`ObjectFactory`](crate::ObjectFactory) 契约相同，用于需要等待的构造过程。
/// 返回的 future 是 `Send` 的，因此实现必须是 `Send + Sync`。
#[async_trait]
pub trait AsyncObjectFactory<T>: Send + Sync {
    /// 返回此工厂管理的对象的实例
    async fn get(&self) -> CreationResult<T>;
}

#[async_trait]
impl<T, P> AsyncObjectFactory<T> for Arc<P>
where
    T: Send + 'static,
    P: AsyncObjectFactory<T> + ?Sized,
{
    async fn get(&self) -> CreationResult<T> {
        (**self).get().await
    }
}
