//! 对象工厂抽象接口
//!
//! 定义按需返回对象实例（可能共享，也可能独立）的工厂。

use infrastructure_common::CreationResult;
use std::marker::PhantomData;
use std::sync::Arc;

/// 对象工厂 trait
///
/// 调用 [`get`](ObjectFactory::get) 时返回 `T` 的一个实例。每次返回新实例（原型）
/// 还是共享实例由具体实现决定，并应在实现上说明。线程安全、可重入性以及是否阻塞
/// 同样由具体实现说明，这里不做假设。
pub trait ObjectFactory<T> {
    /// 返回此工厂管理的对象的实例
    ///
    /// 无法创建时返回 [`CreationError`](infrastructure_common::CreationError)，
    /// 不会以默认值代替。
    fn get(&self) -> CreationResult<T>;
}

impl<T, P> ObjectFactory<T> for &P
where
    P: ObjectFactory<T> + ?Sized,
{
    fn get(&self) -> CreationResult<T> {
        (**self).get()
    }
}

impl<T, P> ObjectFactory<T> for Box<P>
where
    P: ObjectFactory<T> + ?Sized,
{
    fn get(&self) -> CreationResult<T> {
        (**self).get()
    }
}

impl<T, P> ObjectFactory<T> for Arc<P>
where
    P: ObjectFactory<T> + ?Sized,
{
    fn get(&self) -> CreationResult<T> {
        (**self).get()
    }
}

/// Lambda 工厂包装器
///
/// 把闭包适配为 [`ObjectFactory`]，实例策略完全由闭包决定。
pub struct LambdaFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    factory_fn: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F> LambdaFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    /// 用闭包创建工厂
    pub fn new(factory_fn: F) -> Self {
        Self {
            factory_fn,
            _marker: PhantomData,
        }
    }
}

impl<T, F> ObjectFactory<T> for LambdaFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    fn get(&self) -> CreationResult<T> {
        (self.factory_fn)()
    }
}

impl<T, F> std::fmt::Debug for LambdaFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LambdaFactory")
            .field("type", &std::any::type_name::<T>())
            .field("factory_fn", &"<function>")
            .finish()
    }
}

/// 从闭包创建工厂
pub fn from_fn<T, F>(factory_fn: F) -> LambdaFactory<T, F>
where
    F: Fn() -> CreationResult<T>,
{
    LambdaFactory::new(factory_fn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use infrastructure_common::CreationError;
    use std::cell::Cell;

    fn consume<F: ObjectFactory<String>>(factory: F) -> CreationResult<String> {
        factory.get()
    }

    #[test]
    fn test_lambda_factory() {
        let factory = from_fn(|| Ok("value".to_string()));
        assert_eq!(factory.get().unwrap(), "value");
        assert_eq!(factory.get().unwrap(), "value");
    }

    #[test]
    fn test_lambda_factory_error() {
        let factory = from_fn(|| Err::<u32, _>(CreationError::of::<u32>("no value")));
        let err = factory.get().unwrap_err();
        assert_eq!(err.message, "no value");
    }

    #[test]
    fn test_forwarding_impls() {
        let factory = from_fn(|| Ok("forwarded".to_string()));
        assert_eq!(consume(&factory).unwrap(), "forwarded");

        let boxed: Box<dyn ObjectFactory<String>> = Box::new(from_fn(|| Ok("boxed".to_string())));
        assert_eq!(consume(&boxed).unwrap(), "boxed");
        assert_eq!(consume(boxed).unwrap(), "boxed");

        let shared: Arc<dyn ObjectFactory<String> + Send + Sync> =
            Arc::new(from_fn(|| Ok("arc".to_string())));
        assert_eq!(consume(Arc::clone(&shared)).unwrap(), "arc");
    }

    #[test]
    fn test_non_thread_safe_factory_allowed() {
        let calls = Cell::new(0);
        let factory = from_fn(|| {
            calls.set(calls.get() + 1);
            Ok(calls.get())
        });

        assert_eq!(factory.get().unwrap(), 1);
        assert_eq!(factory.get().unwrap(), 2);
    }
}
