//! 循环创建检测
//!
//! 共享工厂在运行构造函数期间持有初始化锁，构造函数若再次调用同一工厂的 `get`
//! 会永久等待。这里记录当前线程（同步）或当前任务（异步）正在创建的工厂，
//! 以便把这种情况转换为 [`CreationError`]。

use infrastructure_common::CreationError;
use std::cell::RefCell;

thread_local! {
    static CREATING: RefCell<Vec<usize>> = RefCell::new(Vec::new());
}

tokio::task_local! {
    static TASK_CREATING: Vec<usize>;
}

/// 工厂在创建链中的标识
pub(crate) fn factory_key<T: ?Sized>(factory: &T) -> usize {
    factory as *const T as *const () as usize
}

/// 循环创建错误
pub(crate) fn circular_creation(name: &str) -> CreationError {
    CreationError::new(name, format!("检测到循环创建: {name}"))
}

/// 当前线程的创建守卫，离开作用域时把工厂移出创建链
pub(crate) struct CreationGuard {
    key: usize,
}

impl CreationGuard {
    /// 进入创建链；工厂已在链中时返回 `None`
    pub(crate) fn enter(key: usize) -> Option<Self> {
        CREATING.with(|chain| {
            let mut chain = chain.borrow_mut();
            if chain.contains(&key) {
                None
            } else {
                chain.push(key);
                Some(Self { key })
            }
        })
    }
}

impl Drop for CreationGuard {
    fn drop(&mut self) {
        CREATING.with(|chain| {
            let mut chain = chain.borrow_mut();
            if let Some(pos) = chain.iter().rposition(|k| *k == self.key) {
                chain.remove(pos);
            }
        });
    }
}

/// 当前任务的创建链，加入 `key` 后返回；已在链中时返回 `None`
pub(crate) fn task_chain_with(key: usize) -> Option<Vec<usize>> {
    let mut chain = TASK_CREATING.try_with(Clone::clone).unwrap_or_default();
    if chain.contains(&key) {
        return None;
    }
    chain.push(key);
    Some(chain)
}

/// 在给定创建链下运行 future
pub(crate) async fn scoped<F: std::future::Future>(chain: Vec<usize>, fut: F) -> F::Output {
    TASK_CREATING.scope(chain, fut).await
}
