//! Centralized integration tests for object providers
use anyhow::Result;
use di_abstractions::{from_fn, AsyncObjectFactory, ObjectFactory};
use di_impl::{FactoryBuilder, InstanceFactory, PrototypeFactory, SharedFactory};
use infrastructure_common::{CreationError, FactoryConfig, Lifetime};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 测试组件
#[derive(Debug, PartialEq)]
struct TestService {
    id: usize,
}

#[test]
fn test_always_succeeding_constructor_thousand_calls() -> Result<()> {
    let prototype = PrototypeFactory::new(|| Ok(TestService { id: 7 }));
    let shared = SharedFactory::new(|| Ok(TestService { id: 7 }));

    for _ in 0..1000 {
        assert_eq!(prototype.get()?.id, 7);
        assert_eq!(shared.get()?.id, 7);
    }
    Ok(())
}

#[test]
fn test_always_failing_constructor_every_call_errors() {
    let calls = AtomicUsize::new(0);
    let factory = SharedFactory::<TestService, _>::new(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(CreationError::of::<TestService>("依赖不可用"))
    });

    for _ in 0..10 {
        let err = factory.get().unwrap_err();
        assert!(err.type_name.ends_with("TestService"));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 10);
    assert!(!factory.is_initialized());
}

#[test]
fn test_prototype_values_equal_but_not_identical() -> Result<()> {
    let factory = PrototypeFactory::new(|| Ok(TestService { id: 1 }));
    let first = factory.get()?;
    let second = factory.get()?;

    assert_eq!(first, second);
    assert!(!Arc::ptr_eq(&first, &second));
    Ok(())
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn build_pair(factory: &dyn ObjectFactory<Arc<TestService>>) -> Result<usize> {
        let a = factory.get()?;
        let b = factory.get()?;
        Ok(a.id + b.id)
    }

    let ok = InstanceFactory::new(TestService { id: 2 });
    assert_eq!(build_pair(&ok).unwrap(), 4);

    let failing =
        PrototypeFactory::<TestService, _>::new(|| Err(CreationError::of::<TestService>("磁盘已满")));
    let err = build_pair(&failing).unwrap_err();
    let creation = err.downcast_ref::<CreationError>().unwrap();
    assert_eq!(creation.message, "磁盘已满");
}

#[test]
fn test_counter_closure_as_provider() -> Result<()> {
    let next = AtomicUsize::new(0);
    let factory = from_fn(|| Ok(TestService { id: next.fetch_add(1, Ordering::SeqCst) }));

    assert_eq!(factory.get()?.id, 0);
    assert_eq!(factory.get()?.id, 1);
    Ok(())
}

#[test]
fn test_builder_honors_configured_lifetime() -> Result<()> {
    for (json, shared) in [
        (r#"{"lifetime": "prototype"}"#, false),
        (r#"{"lifetime": "shared", "name": "svc"}"#, true),
    ] {
        let config = FactoryConfig::from_json_str(json)?;
        assert_eq!(config.lifetime.is_shared(), shared);

        let factory = FactoryBuilder::from_config(config).build(|| Ok(TestService { id: 3 }))?;
        let first = factory.get()?;
        let second = factory.get()?;
        assert_eq!(Arc::ptr_eq(&first, &second), shared);
    }
    Ok(())
}

#[tokio::test]
async fn test_async_shared_across_tasks() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let factory: Arc<dyn AsyncObjectFactory<Arc<TestService>>> = Arc::from(
        FactoryBuilder::new()
            .lifetime(Lifetime::Shared)
            .build_async(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                    Ok(TestService { id: 9 })
                }
            })?,
    );

    let mut handles = Vec::new();
    for _ in 0..16 {
        let factory = Arc::clone(&factory);
        handles.push(tokio::spawn(async move { factory.get().await }));
    }

    let mut instances = Vec::new();
    for handle in handles {
        instances.push(handle.await??);
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(instances.iter().all(|i| Arc::ptr_eq(i, &instances[0])));
    Ok(())
}
