//! # 示例应用程序
//!
//! 演示如何按配置构建对象工厂并按需获取实例

use anyhow::Context;
use clap::Parser;
use di_abstractions::{AsyncObjectFactory, ObjectFactory};
use di_impl::FactoryBuilder;
use infrastructure_common::{CreationError, FactoryConfig, Lifetime};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn 对象工厂示例应用")]
struct Args {
    /// 工厂配置文件路径（JSON）
    #[arg(short, long, default_value = "config/provider.json")]
    config: String,

    /// 调用 get 的次数
    #[arg(long, default_value_t = 3)]
    calls: usize,

    /// 让构造函数始终失败
    #[arg(long)]
    fail: bool,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 演示用的连接对象
#[derive(Debug)]
struct Connection {
    serial: u64,
}

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

impl Connection {
    fn open(fail: bool) -> Result<Self, CreationError> {
        if fail {
            return Err(CreationError::of::<Self>("目标地址不可达"));
        }
        Ok(Self {
            serial: NEXT_SERIAL.fetch_add(1, Ordering::SeqCst),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("启动对象工厂示例应用");

    let config = load_config(&args.config)?;
    demonstrate_sync_factory(&config, args.calls, args.fail)?;
    demonstrate_async_factory().await?;

    info!("示例应用结束");
    Ok(())
}

/// 加载工厂配置，文件不存在时使用默认配置
fn load_config(path: &str) -> anyhow::Result<FactoryConfig> {
    if Path::new(path).exists() {
        info!("加载配置文件: {}", path);
        FactoryConfig::from_json_file(path).with_context(|| format!("无法加载配置: {path}"))
    } else {
        info!("配置文件不存在，使用默认配置: {}", path);
        Ok(FactoryConfig::default())
    }
}

/// 演示同步工厂
fn demonstrate_sync_factory(
    config: &FactoryConfig,
    calls: usize,
    fail: bool,
) -> anyhow::Result<()> {
    info!("=== 同步工厂 ({}) ===", config.lifetime);

    let factory =
        FactoryBuilder::from_config(config.clone()).build(move || Connection::open(fail))?;

    for i in 0..calls {
        match factory.get() {
            Ok(connection) => info!("第 {} 次调用: 连接 #{}", i + 1, connection.serial),
            Err(e) => error!("第 {} 次调用失败: {}", i + 1, e),
        }
    }
    Ok(())
}

/// 演示多个任务并发访问异步共享工厂
async fn demonstrate_async_factory() -> anyhow::Result<()> {
    info!("=== 异步共享工厂 ===");

    let factory: Arc<dyn AsyncObjectFactory<Arc<Connection>>> = Arc::from(
        FactoryBuilder::new()
            .name("async-connection")
            .lifetime(Lifetime::Shared)
            .build_async(|| async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Connection::open(false)
            })?,
    );

    let mut handles = Vec::new();
    for task in 0..4 {
        let factory = Arc::clone(&factory);
        handles.push(tokio::spawn(async move {
            let connection = factory.get().await?;
            info!("任务 {} 获得连接 #{}", task, connection.serial);
            Ok::<_, CreationError>(connection)
        }));
    }

    for handle in handles {
        handle.await??;
    }
    Ok(())
}
