//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use opsdash_config::AppConfig;
use opsdash_errors::AppResult;
use opsdash_telemetry::init_metrics;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::health::{HealthChecker, ReadinessCheck, health_routes};
use crate::runtime::{init_runtime, shutdown_signal};

/// 服务构建结果：业务路由 + 就绪检查项
pub struct HttpService {
    pub router: Router,
    pub readiness: Vec<Arc<dyn ReadinessCheck>>,
}

impl HttpService {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            readiness: Vec::new(),
        }
    }

    /// 注册就绪检查
    pub fn with_readiness(mut self, check: Arc<dyn ReadinessCheck>) -> Self {
        self.readiness.push(check);
        self
    }
}

/// 运行 HTTP 服务
///
/// 统一入口点，负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 安装 Prometheus recorder
/// 4. 调用用户提供的闭包构建业务路由
/// 5. 合并 /health、/ready、/metrics 路由
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use opsdash_bootstrap::{run, HttpService};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run("config", |config| Ok(HttpService::new(my_routes(config)))).await
/// }
/// ```
pub async fn run<F>(config_dir: &str, service_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(&AppConfig) -> AppResult<HttpService>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = match init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    // 4. 构建业务路由
    let service = service_builder(&config)?;
    let checker = Arc::new(HealthChecker::new(service.readiness));

    let app = service
        .router
        .merge(health_routes(checker, metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 5. 启动服务器
    let addr: SocketAddr = config.bind_addr().parse()?;
    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
