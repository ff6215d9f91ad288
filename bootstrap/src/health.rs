//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use opsdash_telemetry::HealthStatus;

/// 就绪检查项
///
/// 每个服务注册自己依赖的检查（例如样例数据是否可读）
pub trait ReadinessCheck: Send + Sync {
    /// 组件名称
    fn name(&self) -> &'static str;

    /// 执行检查，失败时返回原因
    fn check(&self) -> Result<(), String>;
}

/// 健康检查器
#[derive(Default)]
pub struct HealthChecker {
    checks: Vec<Arc<dyn ReadinessCheck>>,
}

impl HealthChecker {
    pub fn new(checks: Vec<Arc<dyn ReadinessCheck>>) -> Self {
        Self { checks }
    }

    /// 执行存活检查（liveness）
    ///
    /// 只检查服务是否在运行，不检查依赖
    pub fn liveness(&self) -> HealthStatus {
        HealthStatus::new()
    }

    /// 执行就绪检查（readiness）
    pub fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::new();
        for check in &self.checks {
            match check.check() {
                Ok(()) => status.add_check(check.name(), true, None),
                Err(message) => status.add_check(check.name(), false, Some(message)),
            }
        }
        status
    }
}

#[derive(Clone)]
struct HealthState {
    checker: Arc<HealthChecker>,
    metrics: Option<PrometheusHandle>,
}

/// 构建健康检查路由
pub fn health_routes(checker: Arc<HealthChecker>, metrics: Option<PrometheusHandle>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(HealthState { checker, metrics })
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.checker.liveness()))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthState>) -> impl IntoResponse {
    let status = state.checker.readiness();
    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthState>) -> impl IntoResponse {
    match state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [("content-type", "text/plain; charset=utf-8")],
            handle.render(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [("content-type", "text/plain; charset=utf-8")],
            "metrics recorder not installed".to_string(),
        ),
    }
}
