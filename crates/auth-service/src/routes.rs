//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射，并组装全局中间件

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use jobfit_shared::config::CorsConfig;
use jobfit_shared::observability::middleware as obs_middleware;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::middleware::{require_role, security_headers};
use crate::models::Role;
use crate::{handlers, state::AppState};

/// 构建认证相关的路由（公开路由，无需认证）
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
}

/// 构建角色看板路由
///
/// 每个看板只允许对应角色访问，角色之间没有继承关系
pub fn dashboard_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/jobseeker-dashboard",
            get(handlers::dashboard::jobseeker_dashboard).route_layer(
                middleware::from_fn_with_state(state.clone(), require_role(Role::JobSeeker)),
            ),
        )
        .route(
            "/recruiter-dashboard",
            get(handlers::dashboard::recruiter_dashboard).route_layer(
                middleware::from_fn_with_state(state.clone(), require_role(Role::Recruiter)),
            ),
        )
}

/// 构建根路径与探针路由
pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// 构建 CORS 层
///
/// 配置为 "*" 时允许任意来源但不允许携带凭证；否则仅放行列出的来源
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::AUTHORIZATION, header::CONTENT_TYPE];

    if config.allowed_origins.iter().any(|o| o == "*") {
        info!("CORS allowed_origins: * (all origins)");
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    info!("CORS allowed_origins: {}", config.allowed_origins.join(","));

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
}

/// 组装完整的应用路由
pub fn app(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .merge(system_routes())
        .merge(auth_routes())
        .merge(dashboard_routes(&state))
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer(cors))
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}
