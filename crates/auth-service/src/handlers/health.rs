//! 系统端点：根路径、存活与就绪探针

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::warn;

use crate::dto::MessageResponse;
use crate::state::AppState;
use crate::SERVICE_NAME;

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Job Fit AI Backend Running"))
}

/// 存活探针：服务进程正常即返回 ok
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
    }))
}

/// 就绪探针：检查用户存储是否可用
///
/// 存储不可用时返回 503，负载均衡据此摘除实例
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let store_ok = match state.user_repo.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "user store health check failed");
            false
        }
    };

    let status = if store_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if store_ok { "ok" } else { "degraded" },
            "service": SERVICE_NAME,
            "checks": {
                "store": if store_ok { "ok" } else { "fail" },
            }
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use jobfit_shared::test_utils::test_auth_config;
    use tower::ServiceExt;

    use crate::repository::{MockUserRepositoryTrait, RepositoryError};
    use crate::routes::system_routes;

    async fn ready_response(repo: MockUserRepositoryTrait) -> (StatusCode, Value) {
        let state = AppState::new(Arc::new(repo), &test_auth_config()).unwrap();
        let app = system_routes().with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_store() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_health_check()
            .times(1)
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let (status, body) = ready_response(repo).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["store"], "fail");
    }

    #[tokio::test]
    async fn test_ready_when_store_answers() {
        let mut repo = MockUserRepositoryTrait::new();
        repo.expect_health_check().times(1).returning(|| Ok(()));

        let (status, body) = ready_response(repo).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"]["store"], "ok");
    }
}
