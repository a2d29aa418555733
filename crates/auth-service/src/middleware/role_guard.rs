//! 角色访问控制
//!
//! `authorize` 是纯函数：接收原始 Token 字符串和要求的角色，返回令牌中的身份信息。
//! `require_role` 把它包装成 axum 中间件，从 Authorization header 提取 Bearer Token，
//! 校验通过后将 `UserClaims` 注入请求扩展。

use std::future::Future;
use std::pin::Pin;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use tracing::debug;

use crate::auth::JwtManager;
use crate::error::{AuthError, Result};
use crate::models::{Role, UserClaims};
use crate::state::AppState;

/// 角色不匹配时的提示
pub const INSUFFICIENT_ROLE_MESSAGE: &str = "Access forbidden: insufficient role";

/// 校验 Token 并检查角色
///
/// - Token 无效或过期：`InvalidToken`（401）
/// - 角色不等于 `required_role`：`Forbidden`（403）
pub fn authorize(jwt: &JwtManager, required_role: Role, token: &str) -> Result<UserClaims> {
    let claims = jwt.verify(token)?;

    if claims.role != required_role {
        return Err(AuthError::Forbidden(INSUFFICIENT_ROLE_MESSAGE.to_string()));
    }

    Ok(claims)
}

/// 从 Authorization header 提取 Bearer Token
pub fn bearer_token(headers: &HeaderMap) -> Result<String> {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .ok_or_else(|| AuthError::InvalidToken("Not authenticated".to_string()))
}

/// 角色检查中间件工厂
///
/// # 示例
/// ```ignore
/// .route(
///     "/recruiter-dashboard",
///     get(recruiter_dashboard).route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         require_role(Role::Recruiter),
///     )),
/// )
/// ```
pub fn require_role(
    required_role: Role,
) -> impl Fn(
    State<AppState>,
    Request<Body>,
    Next,
) -> Pin<Box<dyn Future<Output = Response> + Send>>
       + Clone
       + Send
       + Sync
       + 'static {
    move |State(state): State<AppState>, request: Request<Body>, next: Next| {
        Box::pin(async move { check_role(state, request, next, required_role).await })
    }
}

async fn check_role(
    state: AppState,
    mut request: Request<Body>,
    next: Next,
    required_role: Role,
) -> Response {
    let result = bearer_token(request.headers())
        .and_then(|token| authorize(&state.jwt, required_role, &token));

    match result {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            debug!(required_role = %required_role, error = %e, "access denied");
            e.into_response()
        }
    }
}
