//! 认证相关的 HTTP 处理器
//!
//! 提供注册和登录 API。注册不签发令牌，客户端需再调用登录。

use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};
use crate::error::{AuthError, Result};
use crate::state::AppState;

/// 注册成功的提示
pub const SIGNUP_SUCCESS_MESSAGE: &str = "User created successfully";

/// 用户注册
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SignupRequest>, AuthError>,
) -> Result<Json<MessageResponse>> {
    req.validate()?;

    state.auth_service.signup(req.into()).await?;

    Ok(Json(MessageResponse::new(SIGNUP_SUCCESS_MESSAGE)))
}

/// 用户登录
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AuthError>,
) -> Result<Json<LoginResponse>> {
    req.validate()?;

    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(outcome.into()))
}
