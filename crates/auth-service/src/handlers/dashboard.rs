//! 角色看板处理器
//!
//! 角色校验由路由上的 `require_role` 完成，这里只读取注入的身份信息

use axum::{Extension, Json};

use crate::dto::DashboardResponse;
use crate::models::UserClaims;

/// GET /jobseeker-dashboard
pub async fn jobseeker_dashboard(
    Extension(user): Extension<UserClaims>,
) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: "Welcome Job Seeker".to_string(),
        user,
    })
}

/// GET /recruiter-dashboard
pub async fn recruiter_dashboard(
    Extension(user): Extension<UserClaims>,
) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: "Welcome Recruiter".to_string(),
        user,
    })
}
