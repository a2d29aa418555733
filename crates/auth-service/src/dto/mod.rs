//! 数据传输对象
//!
//! 字段使用 snake_case，与前端约定的接口格式一致

pub mod request;
pub mod response;

pub use request::{LoginRequest, SignupRequest};
pub use response::{DashboardResponse, LoginResponse, MessageResponse};
