//! HTTP 安全头

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// 为所有响应注入 HTTP 安全头
///
/// 即使上游反向代理未配置，应用层仍提供基本的浏览器安全策略。
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    // 禁止浏览器猜测 Content-Type
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    // 禁止页面被嵌入 iframe
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert(
        "strict-transport-security",
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    // 显式禁用旧的 XSS 过滤器
    headers.insert("x-xss-protection", HeaderValue::from_static("0"));
    response
}
