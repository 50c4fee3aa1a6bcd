//! 归一化的 API 错误类型
//!
//! 网关客户端把传输异常和非 2xx 响应统一折叠为 `ApiError { kind, message }`，
//! 界面层只依赖错误的语义分类，不接触原始传输错误。

use std::fmt;

use serde::{Deserialize, Serialize};

// =========================================================
// 错误分类枚举
// =========================================================

/// 错误分类
/// 对应恢复策略：本地修正 / 重新登录 / 用户手动重试
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    /// 401: 会话无效或已过期，必须重新认证
    Unauthorized,
    /// 其它 4xx: 请求内容被后端拒绝（字段级错误）
    Validation,
    /// 5xx: 后端故障，提供重试入口即可
    Server,
    /// 无响应（连接失败或超时）
    Network,
}

impl ApiErrorKind {
    /// 由 HTTP 状态码归类；只在收到响应时调用
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiErrorKind::Unauthorized,
            400..=499 => ApiErrorKind::Validation,
            _ => ApiErrorKind::Server,
        }
    }

    /// 后端未附带说明时的兜底文案
    pub fn default_message(&self) -> &'static str {
        match self {
            ApiErrorKind::Unauthorized => "Your session has expired. Please log in again.",
            ApiErrorKind::Validation => "Request was rejected. Please review your input.",
            ApiErrorKind::Server => "Server error. Please try again later.",
            ApiErrorKind::Network => "Network error. Please check your connection and try again.",
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::Validation => "VALIDATION_REJECTED",
            ApiErrorKind::Server => "SERVER_ERROR",
            ApiErrorKind::Network => "NETWORK_ERROR",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 归一化的请求错误
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    // --- Convenience constructors ---

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Unauthorized, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Server, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    /// 由非 2xx 响应构造
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::from_status(status), message)
    }

    /// 是否应强制重新认证
    pub fn requires_reauth(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.error_code(), self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =========================================================
// 后端错误响应体
// =========================================================

/// 后端以 `{"msg": "..."}` 返回错误说明
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub msg: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_maps_to_unauthorized() {
        let err = ApiError::from_status(401, "Token has expired");
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert!(err.requires_reauth());
    }

    #[test]
    fn status_4xx_maps_to_validation() {
        assert_eq!(ApiErrorKind::from_status(400), ApiErrorKind::Validation);
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Validation);
    }

    #[test]
    fn status_5xx_maps_to_server() {
        assert_eq!(ApiErrorKind::from_status(500), ApiErrorKind::Server);
        assert_eq!(ApiErrorKind::from_status(502), ApiErrorKind::Server);
    }

    #[test]
    fn display_carries_code_and_message() {
        let err = ApiError::network("request timed out");
        assert_eq!(err.to_string(), "[NETWORK_ERROR] request timed out");
    }

    #[test]
    fn error_body_parses_backend_shape() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"msg":"Token is invalid or corrupted"}"#).unwrap();
        assert_eq!(body.msg.as_deref(), Some("Token is invalid or corrupted"));
    }
}
