//! 异步操作状态
//!
//! 以单一枚举取代零散的 loading/error 布尔标志，使
//! "既在加载又有错误" 这类非法状态不可表达。同时充当
//! 按表单划分的提交互斥：`begin` 在 Pending 期间拒绝二次提交，
//! 保证一次有效提交至多发出一次网络调用。

use crate::error::ApiError;

/// 单个异步操作的生命周期
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OpState<T> {
    /// 尚未发起
    #[default]
    Idle,
    /// 调用在途；期间禁止再次提交
    Pending,
    /// 上次调用成功
    Succeeded(T),
    /// 上次调用失败；保留归一化错误供界面展示
    Failed(ApiError),
}

impl<T> OpState<T> {
    /// 尝试开始一次新调用
    ///
    /// 已有调用在途时返回 false，调用方必须放弃本次提交。
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = OpState::Pending;
        true
    }

    /// 调用成功，记录结果
    pub fn succeed(&mut self, value: T) {
        *self = OpState::Succeeded(value);
    }

    /// 调用失败，记录归一化错误
    pub fn fail(&mut self, error: ApiError) {
        *self = OpState::Failed(error);
    }

    /// 回到初始状态（如界面重置）
    pub fn reset(&mut self) {
        *self = OpState::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, OpState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            OpState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            OpState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_while_pending() {
        let mut op: OpState<()> = OpState::Idle;
        assert!(op.begin());
        // 第一次调用尚未结束，二次提交必须被拒绝
        assert!(!op.begin());
        assert!(op.is_pending());
    }

    #[test]
    fn begin_allowed_again_after_failure() {
        let mut op: OpState<()> = OpState::Idle;
        assert!(op.begin());
        op.fail(ApiError::network("request timed out"));
        assert!(op.error().is_some());
        assert!(op.begin());
    }

    #[test]
    fn begin_allowed_again_after_success() {
        let mut op: OpState<u32> = OpState::Idle;
        assert!(op.begin());
        op.succeed(7);
        assert_eq!(op.value(), Some(&7));
        assert!(op.begin());
        assert!(op.value().is_none());
    }

    #[test]
    fn success_clears_previous_error() {
        let mut op: OpState<u32> = OpState::Idle;
        op.begin();
        op.fail(ApiError::server("boom"));
        op.begin();
        op.succeed(1);
        // 成功与失败互斥，不可能同时成立
        assert!(op.error().is_none());
        assert_eq!(op.value(), Some(&1));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut op: OpState<u32> = OpState::Idle;
        op.begin();
        op.succeed(3);
        op.reset();
        assert_eq!(op, OpState::Idle);
    }
}
