//! 会话存储模块
//!
//! 管理认证令牌与当前用户资料，与路由系统解耦：
//! 路由服务只通过注入的认证信号感知会话状态。
//!
//! 写入纪律是单写多读：只有登录/注册成功与注销会改写会话，
//! 其余界面一律只读。持久化使用固定键名，页面刷新后由
//! `init_session` 恢复。

use heartlens_shared::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER, Session, User};
use leptos::prelude::*;

use crate::web::LocalStorage;

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 当前会话（仅在认证成功后存在）
    pub session: Option<Session>,
    /// 是否仍在从存储恢复
    pub is_loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入；仅限本模块的生命周期钩子使用）
    set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState {
            session: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由守卫注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    /// 当前令牌的非响应式快照（网关客户端取用）
    pub fn token_untracked(&self) -> Option<String> {
        self.state
            .get_untracked()
            .token()
            .map(|token| token.to_string())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

// =========================================================
// 生命周期钩子
// =========================================================

/// 启动时从 LocalStorage 恢复会话
///
/// 令牌与用户资料任一缺失或损坏都视为未登录，并清掉残留键。
pub fn init_session(ctx: &SessionContext) {
    let restored = LocalStorage::get(STORAGE_KEY_TOKEN).and_then(|token| {
        let raw_user = LocalStorage::get(STORAGE_KEY_USER)?;
        let user: User = serde_json_wasm::from_str(&raw_user).ok()?;
        Some(Session { token, user })
    });

    if restored.is_none() {
        LocalStorage::delete(STORAGE_KEY_TOKEN);
        LocalStorage::delete(STORAGE_KEY_USER);
    }

    ctx.set_state.update(|state| {
        state.session = restored;
        state.is_loading = false;
    });
}

/// 登录/注册成功：持久化并更新内存状态
pub fn store_session(ctx: &SessionContext, session: Session) {
    LocalStorage::set(STORAGE_KEY_TOKEN, &session.token);
    if let Ok(raw_user) = serde_json_wasm::to_string(&session.user) {
        LocalStorage::set(STORAGE_KEY_USER, &raw_user);
    }

    ctx.set_state.update(|state| {
        state.session = Some(session);
        state.is_loading = false;
    });
}

/// 注销：清除持久化键与内存状态
///
/// 导航由路由服务的会话监听自动处理（无条件回到首页）。
pub fn clear_session(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_KEY_TOKEN);
    LocalStorage::delete(STORAGE_KEY_USER);

    ctx.set_state.update(|state| {
        state.session = None;
        state.is_loading = false;
    });
}
