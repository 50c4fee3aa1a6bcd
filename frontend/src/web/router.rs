//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 导航流程为 "请求 -> 守卫判定 -> History 写入 -> 状态更新"；
//! 守卫判定本身在 route.rs 中，保持纯函数。
//!
//! 界面之间不互相引用：组件只调用 `navigate`，由路由服务统一分发。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardState, resolve};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于守卫重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 守卫所需的响应式输入：认证状态与界面侧数据
///
/// 由外部注入信号，路由服务不持有会话或草稿本身。
#[derive(Clone, Copy)]
pub struct GuardSignals {
    pub authenticated: Signal<bool>,
    pub has_patient: Signal<bool>,
    pub has_result: Signal<bool>,
}

impl GuardSignals {
    /// 非响应式地取一份守卫快照
    fn snapshot(&self) -> GuardState {
        GuardState {
            authenticated: self.authenticated.get_untracked(),
            has_patient: self.has_patient.get_untracked(),
            has_result: self.has_result.get_untracked(),
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；转移只由显式用户动作或
/// 异步调用的完成触发，绝不由定时器触发。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    guards: GuardSignals,
}

impl RouterService {
    fn new(guards: GuardSignals) -> Self {
        // 初始路由从 URL 解析后立即过一遍守卫：
        // 恢复出有效会话时 "/" 直接解析为工作台
        let requested = AppRoute::from_path(&current_path());
        let initial = resolve(requested, guards.snapshot());
        if initial != requested {
            replace_history_state(initial.to_path());
        }
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            guards,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, target: AppRoute) {
        let landed = resolve(target, self.guards.snapshot());
        if landed != target {
            web_sys::console::log_1(
                &format!("[Router] Guard redirect: {} -> {}", target, landed).into(),
            );
        }
        push_history_state(landed.to_path());
        self.set_route.set(landed);
    }

    /// 初始化浏览器后退/前进按钮监听
    ///
    /// popstate 走与显式导航相同的守卫判定：后退重入 /results
    /// 之类的直接状态重入会被兜底，而不是带着空数据渲染。
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let guards = self.guards;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = AppRoute::from_path(&current_path());
            let landed = resolve(requested, guards.snapshot());
            if landed != requested {
                replace_history_state(landed.to_path());
            }
            set_route.set(landed);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时的自动重定向
    ///
    /// 登录成功：认证入口页自动前进到工作台。
    /// 注销：无论当前停在哪个受保护页面，无条件回到首页。
    fn setup_session_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let guards = self.guards;

        Effect::new(move |_| {
            let is_auth = guards.authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let redirect = AppRoute::auth_success_redirect();
                    push_history_state(redirect.to_path());
                    set_route.set(redirect);
                    web_sys::console::log_1(
                        &"[Router] Session established, redirecting to dashboard.".into(),
                    );
                }
            } else if route.requires_auth() {
                let redirect = AppRoute::after_logout();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(
                    &"[Router] Session cleared, redirecting to landing.".into(),
                );
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(guards: GuardSignals) -> RouterService {
    let router = RouterService::new(guards);

    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 守卫输入信号
    guards: GuardSignals,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(guards);

    children()
}

/// 路由出口组件：根据当前路由状态渲染对应的界面
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
