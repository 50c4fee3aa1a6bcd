//! 侧边导航栏
//!
//! 受保护界面共用的外壳：左侧导航 + 右侧内容区。
//! 导航项只调用路由服务的 `navigate`，界面之间不互相引用。

use leptos::prelude::*;

use crate::components::icons::*;
use crate::session::{clear_session, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// 导航项清单（顺序即显示顺序）
const NAV_ITEMS: [(AppRoute, &str); 5] = [
    (AppRoute::Dashboard, "Dashboard"),
    (AppRoute::PatientDetails, "New Prediction"),
    (AppRoute::History, "History"),
    (AppRoute::Analytics, "Analytics"),
    (AppRoute::Settings, "Settings"),
];

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard => view! { <LayoutDashboard attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::PatientDetails => view! { <User attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::History => view! { <Clock attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Analytics => view! { <BarChart3 attr:class="h-5 w-5" /> }.into_any(),
        AppRoute::Settings => view! { <Settings attr:class="h-5 w-5" /> }.into_any(),
        _ => view! { <Heart attr:class="h-5 w-5" /> }.into_any(),
    }
}

/// 受保护界面的外壳组件
#[component]
pub fn Shell(
    /// 当前激活的导航项
    active: AppRoute,
    /// 内容区
    children: Children,
) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let user_name = move || {
        session
            .state
            .get()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to logout?").ok())
            .unwrap_or(false);
        if confirmed {
            // 会话清除后由路由服务的会话监听自动回到首页
            clear_session(&session);
        }
    };

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-64 bg-base-100 shadow-xl flex flex-col">
                <div class="flex items-center gap-2 p-6">
                    <Heart attr:class="h-7 w-7 text-error" />
                    <span class="text-xl font-bold">"Heart Lens"</span>
                </div>

                <ul class="menu px-4 gap-1 flex-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(route, label)| {
                            let is_active = active == route;
                            view! {
                                <li>
                                    <a
                                        class:active=is_active
                                        on:click=move |_| router.navigate(route)
                                    >
                                        {nav_icon(route)}
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="p-4 border-t border-base-300">
                    <div class="flex items-center gap-2 mb-3 px-2">
                        <User attr:class="h-5 w-5 opacity-60" />
                        <span class="text-sm font-medium truncate">{user_name}</span>
                    </div>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm w-full gap-2">
                        <LogOut attr:class="h-4 w-4" /> "Logout"
                    </button>
                </div>
            </aside>

            <main class="flex-1 p-4 md:p-8 overflow-x-auto">{children()}</main>
        </div>
    }
}
