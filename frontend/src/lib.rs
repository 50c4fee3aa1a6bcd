//! Heart Lens 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义与守卫判定（领域模型，纯函数）
//! - `web::router`: 路由服务（核心引擎）
//! - `session`: 会话状态管理
//! - `workflow`: 诊断流程状态（患者草稿 + 预测结果）
//! - `api`: 网关客户端
//! - `components`: UI 组件层

mod api;
mod components {
    pub mod analytics;
    pub mod dashboard;
    pub mod eye_scan;
    pub mod health_data;
    pub mod history;
    mod icons;
    pub mod landing;
    pub mod login;
    pub mod navigation;
    pub mod patient_details;
    pub mod register;
    pub mod results;
    pub mod settings;
}
mod session;
mod upload;
mod web;
mod workflow;

use leptos::prelude::*;

use heartlens_shared::validate::ClinicalBounds;

use crate::components::analytics::AnalyticsPage;
use crate::components::dashboard::DashboardPage;
use crate::components::eye_scan::EyeScanPage;
use crate::components::health_data::HealthDataPage;
use crate::components::history::HistoryPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::patient_details::PatientDetailsPage;
use crate::components::register::RegisterPage;
use crate::components::results::ResultsPage;
use crate::components::settings::SettingsPage;
use crate::session::{SessionContext, init_session};
use crate::web::route::AppRoute;
use crate::web::router::{GuardSignals, Router, RouterOutlet};
use crate::workflow::WorkflowState;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::PatientDetails => view! { <PatientDetailsPage /> }.into_any(),
        AppRoute::EyeScan => view! { <EyeScanPage /> }.into_any(),
        AppRoute::HealthData => view! { <HealthDataPage /> }.into_any(),
        AppRoute::Results => view! { <ResultsPage /> }.into_any(),
        AppRoute::History => view! { <HistoryPage /> }.into_any(),
        AppRoute::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文并从 LocalStorage 恢复
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);
    init_session(&session_ctx);

    // 2. 诊断流程状态与临床阈值配置
    let workflow = WorkflowState::new();
    provide_context(workflow);
    provide_context(ClinicalBounds::default());

    // 3. 守卫输入信号，注入路由服务（解耦！）
    let guards = GuardSignals {
        authenticated: session_ctx.is_authenticated_signal(),
        has_patient: workflow.has_patient_signal(),
        has_result: workflow.has_result_signal(),
    };

    view! {
        // 4. 路由器组件：注入守卫信号实现导航守卫
        <Router guards=guards>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
