//! 历史记录界面
//!
//! 每次进入都重新拉取；失败时给出与错误类别匹配的提示与重试入口，
//! 会话失效则直接清除会话（由路由服务送回登录）。

use leptos::prelude::*;
use leptos::task::spawn_local;

use heartlens_shared::{HealthRecord, RiskLevel, op::OpState};

use crate::api::{DEFAULT_API_BASE, HeartLensApi};
use crate::components::icons::{AlertTriangle, Clock, RefreshCw};
use crate::components::navigation::Shell;
use crate::session::{clear_session, use_session};
use crate::web::route::AppRoute;

fn risk_badge(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "badge badge-success",
        RiskLevel::Medium => "badge badge-warning",
        RiskLevel::High => "badge badge-error",
    }
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = use_session();

    let (op, set_op) = signal(OpState::<Vec<HealthRecord>>::Idle);

    let load = move || {
        let mut started = false;
        set_op.update(|op| started = op.begin());
        if !started {
            return;
        }

        let token = session.token_untracked();
        spawn_local(async move {
            let api = HeartLensApi::new(DEFAULT_API_BASE.to_string(), token);
            match api.fetch_records().await {
                Ok(records) => set_op.update(|op| op.succeed(records)),
                Err(err) => {
                    if err.requires_reauth() {
                        clear_session(&session);
                        return;
                    }
                    set_op.update(|op| op.fail(err));
                }
            }
        });
    };

    // 进入界面即加载
    Effect::new(move |_| {
        load();
    });

    let records = move || op.get().value().cloned().unwrap_or_default();
    let is_loading = move || op.get().is_pending();
    let error_msg = move || op.get().error().map(|e| e.message.clone());

    view! {
        <Shell active=AppRoute::History>
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <Clock attr:class="h-8 w-8 text-primary" />
                        <div>
                            <h1 class="text-3xl font-bold">"Prediction History"</h1>
                            <p class="text-base-content/70">
                                "Previous risk assessments for your account"
                            </p>
                        </div>
                    </div>
                    <button
                        class="btn btn-ghost btn-circle"
                        disabled=is_loading
                        on:click=move |_| load()
                    >
                        <RefreshCw attr:class=move || {
                            if is_loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                        } />
                    </button>
                </div>

                <Show when=move || error_msg().is_some()>
                    <div role="alert" class="alert alert-error">
                        <AlertTriangle attr:class="h-5 w-5" />
                        <span>{move || error_msg().unwrap_or_default()}</span>
                        <button class="btn btn-sm" on:click=move |_| load()>
                            "Retry"
                        </button>
                    </div>
                </Show>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Date"</th>
                                        <th>"Risk Score"</th>
                                        <th>"Risk Level"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || is_loading() && records().is_empty()>
                                        <tr>
                                            <td colspan="3" class="text-center py-8 text-base-content/50">
                                                <span class="loading loading-spinner loading-md"></span>
                                                " Loading records..."
                                            </td>
                                        </tr>
                                    </Show>
                                    <Show when=move || {
                                        !is_loading() && records().is_empty() && error_msg().is_none()
                                    }>
                                        <tr>
                                            <td colspan="3" class="text-center py-8 text-base-content/50">
                                                "No predictions yet. Run your first analysis to see it here."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=records
                                        key=|record| record.id.clone()
                                        children=move |record| {
                                            view! {
                                                <tr>
                                                    <td>
                                                        {record
                                                            .date_submitted
                                                            .format("%b %d, %Y %H:%M")
                                                            .to_string()}
                                                    </td>
                                                    <td class="font-mono">
                                                        {format!("{:.1}%", record.risk_score)}
                                                    </td>
                                                    <td>
                                                        <span class=risk_badge(record.prediction_result)>
                                                            {record.prediction_result.label()}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
