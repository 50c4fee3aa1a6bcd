//! 统计分析界面
//!
//! 聚合在客户端完成（见 shared 的 analytics 模块），数据源与
//! 历史页相同。

use leptos::prelude::*;
use leptos::task::spawn_local;

use heartlens_shared::{HealthRecord, analytics::AnalyticsSummary, op::OpState};

use crate::api::{DEFAULT_API_BASE, HeartLensApi};
use crate::components::icons::{AlertTriangle, BarChart3, RefreshCw};
use crate::components::navigation::Shell;
use crate::session::{clear_session, use_session};
use crate::web::route::AppRoute;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
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

    Effect::new(move |_| {
        load();
    });

    let summary = move || {
        op.get()
            .value()
            .map(|records| AnalyticsSummary::from_records(records))
            .unwrap_or_default()
    };
    let is_loading = move || op.get().is_pending();
    let error_msg = move || op.get().error().map(|e| e.message.clone());

    view! {
        <Shell active=AppRoute::Analytics>
            <div class="max-w-4xl mx-auto space-y-6">
                <div class="flex items-center justify-between">
                    <div class="flex items-center gap-3">
                        <BarChart3 attr:class="h-8 w-8 text-primary" />
                        <div>
                            <h1 class="text-3xl font-bold">"Analytics"</h1>
                            <p class="text-base-content/70">
                                "Risk distribution across your predictions"
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

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Total Predictions"</div>
                        <div class="stat-value text-primary">{move || summary().total}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"High Risk"</div>
                        <div class="stat-value text-error">{move || summary().high}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Medium Risk"</div>
                        <div class="stat-value text-warning">{move || summary().medium}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Low Risk"</div>
                        <div class="stat-value text-success">{move || summary().low}</div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Average Risk Score"</h3>
                        <div class="flex items-center gap-4 mt-2">
                            <progress
                                class="progress progress-primary w-full"
                                prop:value=move || summary().average_risk_score
                                max="100"
                            ></progress>
                            <span class="font-mono font-bold whitespace-nowrap">
                                {move || format!("{:.1}%", summary().average_risk_score)}
                            </span>
                        </div>
                        <Show when=move || !is_loading() && summary().total == 0 && error_msg().is_none()>
                            <p class="text-base-content/50 text-sm mt-2">
                                "No data yet. Statistics appear after your first prediction."
                            </p>
                        </Show>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
