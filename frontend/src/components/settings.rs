//! 设置界面
//!
//! 账号资料为只读展示；临床阈值来自应用级配置，
//! 列出当前生效的校验边界。

use leptos::prelude::*;

use heartlens_shared::validate::ClinicalBounds;

use crate::components::icons::{Settings, User};
use crate::components::navigation::Shell;
use crate::session::use_session;
use crate::web::route::AppRoute;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let bounds = use_context::<ClinicalBounds>().unwrap_or_default();

    let user_name = move || {
        session
            .state
            .get()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };
    let user_email = move || {
        session
            .state
            .get()
            .user()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    };

    let bound_rows = vec![
        (
            "Age (years)",
            format!("{} – {}", bounds.age.0, bounds.age.1),
        ),
        (
            "Resting blood pressure (mm Hg)",
            format!("{} – {}", bounds.trestbps.0, bounds.trestbps.1),
        ),
        (
            "Cholesterol (mg/dl)",
            format!("{} – {}", bounds.chol.0, bounds.chol.1),
        ),
        (
            "Max heart rate (bpm)",
            format!("{} – {}", bounds.thalach.0, bounds.thalach.1),
        ),
        (
            "ST depression (oldpeak)",
            format!(
                "{} – {} in steps of {}",
                bounds.oldpeak.0, bounds.oldpeak.1, bounds.oldpeak_step
            ),
        ),
    ];

    view! {
        <Shell active=AppRoute::Settings>
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center gap-3">
                    <Settings attr:class="h-8 w-8 text-primary" />
                    <div>
                        <h1 class="text-3xl font-bold">"Settings"</h1>
                        <p class="text-base-content/70">"Account and validation configuration"</p>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title gap-2">
                            <User attr:class="h-5 w-5" /> "Profile"
                        </h3>
                        <div class="grid md:grid-cols-2 gap-4 mt-2">
                            <div>
                                <div class="text-sm text-base-content/60">"Name"</div>
                                <div class="font-medium">{user_name}</div>
                            </div>
                            <div>
                                <div class="text-sm text-base-content/60">"Email"</div>
                                <div class="font-medium">{user_email}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Clinical Validation Bounds"</h3>
                        <p class="text-sm text-base-content/60">
                            "Form inputs outside these ranges are rejected before submission."
                        </p>
                        <div class="overflow-x-auto">
                            <table class="table w-full mt-2">
                                <thead>
                                    <tr>
                                        <th>"Metric"</th>
                                        <th>"Accepted range"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {bound_rows
                                        .into_iter()
                                        .map(|(metric, range)| {
                                            view! {
                                                <tr>
                                                    <td>{metric}</td>
                                                    <td class="font-mono">{range}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
