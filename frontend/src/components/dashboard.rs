//! 工作台界面（登录后的默认落点）

use leptos::prelude::*;

use crate::components::icons::{Activity, ArrowRight, BarChart3, Clock, Eye, User};
use crate::components::navigation::Shell;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let router = use_router();

    let user_name = move || {
        session
            .state
            .get()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "there".to_string())
    };

    view! {
        <Shell active=AppRoute::Dashboard>
            <div class="max-w-5xl mx-auto space-y-8">
                <div>
                    <h1 class="text-3xl font-bold">
                        "Welcome, " {user_name}
                    </h1>
                    <p class="text-base-content/70 mt-1">
                        "Start a new prediction or review previous results."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-6">
                    <div
                        class="card bg-primary text-primary-content shadow-xl cursor-pointer hover:shadow-2xl transition-shadow"
                        on:click=move |_| router.navigate(AppRoute::PatientDetails)
                    >
                        <div class="card-body">
                            <Eye attr:class="h-8 w-8" />
                            <h2 class="card-title">"New Prediction"</h2>
                            <p>"Enter patient details, then upload a retinal scan or health data."</p>
                            <div class="card-actions justify-end">
                                <ArrowRight attr:class="h-5 w-5" />
                            </div>
                        </div>
                    </div>

                    <div
                        class="card bg-base-100 shadow-xl cursor-pointer hover:shadow-2xl transition-shadow"
                        on:click=move |_| router.navigate(AppRoute::History)
                    >
                        <div class="card-body">
                            <Clock attr:class="h-8 w-8 text-primary" />
                            <h2 class="card-title">"History"</h2>
                            <p class="text-base-content/70">
                                "Browse previous predictions and their risk levels."
                            </p>
                        </div>
                    </div>

                    <div
                        class="card bg-base-100 shadow-xl cursor-pointer hover:shadow-2xl transition-shadow"
                        on:click=move |_| router.navigate(AppRoute::Analytics)
                    >
                        <div class="card-body">
                            <BarChart3 attr:class="h-8 w-8 text-primary" />
                            <h2 class="card-title">"Analytics"</h2>
                            <p class="text-base-content/70">
                                "Risk distribution and averages across your records."
                            </p>
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title mb-4">"How It Works"</h2>
                        <ul class="steps steps-vertical md:steps-horizontal w-full">
                            <li class="step step-primary">
                                <div class="flex items-center gap-2">
                                    <User attr:class="h-4 w-4" /> "Patient details"
                                </div>
                            </li>
                            <li class="step step-primary">
                                <div class="flex items-center gap-2">
                                    <Eye attr:class="h-4 w-4" /> "Retinal scan or health data"
                                </div>
                            </li>
                            <li class="step step-primary">
                                <div class="flex items-center gap-2">
                                    <Activity attr:class="h-4 w-4" /> "Risk analysis"
                                </div>
                            </li>
                            <li class="step">"Report & recommendations"</li>
                        </ul>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
