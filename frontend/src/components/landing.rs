//! 首页（未登录入口）

use leptos::prelude::*;

use crate::components::icons::{Activity, ArrowRight, Eye, Heart};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn LandingPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm px-4 md:px-8">
                <div class="flex-1 gap-2">
                    <Heart attr:class="h-7 w-7 text-error" />
                    <span class="text-xl font-bold">"Heart Lens"</span>
                </div>
                <div class="flex-none gap-2">
                    <button
                        on:click=move |_| router.navigate(AppRoute::Login)
                        class="btn btn-ghost"
                    >
                        "Login"
                    </button>
                    <button
                        on:click=move |_| router.navigate(AppRoute::Register)
                        class="btn btn-primary"
                    >
                        "Get Started"
                    </button>
                </div>
            </div>

            <div class="hero py-20">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-5xl font-bold">
                            "Predict Heart Attack Risk from a Retinal Scan"
                        </h1>
                        <p class="py-6 text-base-content/70 text-lg">
                            "Heart Lens analyzes retinal images and clinical health data to "
                            "estimate cardiovascular risk in seconds. Early detection for "
                            "healthcare professionals."
                        </p>
                        <button
                            on:click=move |_| router.navigate(AppRoute::Login)
                            class="btn btn-primary btn-lg gap-2"
                        >
                            "Start a Prediction" <ArrowRight attr:class="h-5 w-5" />
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto grid md:grid-cols-3 gap-6 px-4 pb-20">
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body items-center text-center">
                        <Eye attr:class="h-10 w-10 text-primary" />
                        <h3 class="card-title">"Retinal Scan Analysis"</h3>
                        <p class="text-base-content/70">
                            "Upload a fundus image and get an AI-assisted risk estimate."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body items-center text-center">
                        <Activity attr:class="h-10 w-10 text-primary" />
                        <h3 class="card-title">"Clinical Health Data"</h3>
                        <p class="text-base-content/70">
                            "Enter standard clinical metrics as an alternative input path."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body items-center text-center">
                        <Heart attr:class="h-10 w-10 text-error" />
                        <h3 class="card-title">"Actionable Reports"</h3>
                        <p class="text-base-content/70">
                            "Risk level, confidence and recommendations in a downloadable report."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
