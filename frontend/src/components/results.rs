//! 分析结果界面（诊断流程第三步）

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use heartlens_shared::{PatientRecord, PredictionResult, RiskLevel, report::report_text};

use crate::components::icons::{AlertTriangle, CheckCircle2, Download, Heart, RefreshCw};
use crate::components::navigation::Shell;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::workflow::use_workflow;

/// 触发纯文本报告下载
fn download_report(patient: &PatientRecord, result: &PredictionResult) {
    let date = js_sys::Date::new_0().to_locale_date_string("en-US", &JsValue::UNDEFINED);
    let content = report_text(patient, result, &String::from(date));

    let parts = js_sys::Array::of1(&JsValue::from_str(&content));
    let options = BlobPropertyBag::new();
    options.set_type("text/plain");

    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(&format!("heart-risk-report-{}.txt", patient.name));
                anchor.click();
            }
        }
    }
    let _ = Url::revoke_object_url(&url);
}

fn risk_badge_class(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "badge badge-success badge-lg",
        RiskLevel::Medium => "badge badge-warning badge-lg",
        RiskLevel::High => "badge badge-error badge-lg",
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let router = use_router();
    let workflow = use_workflow();

    let on_new_scan = move |_| {
        workflow.reset();
        router.navigate(AppRoute::PatientDetails);
    };

    let on_download = move |_| {
        let patient = workflow.patient.get_untracked();
        let result = workflow.result.get_untracked();
        if let (Some(patient), Some(result)) = (patient, result) {
            download_report(&patient, &result);
        }
    };

    // 守卫保证进入此页时结果存在；防御性地仍然处理 None
    let content = move || {
        workflow.result.get().map(|result| {
            let level = result.risk_level;
            view! {
                <div class="space-y-6">
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body items-center text-center">
                            {match level {
                                RiskLevel::High => view! {
                                    <AlertTriangle attr:class="h-14 w-14 text-error" />
                                }
                                    .into_any(),
                                RiskLevel::Medium => view! {
                                    <AlertTriangle attr:class="h-14 w-14 text-warning" />
                                }
                                    .into_any(),
                                RiskLevel::Low => view! {
                                    <CheckCircle2 attr:class="h-14 w-14 text-success" />
                                }
                                    .into_any(),
                            }}
                            <h2 class="card-title text-2xl mt-2">
                                {level.label()} " Risk"
                            </h2>
                            <span class=risk_badge_class(level)>
                                {format!("Risk Score: {:.1}%", result.risk_score)}
                            </span>
                            <p class="text-base-content/70 mt-2">{result.message.clone()}</p>
                            <p class="text-sm text-base-content/50">
                                {format!("Model confidence: {:.1}%", result.confidence)}
                            </p>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"Recommendations"</h3>
                            <ul class="space-y-2 mt-2">
                                {result
                                    .recommendations
                                    .iter()
                                    .map(|r| {
                                        view! {
                                            <li class="flex items-start gap-2">
                                                <CheckCircle2 attr:class="h-5 w-5 text-primary shrink-0 mt-0.5" />
                                                <span>{r.clone()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>

                    {move || {
                        workflow.patient.get().map(|p| {
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body">
                                        <h3 class="card-title">"Patient Information"</h3>
                                        <div class="grid md:grid-cols-2 gap-x-8 gap-y-1 text-sm mt-2">
                                            <span>
                                                <span class="font-semibold">"Name: "</span>
                                                {p.name.clone()}
                                            </span>
                                            <span>
                                                <span class="font-semibold">"Age: "</span>
                                                {p.age}
                                            </span>
                                            <span>
                                                <span class="font-semibold">"Email: "</span>
                                                {p.email.clone()}
                                            </span>
                                            <span>
                                                <span class="font-semibold">"Contact: "</span>
                                                {p.contact_number.clone()}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }}

                    <div class="flex flex-wrap gap-3 justify-end">
                        <button class="btn btn-outline gap-2" on:click=on_download>
                            <Download attr:class="h-4 w-4" /> "Download Report"
                        </button>
                        <button class="btn btn-primary gap-2" on:click=on_new_scan>
                            <RefreshCw attr:class="h-4 w-4" /> "New Prediction"
                        </button>
                    </div>
                </div>
            }
        })
    };

    view! {
        <Shell active=AppRoute::PatientDetails>
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center gap-3">
                    <Heart attr:class="h-8 w-8 text-error" />
                    <div>
                        <h1 class="text-3xl font-bold">"Analysis Results"</h1>
                        <p class="text-base-content/70">"Step 3 of 3 — risk assessment"</p>
                    </div>
                </div>
                {content}
            </div>
        </Shell>
    }
}
