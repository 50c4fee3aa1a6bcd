//! 眼底扫描上传界面（诊断流程第二步）

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use heartlens_shared::{PredictionResult, op::OpState, upload::ScanImagePolicy};

use crate::api::{DEFAULT_API_BASE, HeartLensApi};
use crate::components::icons::{Activity, AlertTriangle, Eye, Upload};
use crate::components::navigation::Shell;
use crate::session::{clear_session, use_session};
use crate::upload::ScanUploadState;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::workflow::use_workflow;

#[component]
pub fn EyeScanPage() -> impl IntoView {
    let router = use_router();
    let session = use_session();
    let workflow = use_workflow();

    let upload = ScanUploadState::new();
    let policy = StoredValue::new(ScanImagePolicy::default());
    let (op, set_op) = signal(OpState::<()>::Idle);
    let (drag_over, set_drag_over) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // 文件选择器与拖放走同一个接受入口
    let on_file_input = move |ev: leptos::web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|list| list.get(0)) {
            policy.with_value(|p| upload.accept(file, p));
        }
        // 允许重新选择同一个文件
        input.set_value("");
    };

    let on_drop = move |ev: leptos::web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|list| list.get(0))
        {
            policy.with_value(|p| upload.accept(file, p));
        }
    };

    let on_analyze = move |_| {
        let Some(file) = upload.file.get_untracked() else {
            upload
                .error
                .set(Some("Please select an image first".to_string()));
            return;
        };

        let mut started = false;
        set_op.update(|op| started = op.begin());
        if !started {
            return;
        }

        let token = session.token_untracked();
        spawn_local(async move {
            let api = HeartLensApi::new(DEFAULT_API_BASE.to_string(), token);
            match api.predict_image(&file).await {
                Ok(res) => {
                    set_op.update(|op| op.succeed(()));
                    workflow
                        .result
                        .set(Some(PredictionResult::from_eye_scan(
                            res.prediction,
                            res.record_id,
                        )));
                    router.navigate(AppRoute::Results);
                }
                Err(err) => {
                    // 会话失效时强制重新登录
                    if err.requires_reauth() {
                        clear_session(&session);
                        return;
                    }
                    set_op.update(|op| op.fail(err));
                }
            }
        });
    };

    let patient_card = move || {
        workflow.patient.get().map(|p| {
            view! {
                <div class="card bg-base-100 shadow-md">
                    <div class="card-body py-4">
                        <div class="flex flex-wrap gap-x-8 gap-y-1 text-sm">
                            <span>
                                <span class="font-semibold">"Patient: "</span>
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
    };

    view! {
        <Shell active=AppRoute::PatientDetails>
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center gap-3">
                    <Eye attr:class="h-8 w-8 text-primary" />
                    <div>
                        <h1 class="text-3xl font-bold">"Retinal Scan"</h1>
                        <p class="text-base-content/70">"Step 2 of 3 — upload a fundus image"</p>
                    </div>
                </div>

                {patient_card}

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <Show when=move || upload.error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertTriangle attr:class="h-5 w-5" />
                                <span>{move || upload.error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || op.get().error().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <AlertTriangle attr:class="h-5 w-5" />
                                <span>
                                    {move || {
                                        op.get().error().map(|e| e.message.clone()).unwrap_or_default()
                                    }}
                                </span>
                            </div>
                        </Show>

                        <div
                            class="border-2 border-dashed rounded-box p-10 text-center cursor-pointer transition-colors"
                            class=("border-primary", drag_over)
                            class=("bg-primary/5", drag_over)
                            class=("border-base-300", move || !drag_over.get())
                            on:click=move |_| {
                                if let Some(input) = input_ref.get() {
                                    input.click();
                                }
                            }
                            on:dragover=move |ev: leptos::web_sys::DragEvent| {
                                ev.prevent_default();
                                set_drag_over.set(true);
                            }
                            on:dragleave=move |_| set_drag_over.set(false)
                            on:drop=on_drop
                        >
                            {move || match upload.preview.get() {
                                Some(data_url) => view! {
                                    <img
                                        src=data_url
                                        alt="Retinal scan preview"
                                        class="max-h-64 mx-auto rounded-box"
                                    />
                                }
                                    .into_any(),
                                None => view! {
                                    <div class="flex flex-col items-center gap-3 text-base-content/60">
                                        <Upload attr:class="h-12 w-12" />
                                        <p class="font-medium">
                                            "Drag & drop a retinal image, or click to browse"
                                        </p>
                                        <p class="text-sm">"JPG, PNG or GIF, up to 10MB"</p>
                                    </div>
                                }
                                    .into_any(),
                            }}
                        </div>
                        <input
                            node_ref=input_ref
                            type="file"
                            accept="image/jpeg,image/png,image/gif"
                            class="hidden"
                            on:change=on_file_input
                        />

                        <div class="flex items-center justify-between mt-4">
                            <button
                                class="btn btn-ghost gap-2"
                                on:click=move |_| router.navigate(AppRoute::HealthData)
                            >
                                <Activity attr:class="h-4 w-4" /> "Use health data instead"
                            </button>
                            <button
                                class="btn btn-primary gap-2"
                                disabled=move || {
                                    op.get().is_pending() || upload.file.get().is_none()
                                }
                                on:click=on_analyze
                            >
                                {move || {
                                    if op.get().is_pending() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Analyzing..."
                                        }
                                            .into_any()
                                    } else {
                                        "Analyze Scan".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Shell>
    }
}
