//! 临床指标录入界面（眼底扫描的替代输入路径）

use leptos::prelude::*;
use leptos::task::spawn_local;

use heartlens_shared::{
    PredictionResult,
    op::OpState,
    validate::{ClinicalBounds, FieldErrors, HealthFormInput, validate_health},
};

use crate::api::{DEFAULT_API_BASE, HeartLensApi};
use crate::components::icons::{Activity, AlertTriangle, Eye};
use crate::components::navigation::Shell;
use crate::session::{clear_session, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::workflow::use_workflow;

#[component]
pub fn HealthDataPage() -> impl IntoView {
    let router = use_router();
    let session = use_session();
    let workflow = use_workflow();
    let bounds = use_context::<ClinicalBounds>().unwrap_or_default();

    let form = RwSignal::new(HealthFormInput::default());
    let errors = RwSignal::new(FieldErrors::new());
    let (op, set_op) = signal(OpState::<()>::Idle);

    let edit = move |field: &'static str, apply: fn(&mut HealthFormInput, String), value: String| {
        form.update(|f| apply(f, value));
        errors.update(|e| e.clear(field));
    };

    let on_submit = {
        let bounds = bounds.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let input = form.get_untracked();
            let found = validate_health(&input, &bounds);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            let Some(metrics) = input.to_metrics(&bounds) else {
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
                match api.predict_tabular(&metrics).await {
                    Ok(res) => {
                        set_op.update(|op| op.succeed(()));
                        workflow
                            .result
                            .set(Some(PredictionResult::from_tabular(
                                res.prediction,
                                res.record_id,
                            )));
                        router.navigate(AppRoute::Results);
                    }
                    Err(err) => {
                        if err.requires_reauth() {
                            clear_session(&session);
                            return;
                        }
                        set_op.update(|op| op.fail(err));
                    }
                }
            });
        }
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

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.get(field).map(|msg| {
                    view! { <span class="label-text-alt text-error">{msg.to_string()}</span> }
                })
            })
        }
    };

    view! {
        <Shell active=AppRoute::PatientDetails>
            <div class="max-w-3xl mx-auto space-y-6">
                <div class="flex items-center gap-3">
                    <Activity attr:class="h-8 w-8 text-primary" />
                    <div>
                        <h1 class="text-3xl font-bold">"Health Data"</h1>
                        <p class="text-base-content/70">
                            "Step 2 of 3 — enter clinical metrics"
                        </p>
                    </div>
                </div>

                {patient_card}

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body grid md:grid-cols-2 gap-4" on:submit=on_submit>
                        <Show when=move || op.get().error().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2 md:col-span-2">
                                <AlertTriangle attr:class="h-5 w-5" />
                                <span>
                                    {move || {
                                        op.get().error().map(|e| e.message.clone()).unwrap_or_default()
                                    }}
                                </span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="hd-age">
                                <span class="label-text">"Age (years) *"</span>
                            </label>
                            <input
                                id="hd-age"
                                type="number"
                                class="input input-bordered"
                                class:input-error=move || errors.with(|e| e.get("age").is_some())
                                prop:value=move || form.with(|f| f.age.clone())
                                on:input=move |ev| edit("age", |f, v| f.age = v, event_target_value(&ev))
                            />
                            <label class="label">{field_error("age")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-sex">
                                <span class="label-text">"Sex *"</span>
                            </label>
                            <select
                                id="hd-sex"
                                class="select select-bordered"
                                class:select-error=move || errors.with(|e| e.get("sex").is_some())
                                prop:value=move || form.with(|f| f.sex.clone())
                                on:change=move |ev| edit("sex", |f, v| f.sex = v, event_target_value(&ev))
                            >
                                <option value="">"Select..."</option>
                                <option value="1">"Male"</option>
                                <option value="0">"Female"</option>
                            </select>
                            <label class="label">{field_error("sex")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-cp">
                                <span class="label-text">"Chest Pain Type *"</span>
                            </label>
                            <select
                                id="hd-cp"
                                class="select select-bordered"
                                class:select-error=move || errors.with(|e| e.get("cp").is_some())
                                prop:value=move || form.with(|f| f.cp.clone())
                                on:change=move |ev| edit("cp", |f, v| f.cp = v, event_target_value(&ev))
                            >
                                <option value="">"Select..."</option>
                                <option value="0">"Typical angina"</option>
                                <option value="1">"Atypical angina"</option>
                                <option value="2">"Non-anginal pain"</option>
                                <option value="3">"Asymptomatic"</option>
                            </select>
                            <label class="label">{field_error("cp")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-trestbps">
                                <span class="label-text">"Resting Blood Pressure (mm Hg) *"</span>
                            </label>
                            <input
                                id="hd-trestbps"
                                type="number"
                                class="input input-bordered"
                                class:input-error=move || {
                                    errors.with(|e| e.get("trestbps").is_some())
                                }
                                prop:value=move || form.with(|f| f.trestbps.clone())
                                on:input=move |ev| edit(
                                    "trestbps",
                                    |f, v| f.trestbps = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("trestbps")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-chol">
                                <span class="label-text">"Cholesterol (mg/dl) *"</span>
                            </label>
                            <input
                                id="hd-chol"
                                type="number"
                                class="input input-bordered"
                                class:input-error=move || errors.with(|e| e.get("chol").is_some())
                                prop:value=move || form.with(|f| f.chol.clone())
                                on:input=move |ev| edit(
                                    "chol",
                                    |f, v| f.chol = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("chol")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-fbs">
                                <span class="label-text">"Fasting Blood Sugar > 120 mg/dl *"</span>
                            </label>
                            <select
                                id="hd-fbs"
                                class="select select-bordered"
                                class:select-error=move || errors.with(|e| e.get("fbs").is_some())
                                prop:value=move || form.with(|f| f.fbs.clone())
                                on:change=move |ev| edit("fbs", |f, v| f.fbs = v, event_target_value(&ev))
                            >
                                <option value="">"Select..."</option>
                                <option value="1">"Yes"</option>
                                <option value="0">"No"</option>
                            </select>
                            <label class="label">{field_error("fbs")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-thalach">
                                <span class="label-text">"Max Heart Rate (bpm) *"</span>
                            </label>
                            <input
                                id="hd-thalach"
                                type="number"
                                class="input input-bordered"
                                class:input-error=move || {
                                    errors.with(|e| e.get("thalach").is_some())
                                }
                                prop:value=move || form.with(|f| f.thalach.clone())
                                on:input=move |ev| edit(
                                    "thalach",
                                    |f, v| f.thalach = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("thalach")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-exang">
                                <span class="label-text">"Exercise Induced Angina *"</span>
                            </label>
                            <select
                                id="hd-exang"
                                class="select select-bordered"
                                class:select-error=move || {
                                    errors.with(|e| e.get("exang").is_some())
                                }
                                prop:value=move || form.with(|f| f.exang.clone())
                                on:change=move |ev| edit(
                                    "exang",
                                    |f, v| f.exang = v,
                                    event_target_value(&ev),
                                )
                            >
                                <option value="">"Select..."</option>
                                <option value="1">"Yes"</option>
                                <option value="0">"No"</option>
                            </select>
                            <label class="label">{field_error("exang")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="hd-oldpeak">
                                <span class="label-text">"ST Depression (oldpeak) *"</span>
                            </label>
                            <input
                                id="hd-oldpeak"
                                type="number"
                                step="0.1"
                                class="input input-bordered"
                                class:input-error=move || {
                                    errors.with(|e| e.get("oldpeak").is_some())
                                }
                                prop:value=move || form.with(|f| f.oldpeak.clone())
                                on:input=move |ev| edit(
                                    "oldpeak",
                                    |f, v| f.oldpeak = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("oldpeak")}</label>
                        </div>

                        <div class="md:col-span-2 flex items-center justify-between mt-2">
                            <button
                                type="button"
                                class="btn btn-ghost gap-2"
                                on:click=move |_| router.navigate(AppRoute::EyeScan)
                            >
                                <Eye attr:class="h-4 w-4" /> "Use eye scan instead"
                            </button>
                            <button
                                class="btn btn-primary gap-2"
                                disabled=move || op.get().is_pending()
                            >
                                {move || {
                                    if op.get().is_pending() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Analyzing..."
                                        }
                                            .into_any()
                                    } else {
                                        "Analyze Health Data".into_any()
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Shell>
    }
}
