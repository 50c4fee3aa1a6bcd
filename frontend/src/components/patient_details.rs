//! 病人登记界面（诊断流程第一步）
//!
//! 纯本地表单：校验通过后把草稿放进流程状态并前进到扫描上传，
//! 此步不发出任何网络请求。

use leptos::prelude::*;

use heartlens_shared::validate::{ClinicalBounds, FieldErrors, PatientFormInput, validate_patient};

use crate::components::icons::{ArrowRight, User};
use crate::components::navigation::Shell;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::workflow::use_workflow;

#[component]
pub fn PatientDetailsPage() -> impl IntoView {
    let router = use_router();
    let workflow = use_workflow();
    let bounds = use_context::<ClinicalBounds>().unwrap_or_default();

    let form = RwSignal::new(PatientFormInput::default());
    let errors = RwSignal::new(FieldErrors::new());

    // 编辑某字段立即清除该字段的错误，其余字段的错误保留
    let edit = move |field: &'static str, apply: fn(&mut PatientFormInput, String), value: String| {
        form.update(|f| apply(f, value));
        errors.update(|e| e.clear(field));
    };

    let on_submit = {
        let bounds = bounds.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let input = form.get_untracked();
            let found = validate_patient(&input, &bounds);
            if !found.is_empty() {
                errors.set(found);
                return;
            }

            if let Some(record) = input.to_record(&bounds) {
                // 新草稿作废上一轮的预测结果
                workflow.result.set(None);
                workflow.patient.set(Some(record));
                router.navigate(AppRoute::EyeScan);
            }
        }
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
                    <User attr:class="h-8 w-8 text-primary" />
                    <div>
                        <h1 class="text-3xl font-bold">"Patient Details"</h1>
                        <p class="text-base-content/70">"Step 1 of 3 — patient registration"</p>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body grid md:grid-cols-2 gap-4" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="patient-name">
                                <span class="label-text">"Full Name *"</span>
                            </label>
                            <input
                                id="patient-name"
                                type="text"
                                class="input input-bordered"
                                class:input-error=move || errors.with(|e| e.get("name").is_some())
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| edit(
                                    "name",
                                    |f, v| f.name = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("name")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="patient-age">
                                <span class="label-text">"Age *"</span>
                            </label>
                            <input
                                id="patient-age"
                                type="number"
                                class="input input-bordered"
                                class:input-error=move || errors.with(|e| e.get("age").is_some())
                                prop:value=move || form.with(|f| f.age.clone())
                                on:input=move |ev| edit(
                                    "age",
                                    |f, v| f.age = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("age")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="patient-email">
                                <span class="label-text">"Email *"</span>
                            </label>
                            <input
                                id="patient-email"
                                type="email"
                                class="input input-bordered"
                                class:input-error=move || errors.with(|e| e.get("email").is_some())
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| edit(
                                    "email",
                                    |f, v| f.email = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("email")}</label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="patient-contact">
                                <span class="label-text">"Contact Number *"</span>
                            </label>
                            <input
                                id="patient-contact"
                                type="tel"
                                class="input input-bordered"
                                class:input-error=move || {
                                    errors.with(|e| e.get("contactNumber").is_some())
                                }
                                prop:value=move || form.with(|f| f.contact_number.clone())
                                on:input=move |ev| edit(
                                    "contactNumber",
                                    |f, v| f.contact_number = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("contactNumber")}</label>
                        </div>

                        <div class="form-control md:col-span-2">
                            <label class="label" for="patient-address">
                                <span class="label-text">"Address *"</span>
                            </label>
                            <input
                                id="patient-address"
                                type="text"
                                class="input input-bordered"
                                class:input-error=move || {
                                    errors.with(|e| e.get("address").is_some())
                                }
                                prop:value=move || form.with(|f| f.address.clone())
                                on:input=move |ev| edit(
                                    "address",
                                    |f, v| f.address = v,
                                    event_target_value(&ev),
                                )
                            />
                            <label class="label">{field_error("address")}</label>
                        </div>

                        <div class="form-control md:col-span-2">
                            <label class="label" for="patient-history">
                                <span class="label-text">"Medical History"</span>
                            </label>
                            <textarea
                                id="patient-history"
                                class="textarea textarea-bordered"
                                prop:value=move || form.with(|f| f.medical_history.clone())
                                on:input=move |ev| edit(
                                    "medicalHistory",
                                    |f, v| f.medical_history = v,
                                    event_target_value(&ev),
                                )
                            ></textarea>
                        </div>

                        <div class="form-control md:col-span-2">
                            <label class="label" for="patient-medications">
                                <span class="label-text">"Current Medications"</span>
                            </label>
                            <textarea
                                id="patient-medications"
                                class="textarea textarea-bordered"
                                prop:value=move || form.with(|f| f.medications.clone())
                                on:input=move |ev| edit(
                                    "medications",
                                    |f, v| f.medications = v,
                                    event_target_value(&ev),
                                )
                            ></textarea>
                        </div>

                        <div class="md:col-span-2 flex justify-end mt-2">
                            <button class="btn btn-primary gap-2">
                                "Continue to Eye Scan" <ArrowRight attr:class="h-4 w-4" />
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Shell>
    }
}
