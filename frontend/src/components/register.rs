//! 注册界面

use leptos::prelude::*;
use leptos::task::spawn_local;

use heartlens_shared::op::OpState;

use crate::api::{DEFAULT_API_BASE, HeartLensApi};
use crate::components::icons::Heart;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (op, set_op) = signal(OpState::<()>::Idle);
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if name.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty()
        {
            set_local_error.set(Some("Please fill in all fields".to_string()));
            return;
        }
        // 两次密码一致性只在本地校验，不发往后端
        if password.get() != confirm.get() {
            set_local_error.set(Some("Passwords do not match".to_string()));
            return;
        }
        set_local_error.set(None);

        let mut started = false;
        set_op.update(|op| started = op.begin());
        if !started {
            return;
        }

        spawn_local(async move {
            let api = HeartLensApi::new(DEFAULT_API_BASE.to_string(), None);
            match api
                .register(
                    name.get_untracked().trim(),
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                )
                .await
            {
                Ok(_) => {
                    set_op.update(|op| op.succeed(()));
                    // 注册成功后回到登录界面完成首次登录
                    router.navigate(AppRoute::Login);
                }
                Err(err) => set_op.update(|op| op.fail(err)),
            }
        });
    };

    let error_msg = move || {
        local_error
            .get()
            .or_else(|| op.get().error().map(|e| e.message.clone()))
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-error/10 rounded-2xl text-error">
                            <Heart attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Create Account"</h1>
                        <p class="text-base-content/70">"Join Heart Lens to start predicting"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">"Full Name"</span>
                            </label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Dr. Jane Doe"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="doctor@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">"Confirm Password"</span>
                            </label>
                            <input
                                id="confirm"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || op.get().is_pending()
                            >
                                {move || {
                                    if op.get().is_pending() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Creating account..."
                                        }
                                            .into_any()
                                    } else {
                                        "Register".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <p class="text-center text-sm text-base-content/70 mt-2">
                            "Already have an account? "
                            <a
                                class="link link-primary"
                                on:click=move |_| router.navigate(AppRoute::Login)
                            >
                                "Sign In"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
