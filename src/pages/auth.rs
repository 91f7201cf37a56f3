//! Sign In / Sign Up Page

use crm_core::feedback::{login_message, registration_message, REGISTER_SUCCESS};
use crm_core::models::{LoginRequest, RegisterRequest};
use crm_core::routes::HOME_PATH;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::context::use_auth;

/// Delay before a successful registration flips to the sign-in tab
const SWITCH_TO_SIGN_IN_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let (mode, set_mode) = signal(AuthMode::SignIn);
    let slug = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let admin_name = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let clear_form = move |keep_slug: bool| {
        if !keep_slug {
            slug.set(String::new());
        }
        email.set(String::new());
        password.set(String::new());
        company_name.set(String::new());
        admin_name.set(String::new());
        set_error.set(None);
        set_success.set(None);
    };

    let switch_mode = move |next: AuthMode| {
        if mode.get_untracked() != next {
            set_mode.set(next);
            clear_form(false);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_error.set(None);
        set_success.set(None);
        set_submitting.set(true);

        let api = auth.api();
        match mode.get_untracked() {
            AuthMode::SignIn => {
                let navigate = navigate.clone();
                let request = LoginRequest {
                    tenant_slug: slug.get_untracked().trim().to_string(),
                    email: email.get_untracked().trim().to_string(),
                    password: password.get_untracked(),
                };
                spawn_local(async move {
                    match api.login(&request).await {
                        Ok(token) => match auth.login(token.access_token) {
                            Ok(()) => navigate(HOME_PATH, NavigateOptions::default()),
                            Err(e) => set_error.set(Some(e.to_string())),
                        },
                        Err(e) => {
                            tracing::warn!("[Auth] Login failed: {}", e);
                            set_error.set(Some(login_message(&e)));
                        }
                    }
                    set_submitting.set(false);
                });
            }
            AuthMode::SignUp => {
                let request = RegisterRequest {
                    company_name: company_name.get_untracked().trim().to_string(),
                    company_slug: slug.get_untracked().trim().to_string(),
                    admin_name: admin_name.get_untracked().trim().to_string(),
                    admin_email: email.get_untracked().trim().to_string(),
                    admin_password: password.get_untracked(),
                };
                spawn_local(async move {
                    match api.register(&request).await {
                        Ok(()) => {
                            tracing::info!("[Auth] Registered {}", request.company_slug);
                            set_success.set(Some(REGISTER_SUCCESS.to_string()));
                            set_submitting.set(false);
                            TimeoutFuture::new(SWITCH_TO_SIGN_IN_MS).await;
                            // `Some` hands the value back: the page is gone
                            if set_mode.try_set(AuthMode::SignIn).is_some() {
                                return;
                            }
                            clear_form(true);
                        }
                        Err(e) => {
                            tracing::warn!("[Auth] Registration failed: {}", e);
                            set_error.set(Some(registration_message(&e)));
                            set_submitting.set(false);
                        }
                    }
                });
            }
        }
    };

    let tab_class = move |tab: AuthMode| {
        move || if mode.get() == tab { "auth-tab active" } else { "auth-tab" }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"CRM"</h1>
                <div class="auth-tabs">
                    <button type="button" class=tab_class(AuthMode::SignIn) on:click=move |_| switch_mode(AuthMode::SignIn)>
                        "Sign In"
                    </button>
                    <button type="button" class=tab_class(AuthMode::SignUp) on:click=move |_| switch_mode(AuthMode::SignUp)>
                        "Sign Up"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <TextField label="Company Name" value=company_name />
                        <TextField label="Admin Name" value=admin_name />
                    </Show>
                    <TextField
                        label=move || if mode.get() == AuthMode::SignUp { "Company Slug" } else { "Workspace" }
                        value=slug
                    />
                    <TextField label="Email" value=email input_type="email" />
                    <TextField label="Password" value=password input_type="password" />

                    {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                    {move || success.get().map(|msg| view! { <div class="form-success">{msg}</div> })}

                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || match (mode.get(), submitting.get()) {
                            (_, true) => "Please wait...",
                            (AuthMode::SignIn, false) => "Sign In",
                            (AuthMode::SignUp, false) => "Create Account",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn TextField(
    #[prop(into)] label: Signal<&'static str>,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span>{move || label.get()}</span>
            <input
                type=input_type
                required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
