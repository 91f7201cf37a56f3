//! Form Detail Page
//!
//! Read-only preview of a form, its submission stats, and the embed snippet.

use crm_core::embed::embed_snippet;
use crm_core::models::{display_datetime, FieldType, Form, FormField, FormStats};
use crm_core::{ApiError, Remote};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::{CopyButton, RemoteView};
use crate::context::use_auth;
use crate::remote::reload;

#[component]
pub fn FormDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let form_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let state = RwSignal::new(Remote::<(Form, FormStats)>::Loading);

    Effect::new(move |_| {
        let id = form_id.get();
        let api = auth.api();
        reload("Form", state, async move {
            let loaded = futures::try_join!(api.get_form(&id), api.form_stats(&id))?;
            Ok::<_, ApiError>(loaded)
        });
    });

    let public_origin = auth.config().public_origin().to_string();

    view! {
        <div class="page">
            <A href="/forms" attr:class="back-link">"← Back to Forms"</A>
            <RemoteView state=state render=move |(form, stats): (Form, FormStats)| {
                let snippet = embed_snippet(&public_origin, &form.id);
                view! {
                    <h1 class="page-title">{form.name.clone()}</h1>
                    <div class="detail-grid">
                        <section class="card">
                            <h2>"Preview"</h2>
                            <div class="form-preview">
                                {form.ordered_fields().into_iter().map(|field| view! { <FieldPreview field=field /> }).collect_view()}
                                <button class="btn-primary" disabled=true>"Submit"</button>
                            </div>
                        </section>
                        <section class="card">
                            <h2>"Submissions"</h2>
                            <div class="stat-value">{stats.submission_count}</div>
                            <div class="list-sub">
                                "Last submission: "
                                {stats.last_submission.as_deref().map(display_datetime).unwrap_or_else(|| "never".into())}
                            </div>
                        </section>
                    </div>
                    <section class="card">
                        <div class="section-header">
                            <h2>"Embed Code"</h2>
                            <CopyButton text=snippet.clone() label="Copy Code" />
                        </div>
                        <pre class="embed-snippet"><code>{snippet}</code></pre>
                    </section>
                }
            } />
        </div>
    }
}

#[component]
fn FieldPreview(field: FormField) -> impl IntoView {
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let control = match field.field_type {
        FieldType::Textarea => view! { <textarea placeholder=placeholder disabled=true></textarea> }.into_any(),
        FieldType::Select => {
            let options = field.options.clone().unwrap_or_default();
            view! {
                <select disabled=true>
                    {options.into_iter().map(|o| view! { <option>{o}</option> }).collect_view()}
                </select>
            }
            .into_any()
        }
        other => view! { <input type=other.input_type() placeholder=placeholder disabled=true /> }.into_any(),
    };

    view! {
        <label class="field">
            <span>
                {field.label.clone()}
                {field.required.then(|| view! { <span class="required">" *"</span> })}
            </span>
            {control}
        </label>
    }
}
