//! Dashboard Page
//!
//! Overview totals and the pipeline bar chart, fetched together.

use crm_core::models::{bar_percent, format_money, DashboardOverview, PipelineStage};
use crm_core::{ApiError, Remote};
use leptos::prelude::*;

use crate::components::{RemoteView, StatCard};
use crate::context::use_auth;
use crate::remote::load;

#[derive(Debug, Clone, PartialEq)]
struct DashboardData {
    overview: DashboardOverview,
    pipeline: Vec<PipelineStage>,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(Remote::<DashboardData>::Loading);

    let api = auth.api();
    load("Dashboard", state, async move {
        let (overview, pipeline) =
            futures::try_join!(api.dashboard_overview(), api.dashboard_pipeline())?;
        Ok::<_, ApiError>(DashboardData { overview, pipeline: pipeline.into_stages() })
    });

    view! {
        <div class="page">
            <h1 class="page-title">"Dashboard"</h1>
            <RemoteView state=state render=|data: DashboardData| view! {
                <div class="stat-grid">
                    <StatCard title="Total Contacts" value=data.overview.total_contacts.to_string() />
                    <StatCard title="Active Deals" value=data.overview.active_deals.to_string() />
                    <StatCard title="Pipeline Value" value=format_money(data.overview.pipeline_value) />
                </div>
                <PipelineChart stages=data.pipeline />
            } />
        </div>
    }
}

#[component]
fn PipelineChart(stages: Vec<PipelineStage>) -> impl IntoView {
    let max = stages.iter().map(|s| s.count).max().unwrap_or(0);

    view! {
        <section class="card">
            <h2>"Pipeline"</h2>
            {if stages.is_empty() {
                view! { <p class="empty">"No deals yet."</p> }.into_any()
            } else {
                stages
                    .into_iter()
                    .map(|stage| {
                        let width = format!("width: {:.1}%", bar_percent(stage.count, max));
                        view! {
                            <div class="pipeline-row">
                                <span class="pipeline-label">{stage.stage.clone()}</span>
                                <div class="pipeline-track">
                                    <div class="pipeline-bar" style=width></div>
                                </div>
                                <span class="pipeline-count">{stage.count}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}
