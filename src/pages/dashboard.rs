//! Authenticated landing page: work order counters, recent activity and
//! the year's corrective/preventive totals.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dialog::PageHeader;
use crate::components::link::NavLink;
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{DashboardStats, WorkOrder};
use crate::router::Route;
use crate::util::format::display_date;
use crate::util::task;

/// Counter cards, in display order.
fn stat_cards(stats: &DashboardStats) -> [(&'static str, u32); 3] {
    [
        ("Pendientes", stats.counts.pending),
        ("En progreso", stats.counts.in_progress),
        ("Pausadas", stats.counts.paused),
    ]
}

/// Whole-number share of `part` in `total`; zero when there is no total.
fn share(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(part) / f64::from(total)) * 100.0).round() as u32
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let stats = RwSignal::new(None::<DashboardStats>);
    let failed = RwSignal::new(false);

    task::spawn(async move {
        match api.dashboard_stats().await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(err) => {
                log::error!("dashboard stats unavailable: {err}");
                failed.set(true);
            }
        }
    });

    view! {
        <div class="page">
            <PageHeader title="Panel de Control">
                <NavLink to=Route::GeneralSettings.path() class="btn btn--secondary">"Configuración"</NavLink>
                <NavLink to=Route::WorkOrders.path() class="btn btn--primary">"Órdenes de Trabajo"</NavLink>
            </PageHeader>
            {move || {
                if failed.get() {
                    return view! { <p class="dashboard__error">"No se pudieron cargar las estadísticas."</p> }.into_any();
                }
                match stats.get() {
                    None => view! { <LoadingLine/> }.into_any(),
                    Some(stats) => view! { <DashboardBody stats=stats/> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn DashboardBody(stats: DashboardStats) -> impl IntoView {
    let cards = stat_cards(&stats);
    let yearly = stats.yearly_stats;
    let recent = stats.recent_activity;

    view! {
        <div class="dashboard__stats">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stat-card">
                            <p class="stat-card__label">{label}</p>
                            <p class="stat-card__value">{value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="dashboard__columns">
            <section class="card">
                <h3>"Actividad Reciente"</h3>
                {if recent.is_empty() {
                    view! { <p class="empty">"Sin actividad reciente."</p> }.into_any()
                } else {
                    view! {
                        <ul class="activity">
                            {recent.into_iter().map(|order| view! { <ActivityRow order=order/> }).collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </section>
            <section class="card">
                <h3>"Resumen Anual"</h3>
                <dl class="yearly">
                    <dt>"Correctivos"</dt>
                    <dd>{yearly.corrective}" (" {share(yearly.corrective, yearly.total)}"%)"</dd>
                    <dt>"Preventivos"</dt>
                    <dd>{yearly.preventive}" (" {share(yearly.preventive, yearly.total)}"%)"</dd>
                    <dt>"Total"</dt>
                    <dd>{yearly.total}</dd>
                </dl>
            </section>
        </div>
    }
}

#[component]
fn ActivityRow(order: WorkOrder) -> impl IntoView {
    let created = display_date(order.created_at.as_deref());
    view! {
        <li class="activity__row">
            <span class="activity__ticket">{order.ticket_number}</span>
            <span class="activity__description">{order.description}</span>
            <span class="activity__date">{created}</span>
            <span class=order.status.badge_class()>{order.status.label()}</span>
        </li>
    }
}
