//! Preventive plan list with due-date badges and the "check and run" action.

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

use leptos::prelude::*;

use crate::components::dialog::PageHeader;
use crate::components::link::NavLink;
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{Asset, PreventivePlan};
use crate::pages::archives::collection::label_for;
use crate::pages::report;
use crate::router::Route;
use crate::util::format::display_date;
use crate::util::schedule::{self, due_status};
use crate::util::{dialog, task};

#[component]
pub fn PreventivePlansPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let plans = RwSignal::new(Vec::<PreventivePlan>::new());
    let assets = RwSignal::new(Vec::<Asset>::new());
    let loading = RwSignal::new(true);
    let running = RwSignal::new(false);

    let load = move || {
        let api = api.get_value();
        task::spawn(async move {
            let (plan_result, asset_result) = futures::join!(api.preventive_plans(), api.list::<Asset>());
            match plan_result {
                Ok(list) => plans.set(list),
                Err(err) => report("Error al cargar los planes", &err),
            }
            match asset_result {
                Ok(list) => assets.set(list),
                Err(err) => log::warn!("assets unavailable for plan list: {err}"),
            }
            loading.set(false);
        });
    };
    load();

    let delete = move |id: i64| {
        if !dialog::confirm("¿Estás seguro de eliminar este plan?") {
            return;
        }
        let api = api.get_value();
        task::spawn(async move {
            match api.delete_preventive_plan(id).await {
                Ok(()) => load(),
                Err(err) => report("Error al eliminar el plan", &err),
            }
        });
    };

    let run_check = move |_| {
        if running.get_untracked() {
            return;
        }
        running.set(true);
        let api = api.get_value();
        task::spawn(async move {
            match api.check_and_run_preventive_plans().await {
                Ok(result) => {
                    log::info!("preventive check generated {} work orders", result.generated_count);
                    dialog::alert(&format!("Se han generado {} órdenes de trabajo.", result.generated_count));
                    load();
                }
                Err(err) => report("Error al ejecutar la verificación", &err),
            }
            running.set(false);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Planes Preventivos" subtitle="Gestiona la frecuencia de mantenimiento de tus activos.">
                <button class="btn btn--success" disabled=move || running.get() on:click=run_check>
                    {move || if running.get() { "Verificando..." } else { "Ejecutar Verificación" }}
                </button>
                <NavLink to=Route::PreventivePlanNew.path() class="btn btn--primary">
                    "+ Nuevo Plan"
                </NavLink>
            </PageHeader>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Activo"</th>
                            <th>"Frecuencia"</th>
                            <th>"Tareas"</th>
                            <th>"Próxima Ejecución"</th>
                            <th class="data-table__actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = plans.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="6" class="data-table__empty">
                                            "No hay planes registrados."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let today = schedule::today();
                            let asset_list = assets.get();
                            rows.into_iter()
                                .map(|plan| {
                                    let id = plan.id;
                                    let asset = label_for(&asset_list, Some(plan.asset_id), |a| a.id, |a| a.name.clone());
                                    let status = due_status(plan.next_run.as_deref(), today);
                                    let next = display_date(plan.next_run.as_deref());
                                    view! {
                                        <tr class:data-table__row--muted=!plan.is_active>
                                            <td class="data-table__strong">{plan.name.clone()}</td>
                                            <td>{asset}</td>
                                            <td>{frequency_text(&plan)}</td>
                                            <td>{plan.tasks.len()}</td>
                                            <td>
                                                <span class=status.badge_class() title=status.label()>
                                                    {if next.is_empty() { status.label().to_owned() } else { next }}
                                                </span>
                                            </td>
                                            <td class="data-table__actions">
                                                <button class="link link--danger" on:click=move |_| delete(id)>
                                                    "Eliminar"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// "Cada 3 meses", "Cada 1 semana".
fn frequency_text(plan: &PreventivePlan) -> String {
    format!("Cada {} {}", plan.frequency_value, plan.frequency_type.unit_label(plan.frequency_value))
}
