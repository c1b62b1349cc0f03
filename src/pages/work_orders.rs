//! Work order list with a status filter and inline status changes.

#[cfg(test)]
#[path = "work_orders_test.rs"]
mod work_orders_test;

use leptos::prelude::*;

use crate::components::dialog::PageHeader;
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::maintenance::WorkOrderFilter;
use crate::net::types::{Asset, WorkOrder, WorkOrderInput, WorkOrderStatus};
use crate::pages::archives::collection::label_for;
use crate::pages::report;
use crate::util::format::display_date;
use crate::util::task;

#[component]
pub fn WorkOrdersPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let orders = RwSignal::new(Vec::<WorkOrder>::new());
    let assets = RwSignal::new(Vec::<Asset>::new());
    let loading = RwSignal::new(true);
    let status_filter = RwSignal::new(None::<WorkOrderStatus>);

    let load = move |filter: WorkOrderFilter| {
        loading.set(true);
        let api = api.get_value();
        task::spawn(async move {
            match api.work_orders(filter).await {
                Ok(list) => orders.set(list),
                Err(err) => report("Error al cargar las órdenes de trabajo", &err),
            }
            loading.set(false);
        });
    };
    let current_filter = move || WorkOrderFilter { status: status_filter.get_untracked(), asset_id: None };

    Effect::new(move |_| {
        let status = status_filter.get();
        load(WorkOrderFilter { status, asset_id: None });
    });

    task::spawn(async move {
        match api.get_value().list::<Asset>().await {
            Ok(list) => assets.set(list),
            Err(err) => log::warn!("assets unavailable for work order list: {err}"),
        }
    });

    let change_status = move |order: &WorkOrder, status: WorkOrderStatus| {
        if order.status == status {
            return;
        }
        let id = order.id;
        let input = WorkOrderInput::from(order).with_status(status);
        let api = api.get_value();
        task::spawn(async move {
            match api.update_work_order(id, &input).await {
                Ok(updated) => {
                    log::info!("work order {} moved to {}", updated.ticket_number, status.as_wire());
                    load(current_filter());
                }
                Err(err) => report("Error al actualizar el estado", &err),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Órdenes de Trabajo" subtitle="Gestiona las tareas de mantenimiento preventivo y correctivo.">
                <select
                    class="filters__select"
                    on:change=move |ev| status_filter.set(WorkOrderStatus::from_wire(&event_target_value(&ev)))
                >
                    <option value="">"Todos los estados"</option>
                    {WorkOrderStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_wire()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </PageHeader>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Ticket"</th>
                            <th>"Tipo"</th>
                            <th>"Activo"</th>
                            <th>"Descripción"</th>
                            <th>"Prioridad"</th>
                            <th>"Estado"</th>
                            <th>"Fecha"</th>
                            <th class="data-table__actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = orders.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="8" class="data-table__empty">
                                            "No hay órdenes de trabajo."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let asset_list = assets.get();
                            rows.into_iter()
                                .map(|order| {
                                    let asset = label_for(&asset_list, order.asset_id, |a| a.id, |a| a.name.clone());
                                    let created = display_date(order.created_at.as_deref());
                                    let current = order.status;
                                    let complete = can_complete(current);
                                    let for_select = order.clone();
                                    let for_button = order.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__strong">{order.ticket_number}</td>
                                            <td>{order.kind.label()}</td>
                                            <td>{asset}</td>
                                            <td class="data-table__wrap">{order.description}</td>
                                            <td class=order.priority.text_class()>{order.priority.label()}</td>
                                            <td>
                                                <span class=current.badge_class()>{current.label()}</span>
                                            </td>
                                            <td>{created}</td>
                                            <td class="data-table__actions">
                                                <select
                                                    class="data-table__select"
                                                    on:change=move |ev| {
                                                        if let Some(status) = WorkOrderStatus::from_wire(&event_target_value(&ev)) {
                                                            change_status(&for_select, status);
                                                        }
                                                    }
                                                >
                                                    {WorkOrderStatus::ALL
                                                        .iter()
                                                        .map(|s| {
                                                            view! {
                                                                <option value=s.as_wire() selected={*s == current}>
                                                                    {s.label()}
                                                                </option>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </select>
                                                {complete
                                                    .then(move || {
                                                        view! {
                                                            <button
                                                                class="link link--success"
                                                                on:click=move |_| change_status(&for_button, WorkOrderStatus::Completada)
                                                            >
                                                                "Completar"
                                                            </button>
                                                        }
                                                    })}
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

/// Closed orders (completed or cancelled) offer no "Completar" shortcut.
fn can_complete(status: WorkOrderStatus) -> bool {
    !matches!(status, WorkOrderStatus::Completada | WorkOrderStatus::Cancelada)
}
