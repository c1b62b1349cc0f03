//! Purchase order list filtered by receipt status and supplier.

use leptos::prelude::*;

use crate::components::dialog::PageHeader;
use crate::components::link::NavLink;
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::stock::{PurchaseOrderFilter, PurchaseOrderView};
use crate::net::types::{PurchaseOrder, Supplier};
use crate::pages::archives::collection::label_for;
use crate::pages::report;
use crate::router::Route;
use crate::util::format::{display_date, money, parse_id};
use crate::util::{dialog, task};

#[component]
pub fn PurchaseOrdersPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let orders = RwSignal::new(Vec::<PurchaseOrder>::new());
    let suppliers = RwSignal::new(Vec::<Supplier>::new());
    let loading = RwSignal::new(true);
    let filter = RwSignal::new(PurchaseOrderFilter { view: PurchaseOrderView::Pending, supplier_id: None });

    let load = move |filter: PurchaseOrderFilter| {
        loading.set(true);
        let api = api.get_value();
        task::spawn(async move {
            match api.purchase_orders(filter).await {
                Ok(list) => orders.set(list),
                Err(err) => report("Error al cargar órdenes de compra", &err),
            }
            loading.set(false);
        });
    };
    Effect::new(move |_| load(filter.get()));

    task::spawn(async move {
        match api.get_value().list::<Supplier>().await {
            Ok(list) => suppliers.set(list),
            Err(err) => log::warn!("suppliers unavailable for purchase order list: {err}"),
        }
    });

    let delete = move |id: i64| {
        if !dialog::confirm("¿Está seguro de eliminar esta orden de compra?") {
            return;
        }
        let api = api.get_value();
        task::spawn(async move {
            match api.delete_purchase_order(id).await {
                Ok(()) => load(filter.get_untracked()),
                Err(err) => report("Error al eliminar orden", &err),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Órdenes de Compra" subtitle="Pedidos a proveedores y su recepción.">
                <NavLink to=Route::PurchaseOrderNew.path() class="btn btn--primary">
                    "+ Nueva Orden"
                </NavLink>
            </PageHeader>
            <div class="filters">
                <div class="filters__tabs">
                    {PurchaseOrderView::ALL
                        .iter()
                        .map(|tab| {
                            let tab = *tab;
                            view! {
                                <button
                                    class="filters__tab"
                                    class:filters__tab--active=move || filter.with(|f| f.view == tab)
                                    on:click=move |_| filter.update(|f| f.view = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <select
                    class="filters__select"
                    on:change=move |ev| {
                        let supplier_id = parse_id(&event_target_value(&ev));
                        filter.update(|f| f.supplier_id = supplier_id);
                    }
                >
                    <option value="">"Todos los proveedores"</option>
                    {move || {
                        suppliers
                            .get()
                            .into_iter()
                            .map(|s| view! { <option value=s.id.to_string()>{s.name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Número"</th>
                            <th>"Fecha"</th>
                            <th>"Proveedor"</th>
                            <th>"Entrega Est."</th>
                            <th>"Estado"</th>
                            <th class="data-table__number">"Total"</th>
                            <th class="data-table__actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = orders.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="7" class="data-table__empty">
                                            "No hay órdenes de compra."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let supplier_list = suppliers.get();
                            rows.into_iter()
                                .map(|order| {
                                    let id = order.id;
                                    let supplier = label_for(
                                        &supplier_list,
                                        Some(order.supplier_id),
                                        |s| s.id,
                                        |s| s.name.clone(),
                                    );
                                    view! {
                                        <tr>
                                            <td class="data-table__strong">{order.order_number.unwrap_or_default()}</td>
                                            <td>{display_date(Some(order.order_date.as_str()))}</td>
                                            <td>{supplier}</td>
                                            <td>{display_date(order.delivery_date.as_deref())}</td>
                                            <td>
                                                <span class=order.status.badge_class()>{order.status.label()}</span>
                                            </td>
                                            <td class="data-table__number">{money(order.total_amount, "")}</td>
                                            <td class="data-table__actions">
                                                <NavLink to=Route::PurchaseOrderEdit(id).path() class="link">
                                                    "Editar"
                                                </NavLink>
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
