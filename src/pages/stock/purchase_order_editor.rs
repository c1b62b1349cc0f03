//! Purchase order editor: header fields, line items, received quantities.
//!
//! DESIGN
//! ======
//! Numeric inputs are edited as raw text in `LineDraft` and parsed only when
//! totals are computed or the order is saved, so partially typed values like
//! `12,` survive re-rendering.

#[cfg(test)]
#[path = "purchase_order_editor_test.rs"]
mod purchase_order_editor_test;

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::dialog::PageHeader;
use crate::components::field::{SelectField, TextAreaField, TextField};
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{PurchaseOrder, PurchaseOrderInput, PurchaseOrderItem, SparePart, Supplier};
use crate::pages::archives::collection::options;
use crate::pages::report;
use crate::router::Route;
use crate::util::format::{money, optional_text, parse_amount, parse_id};
use crate::util::schedule::today_iso;
use crate::util::{dialog, task};

/// One order line as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineDraft {
    pub id: Option<i64>,
    pub spare_part_id: Option<i64>,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub received_quantity: String,
    pub received_date: Option<String>,
}

impl LineDraft {
    pub fn blank() -> Self {
        Self::from_item(&PurchaseOrderItem::blank())
    }

    pub fn from_item(item: &PurchaseOrderItem) -> Self {
        Self {
            id: item.id,
            spare_part_id: item.spare_part_id,
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
            received_quantity: item.received_quantity.to_string(),
            received_date: item.received_date.clone(),
        }
    }

    pub fn to_item(&self) -> PurchaseOrderItem {
        PurchaseOrderItem {
            id: self.id,
            spare_part_id: self.spare_part_id,
            description: self.description.trim().to_owned(),
            quantity: parse_amount(&self.quantity),
            unit_price: parse_amount(&self.unit_price),
            received_quantity: parse_amount(&self.received_quantity),
            received_date: self.received_date.clone(),
        }
    }

    /// Select a catalogue part, copying its name and cost into the line.
    pub fn apply_spare_part(&mut self, part: &SparePart) {
        let mut item = self.to_item();
        item.apply_spare_part(part);
        self.spare_part_id = item.spare_part_id;
        self.description = item.description;
        self.unit_price = item.unit_price.to_string();
    }

    pub fn line_total(&self) -> f64 {
        self.to_item().line_total()
    }
}

/// Whole editor state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderDraft {
    pub order_number: String,
    pub order_date: String,
    pub delivery_date: String,
    pub supplier_id: Option<i64>,
    pub observations: String,
    pub lines: Vec<LineDraft>,
}

impl OrderDraft {
    /// Empty order dated `order_date`.
    pub fn new(order_date: String) -> Self {
        Self { order_date, ..Self::default() }
    }

    pub fn from_order(order: &PurchaseOrder) -> Self {
        Self {
            order_number: order.order_number.clone().unwrap_or_default(),
            order_date: order.order_date.get(..10).unwrap_or(&order.order_date).to_owned(),
            delivery_date: order.delivery_date.clone().unwrap_or_default(),
            supplier_id: Some(order.supplier_id),
            observations: order.observations.clone().unwrap_or_default(),
            lines: order.items.iter().map(LineDraft::from_item).collect(),
        }
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(LineDraft::line_total).sum()
    }

    /// Validate and build the save payload.
    pub fn to_input(&self) -> Result<PurchaseOrderInput, &'static str> {
        let Some(supplier_id) = self.supplier_id else {
            return Err("Seleccione un proveedor");
        };
        if self.lines.is_empty() {
            return Err("Agregue al menos un ítem");
        }
        let order_date = self.order_date.trim();
        if order_date.is_empty() {
            return Err("La fecha de la orden es obligatoria.");
        }
        Ok(PurchaseOrderInput {
            order_number: optional_text(&self.order_number),
            supplier_id,
            order_date: order_date.to_owned(),
            delivery_date: optional_text(&self.delivery_date),
            observations: optional_text(&self.observations),
            items: self.lines.iter().map(LineDraft::to_item).collect(),
        })
    }
}

/// Editor for a new order, or for `order_id` when given.
#[component]
pub fn PurchaseOrderEditorPage(#[prop(optional)] order_id: Option<i64>) -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let router = expect_context::<RouterHandle>();
    let suppliers = RwSignal::new(Vec::<Supplier>::new());
    let parts = RwSignal::new(Vec::<SparePart>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let draft = RwSignal::new(OrderDraft::new(today_iso()));
    let editing = order_id.is_some();
    let heading = if editing { "Editar Orden de Compra" } else { "Nueva Orden de Compra" };
    let number_placeholder = if editing { "" } else { "Generado automáticamente" };

    let back = move || router.navigate(&Route::PurchaseOrders.path());

    task::spawn(async move {
        let api = api.get_value();
        let (supplier_result, part_result) = futures::join!(api.list::<Supplier>(), api.list::<SparePart>());
        match (supplier_result, part_result) {
            (Ok(supplier_list), Ok(part_list)) => {
                suppliers.set(supplier_list);
                parts.set(part_list);
            }
            (Err(err), _) | (_, Err(err)) => report("Error al cargar datos auxiliares", &err),
        }
        if let Some(id) = order_id {
            match api.purchase_order(id).await {
                Ok(order) => draft.set(OrderDraft::from_order(&order)),
                Err(err) => {
                    report("Error al cargar la orden", &err);
                    back();
                }
            }
        }
        loading.set(false);
    });

    let supplier_options = Signal::derive(move || suppliers.with(|s| options(s, |s| s.id, |s| s.name.clone())));
    let line_count = Memo::new(move |_| draft.with(|d| d.lines.len()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let input = match draft.with_untracked(OrderDraft::to_input) {
            Ok(input) => input,
            Err(message) => {
                dialog::alert(message);
                return;
            }
        };
        saving.set(true);
        let api = api.get_value();
        task::spawn(async move {
            let result = match order_id {
                Some(id) => api.update_purchase_order(id, &input).await.map(|_| "Orden actualizada correctamente"),
                None => api.create_purchase_order(&input).await.map(|_| "Orden creada correctamente"),
            };
            match result {
                Ok(message) => {
                    dialog::alert(message);
                    back();
                }
                Err(err) => report("Error al guardar la orden", &err),
            }
            saving.set(false);
        });
    };

    let pick_part = move |index: usize, raw: String| {
        let selected = parse_id(&raw);
        let part = selected.and_then(|id| parts.with_untracked(|p| p.iter().find(|p| p.id == id).cloned()));
        draft.update(|d| {
            let Some(line) = d.lines.get_mut(index) else {
                return;
            };
            match part {
                Some(part) => line.apply_spare_part(&part),
                None => line.spare_part_id = selected,
            }
        });
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title=heading/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingLine text="Cargando orden..."/> }>
                <form class="form" on:submit=on_submit>
                    <section class="card">
                        <h2 class="card__title">"Datos Generales"</h2>
                        <div class="form__grid">
                            <label class="field">
                                <span class="field__label">"Número de Orden"</span>
                                <input
                                    class="field__input"
                                    type="text"
                                    placeholder=number_placeholder
                                    prop:value=move || draft.with(|d| d.order_number.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        draft.update(|d| d.order_number = value);
                                    }
                                />
                            </label>
                            <TextField
                                label="Fecha"
                                form=draft
                                get=|d: &OrderDraft| d.order_date.clone()
                                set=|d: &mut OrderDraft, v| d.order_date = v
                                input_type="date"
                                required=true
                            />
                            <SelectField
                                label="Proveedor"
                                form=draft
                                get=|d: &OrderDraft| d.supplier_id.map(|id| id.to_string()).unwrap_or_default()
                                set=|d: &mut OrderDraft, v| d.supplier_id = parse_id(&v)
                                options=supplier_options
                                placeholder="Seleccione un proveedor"
                            />
                            <TextField
                                label="Fecha Entrega Estimada"
                                form=draft
                                get=|d: &OrderDraft| d.delivery_date.clone()
                                set=|d: &mut OrderDraft, v| d.delivery_date = v
                                input_type="date"
                            />
                        </div>
                        <TextAreaField
                            label="Observaciones"
                            form=draft
                            get=|d: &OrderDraft| d.observations.clone()
                            set=|d: &mut OrderDraft, v| d.observations = v
                        />
                    </section>
                    <section class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Items"</h2>
                            <button
                                type="button"
                                class="link"
                                on:click=move |_| draft.update(|d| d.lines.push(LineDraft::blank()))
                            >
                                "+ Agregar Item"
                            </button>
                        </div>
                        <table class="data-table data-table--form">
                            <thead>
                                <tr>
                                    <th>"Repuesto / Producto"</th>
                                    <th>"Cant."</th>
                                    <th>"Precio Unit."</th>
                                    <th class="data-table__number">"Total"</th>
                                    {editing.then(|| view! { <th>"Recibido"</th> <th>"Pendiente"</th> })}
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    (0..line_count.get())
                                        .map(|index| {
                                            let read = move |f: fn(&LineDraft) -> String| {
                                                draft.with(|d| d.lines.get(index).map(f).unwrap_or_default())
                                            };
                                            let write = move |f: fn(&mut LineDraft, String), value: String| {
                                                draft.update(|d| {
                                                    if let Some(line) = d.lines.get_mut(index) {
                                                        f(line, value);
                                                    }
                                                });
                                            };
                                            view! {
                                                <tr>
                                                    <td>
                                                        <select
                                                            class="field__input"
                                                            on:change=move |ev| pick_part(index, event_target_value(&ev))
                                                        >
                                                            <option value="">"Seleccione..."</option>
                                                            {move || {
                                                                let current = draft
                                                                    .with(|d| d.lines.get(index).and_then(|l| l.spare_part_id));
                                                                parts
                                                                    .get()
                                                                    .into_iter()
                                                                    .map(|part| {
                                                                        let selected = current == Some(part.id);
                                                                        view! {
                                                                            <option value=part.id.to_string() selected=selected>
                                                                                {part_label(&part)}
                                                                            </option>
                                                                        }
                                                                    })
                                                                    .collect_view()
                                                            }}
                                                        </select>
                                                        <input
                                                            class="field__input"
                                                            type="text"
                                                            placeholder="Descripción"
                                                            prop:value=move || read(|l| l.description.clone())
                                                            on:input=move |ev| {
                                                                write(|l, v| l.description = v, event_target_value(&ev));
                                                            }
                                                        />
                                                    </td>
                                                    <td>
                                                        <input
                                                            class="field__input field__input--short"
                                                            type="number"
                                                            min="1"
                                                            prop:value=move || read(|l| l.quantity.clone())
                                                            on:input=move |ev| write(|l, v| l.quantity = v, event_target_value(&ev))
                                                        />
                                                    </td>
                                                    <td>
                                                        <input
                                                            class="field__input field__input--short"
                                                            type="number"
                                                            min="0"
                                                            step="0.01"
                                                            prop:value=move || read(|l| l.unit_price.clone())
                                                            on:input=move |ev| write(|l, v| l.unit_price = v, event_target_value(&ev))
                                                        />
                                                    </td>
                                                    <td class="data-table__number">
                                                        {move || {
                                                            let total = draft
                                                                .with(|d| d.lines.get(index).map_or(0.0, LineDraft::line_total));
                                                            money(total, "")
                                                        }}
                                                    </td>
                                                    {editing
                                                        .then(move || {
                                                            view! {
                                                                <td>
                                                                    <input
                                                                        class="field__input field__input--short"
                                                                        type="number"
                                                                        min="0"
                                                                        prop:value=move || read(|l| l.received_quantity.clone())
                                                                        on:input=move |ev| {
                                                                            write(|l, v| l.received_quantity = v, event_target_value(&ev));
                                                                        }
                                                                    />
                                                                </td>
                                                                <td class="data-table__number">
                                                                    {move || read(|l| l.to_item().pending_quantity().to_string())}
                                                                </td>
                                                            }
                                                        })}
                                                    <td>
                                                        <button
                                                            type="button"
                                                            class="link link--danger"
                                                            on:click=move |_| {
                                                                draft.update(|d| {
                                                                    if index < d.lines.len() {
                                                                        d.lines.remove(index);
                                                                    }
                                                                });
                                                            }
                                                        >
                                                            "Quitar"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td colspan="3" class="data-table__number">"Total Orden:"</td>
                                    <td class="data-table__number data-table__strong">
                                        {move || money(draft.with(OrderDraft::total), "")}
                                    </td>
                                </tr>
                            </tfoot>
                        </table>
                    </section>
                    <div class="form__actions">
                        <button type="button" class="btn" on:click=move |_| back()>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Guardando..." } else { "Guardar Orden" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// "Rodamiento 6204 (REP-010)", or just the name without a code.
fn part_label(part: &SparePart) -> String {
    match part.internal_code.as_deref() {
        Some(code) if !code.is_empty() => format!("{} ({code})", part.name),
        _ => part.name.clone(),
    }
}
