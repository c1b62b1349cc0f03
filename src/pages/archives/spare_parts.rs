//! Spare parts and the categories ("rubros") they are grouped by.

#[cfg(test)]
#[path = "spare_parts_test.rs"]
mod spare_parts_test;

use leptos::prelude::*;

use super::collection::{Collection, Editing, label_for, options};
use crate::components::dialog::{FormDialog, PageHeader};
use crate::components::field::{SelectField, TextField};
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{SparePart, SparePartCategory, SparePartCategoryInput, SparePartInput};
use crate::util::format::{blank_to_none, money, optional_text, parse_amount, parse_id};
use crate::util::{dialog, search};

/// Currencies a part may be priced in.
pub const CURRENCIES: [&str; 2] = ["ARS", "USD"];

#[component]
pub fn SparePartsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let parts = Collection::<SparePart>::new(api.clone());
    let categories = Collection::<SparePartCategory>::new(api);
    parts.load();
    categories.load();

    let editing = RwSignal::new(Editing::Closed);
    let form = RwSignal::new(SparePartInput::default());
    // Numeric inputs keep their raw text until submit.
    let cost_text = RwSignal::new(String::new());
    let stock_text = RwSignal::new(String::new());
    let query = RwSignal::new(String::new());
    let category_filter = RwSignal::new(None::<i64>);
    let new_category = RwSignal::new(String::new());

    let open_new = move |_| {
        form.set(SparePartInput::default());
        cost_text.set(String::new());
        stock_text.set(String::new());
        editing.set(Editing::New);
    };
    let open_edit = move |part: &SparePart| {
        let input = SparePartInput::from(part);
        cost_text.set(input.cost.to_string());
        stock_text.set(input.stock.to_string());
        form.set(input);
        editing.set(Editing::Existing(part.id));
    };
    let on_cancel = Callback::new(move |()| editing.set(Editing::Closed));
    let on_submit = Callback::new(move |()| {
        match cleaned(form.get_untracked(), &cost_text.get_untracked(), &stock_text.get_untracked()) {
            Ok(input) => parts.save(editing.get_untracked(), input, move || editing.set(Editing::Closed)),
            Err(message) => dialog::alert(message),
        }
    });

    let add_category = move |_| {
        let Some(name) = optional_text(&new_category.get_untracked()) else {
            return;
        };
        let input = SparePartCategoryInput { name, description: None };
        categories.save(Editing::New, input, move || new_category.set(String::new()));
    };

    let category_options =
        Signal::derive(move || categories.items.with(|c| options(c, |c| c.id, |c| c.name.clone())));
    let currency_options =
        Signal::derive(|| CURRENCIES.iter().map(|c| ((*c).to_owned(), (*c).to_owned())).collect::<Vec<_>>());

    let visible = move || {
        let needle = query.get();
        let category = category_filter.get();
        parts
            .items
            .get()
            .into_iter()
            .filter(|p| category.is_none_or(|id| p.category_id == Some(id)))
            .filter(|p| search::matches(&needle, [Some(p.name.as_str()), p.internal_code.as_deref()]))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Repuestos" subtitle="Catálogo de repuestos, costos y existencias.">
                <button class="btn btn--primary" on:click=open_new>
                    "+ Nuevo Repuesto"
                </button>
            </PageHeader>
            <div class="page__columns">
                <section class="page__main">
                    <div class="filters">
                        <input
                            class="search-input"
                            type="search"
                            placeholder="Buscar por nombre o código interno..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <select
                            class="filters__select"
                            on:change=move |ev| category_filter.set(parse_id(&event_target_value(&ev)))
                        >
                            <option value="">"Todos los rubros"</option>
                            {move || {
                                categories
                                    .items
                                    .get()
                                    .into_iter()
                                    .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <Show when=move || !parts.loading.get() fallback=|| view! { <LoadingLine/> }>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Código"</th>
                                    <th>"Nombre"</th>
                                    <th>"Rubro"</th>
                                    <th class="data-table__number">"Costo"</th>
                                    <th class="data-table__number">"Stock"</th>
                                    <th class="data-table__actions">"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let rows = visible();
                                    if rows.is_empty() {
                                        return view! {
                                            <tr>
                                                <td colspan="6" class="data-table__empty">
                                                    "No hay repuestos registrados."
                                                </td>
                                            </tr>
                                        }
                                            .into_any();
                                    }
                                    let category_list = categories.items.get();
                                    rows.into_iter()
                                        .map(|part| {
                                            let id = part.id;
                                            let category = label_for(
                                                &category_list,
                                                part.category_id,
                                                |c| c.id,
                                                |c| c.name.clone(),
                                            );
                                            let cost = money(part.cost, &part.currency);
                                            let low = part.stock <= 0.0;
                                            let row = part.clone();
                                            view! {
                                                <tr>
                                                    <td>{part.internal_code.unwrap_or_default()}</td>
                                                    <td class="data-table__strong">{part.name}</td>
                                                    <td>{category}</td>
                                                    <td class="data-table__number">{cost}</td>
                                                    <td class="data-table__number" class:text-red=low>
                                                        {part.stock.to_string()}
                                                    </td>
                                                    <td class="data-table__actions">
                                                        <button class="link" on:click=move |_| open_edit(&row)>
                                                            "Editar"
                                                        </button>
                                                        <button
                                                            class="link link--danger"
                                                            on:click=move |_| parts.remove(id, "¿Eliminar este repuesto?")
                                                        >
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
                </section>
                <aside class="panel">
                    <h2 class="panel__title">"Rubros"</h2>
                    <div class="panel__row">
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Nuevo rubro"
                            prop:value=move || new_category.get()
                            on:input=move |ev| new_category.set(event_target_value(&ev))
                        />
                        <button class="btn" on:click=add_category>
                            "Agregar"
                        </button>
                    </div>
                    <ul class="panel__list">
                        {move || {
                            categories
                                .items
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let id = c.id;
                                    view! {
                                        <li class="panel__item">
                                            <span>{c.name}</span>
                                            <button
                                                class="link link--danger"
                                                on:click=move |_| categories.remove(id, "¿Eliminar este rubro?")
                                            >
                                                "Eliminar"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </aside>
            </div>
            <Show when=move || editing.get().is_open()>
                <FormDialog
                    heading=Signal::derive(move || editing.get().heading("Repuesto"))
                    on_cancel=on_cancel
                    on_submit=on_submit
                >
                    <TextField
                        label="Nombre"
                        form=form
                        get=|f: &SparePartInput| f.name.clone()
                        set=|f: &mut SparePartInput, v| f.name = v
                        required=true
                    />
                    <TextField
                        label="Código interno"
                        form=form
                        get=|f: &SparePartInput| f.internal_code.clone().unwrap_or_default()
                        set=|f: &mut SparePartInput, v| f.internal_code = Some(v)
                    />
                    <SelectField
                        label="Rubro"
                        form=form
                        get=|f: &SparePartInput| f.category_id.map(|id| id.to_string()).unwrap_or_default()
                        set=|f: &mut SparePartInput, v| f.category_id = parse_id(&v)
                        options=category_options
                        placeholder="Sin rubro"
                    />
                    <label class="field">
                        <span class="field__label">"Costo"</span>
                        <input
                            class="field__input"
                            type="text"
                            inputmode="decimal"
                            prop:value=move || cost_text.get()
                            on:input=move |ev| cost_text.set(event_target_value(&ev))
                        />
                    </label>
                    <SelectField
                        label="Moneda"
                        form=form
                        get=|f: &SparePartInput| f.currency.clone()
                        set=|f: &mut SparePartInput, v| f.currency = v
                        options=currency_options
                    />
                    <label class="field">
                        <span class="field__label">"Stock"</span>
                        <input
                            class="field__input"
                            type="number"
                            step="1"
                            prop:value=move || stock_text.get()
                            on:input=move |ev| stock_text.set(event_target_value(&ev))
                        />
                    </label>
                </FormDialog>
            </Show>
        </div>
    }
}

/// Trim the payload and read the numeric fields from their raw text.
fn cleaned(mut input: SparePartInput, cost: &str, stock: &str) -> Result<SparePartInput, &'static str> {
    input.name = input.name.trim().to_owned();
    if input.name.is_empty() {
        return Err("El nombre del repuesto es obligatorio.");
    }
    input.cost = parse_amount(cost);
    if input.cost < 0.0 {
        return Err("El costo no puede ser negativo.");
    }
    input.stock = match stock.trim() {
        "" => 0,
        raw => raw.parse().map_err(|_| "El stock debe ser un número entero.")?,
    };
    input.internal_code = blank_to_none(input.internal_code);
    Ok(input)
}
