//! Suppliers, filterable by the categories they serve.

#[cfg(test)]
#[path = "suppliers_test.rs"]
mod suppliers_test;

use leptos::prelude::*;

use super::collection::{Collection, Editing};
use crate::components::dialog::{FormDialog, PageHeader};
use crate::components::field::TextField;
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{SparePartCategory, Supplier, SupplierInput};
use crate::util::format::{blank_to_none, parse_id};
use crate::util::{dialog, search};

#[component]
pub fn SuppliersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let suppliers = Collection::<Supplier>::new(api.clone());
    let categories = Collection::<SparePartCategory>::new(api);
    suppliers.load();
    categories.load();

    let editing = RwSignal::new(Editing::Closed);
    let form = RwSignal::new(SupplierInput::default());
    let query = RwSignal::new(String::new());
    let category_filter = RwSignal::new(None::<i64>);

    let open_new = move |_| {
        form.set(SupplierInput::default());
        editing.set(Editing::New);
    };
    let open_edit = move |supplier: &Supplier| {
        form.set(SupplierInput::from(supplier));
        editing.set(Editing::Existing(supplier.id));
    };
    let on_cancel = Callback::new(move |()| editing.set(Editing::Closed));
    let on_submit = Callback::new(move |()| match cleaned(form.get_untracked()) {
        Ok(input) => suppliers.save(editing.get_untracked(), input, move || editing.set(Editing::Closed)),
        Err(message) => dialog::alert(message),
    });

    let visible = move || {
        let needle = query.get();
        let category = category_filter.get();
        suppliers
            .items
            .get()
            .into_iter()
            .filter(|s| category.is_none_or(|id| s.serves_category(id)))
            .filter(|s| search::matches(&needle, [Some(s.name.as_str()), s.city.as_deref(), s.contact_name.as_deref()]))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Proveedores" subtitle="Proveedores de repuestos y servicios.">
                <button class="btn btn--primary" on:click=open_new>
                    "+ Nuevo Proveedor"
                </button>
            </PageHeader>
            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Buscar por nombre, ciudad o contacto..."
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
            <Show when=move || !suppliers.loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Ciudad"</th>
                            <th>"Contacto"</th>
                            <th>"Teléfono"</th>
                            <th>"Rubros"</th>
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
                                            "No hay proveedores registrados."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter()
                                .map(|supplier| {
                                    let id = supplier.id;
                                    let served = category_names(&supplier);
                                    let row = supplier.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__strong">{supplier.name}</td>
                                            <td>{supplier.city.unwrap_or_default()}</td>
                                            <td>{supplier.contact_name.unwrap_or_default()}</td>
                                            <td>{supplier.phone.unwrap_or_default()}</td>
                                            <td>{served}</td>
                                            <td class="data-table__actions">
                                                <button class="link" on:click=move |_| open_edit(&row)>
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="link link--danger"
                                                    on:click=move |_| suppliers.remove(id, "¿Eliminar este proveedor?")
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
            <Show when=move || editing.get().is_open()>
                <FormDialog
                    heading=Signal::derive(move || editing.get().heading("Proveedor"))
                    on_cancel=on_cancel
                    on_submit=on_submit
                >
                    <TextField
                        label="Nombre"
                        form=form
                        get=|f: &SupplierInput| f.name.clone()
                        set=|f: &mut SupplierInput, v| f.name = v
                        required=true
                    />
                    <TextField
                        label="Dirección"
                        form=form
                        get=|f: &SupplierInput| f.address.clone().unwrap_or_default()
                        set=|f: &mut SupplierInput, v| f.address = Some(v)
                    />
                    <TextField
                        label="Ciudad"
                        form=form
                        get=|f: &SupplierInput| f.city.clone().unwrap_or_default()
                        set=|f: &mut SupplierInput, v| f.city = Some(v)
                    />
                    <TextField
                        label="Teléfono"
                        form=form
                        get=|f: &SupplierInput| f.phone.clone().unwrap_or_default()
                        set=|f: &mut SupplierInput, v| f.phone = Some(v)
                        input_type="tel"
                    />
                    <TextField
                        label="Email"
                        form=form
                        get=|f: &SupplierInput| f.email.clone().unwrap_or_default()
                        set=|f: &mut SupplierInput, v| f.email = Some(v)
                        input_type="email"
                    />
                    <TextField
                        label="Nombre de contacto"
                        form=form
                        get=|f: &SupplierInput| f.contact_name.clone().unwrap_or_default()
                        set=|f: &mut SupplierInput, v| f.contact_name = Some(v)
                    />
                    <TextField
                        label="Teléfono de contacto"
                        form=form
                        get=|f: &SupplierInput| f.contact_phone.clone().unwrap_or_default()
                        set=|f: &mut SupplierInput, v| f.contact_phone = Some(v)
                        input_type="tel"
                    />
                    <fieldset class="field field--checks">
                        <legend class="field__label">"Rubros"</legend>
                        {move || {
                            categories
                                .items
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let id = c.id;
                                    view! {
                                        <label class="field__check">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || form.with(|f| f.category_ids.contains(&id))
                                                on:change=move |ev| {
                                                    let checked = event_target_checked(&ev);
                                                    form.update(|f| toggle_category(&mut f.category_ids, id, checked));
                                                }
                                            />
                                            <span>{c.name}</span>
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </fieldset>
                </FormDialog>
            </Show>
        </div>
    }
}

/// Comma-separated names of the categories a supplier serves.
fn category_names(supplier: &Supplier) -> String {
    supplier.categories.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
}

/// Add or remove `id` from the selected categories, keeping ids unique.
fn toggle_category(ids: &mut Vec<i64>, id: i64, selected: bool) {
    ids.retain(|existing| *existing != id);
    if selected {
        ids.push(id);
    }
}

/// Trim the payload; the name is required.
fn cleaned(mut input: SupplierInput) -> Result<SupplierInput, &'static str> {
    input.name = input.name.trim().to_owned();
    if input.name.is_empty() {
        return Err("El nombre del proveedor es obligatorio.");
    }
    input.address = blank_to_none(input.address);
    input.city = blank_to_none(input.city);
    input.phone = blank_to_none(input.phone);
    input.email = blank_to_none(input.email);
    input.contact_name = blank_to_none(input.contact_name);
    input.contact_phone = blank_to_none(input.contact_phone);
    Ok(input)
}
