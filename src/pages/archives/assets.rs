//! Assets: machines and equipment, each located in a sector.

#[cfg(test)]
#[path = "assets_test.rs"]
mod assets_test;

use leptos::prelude::*;

use super::collection::{Collection, Editing, label_for, options};
use crate::components::dialog::{FormDialog, PageHeader};
use crate::components::field::{SelectField, TextField};
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{Asset, AssetInput, AssetStatus, Sector};
use crate::util::format::{blank_to_none, display_date, parse_id};
use crate::util::{dialog, search};

#[component]
pub fn AssetsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let assets = Collection::<Asset>::new(api.clone());
    let sectors = Collection::<Sector>::new(api);
    assets.load();
    sectors.load();

    let editing = RwSignal::new(Editing::Closed);
    let form = RwSignal::new(AssetInput::default());
    let query = RwSignal::new(String::new());

    let open_new = move |_| {
        form.set(AssetInput::default());
        editing.set(Editing::New);
    };
    let open_edit = move |asset: &Asset| {
        form.set(AssetInput::from(asset));
        editing.set(Editing::Existing(asset.id));
    };
    let on_cancel = Callback::new(move |()| editing.set(Editing::Closed));
    let on_submit = Callback::new(move |()| match cleaned(form.get_untracked()) {
        Ok(input) => assets.save(editing.get_untracked(), input, move || editing.set(Editing::Closed)),
        Err(message) => dialog::alert(message),
    });

    let sector_options = Signal::derive(move || sectors.items.with(|s| options(s, |s| s.id, |s| s.name.clone())));
    let status_options = Signal::derive(|| {
        AssetStatus::ALL.iter().map(|s| (s.as_wire().to_owned(), s.label().to_owned())).collect::<Vec<_>>()
    });

    let visible = move || {
        let needle = query.get();
        assets
            .items
            .get()
            .into_iter()
            .filter(|a| {
                search::matches(
                    &needle,
                    [Some(a.name.as_str()), a.brand.as_deref(), a.model.as_deref(), a.serial_number.as_deref()],
                )
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Activos" subtitle="Máquinas y equipos bajo mantenimiento.">
                <button class="btn btn--primary" on:click=open_new>
                    "+ Nuevo Activo"
                </button>
            </PageHeader>
            <input
                class="search-input"
                type="search"
                placeholder="Buscar por nombre, marca, modelo o serie..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !assets.loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Sector"</th>
                            <th>"Marca / Modelo"</th>
                            <th>"N° Serie"</th>
                            <th>"Compra"</th>
                            <th>"Estado"</th>
                            <th class="data-table__actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="7" class="data-table__empty">
                                            "No hay activos registrados."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let sector_list = sectors.items.get();
                            rows.into_iter()
                                .map(|asset| {
                                    let id = asset.id;
                                    let sector = label_for(&sector_list, Some(asset.sector_id), |s| s.id, |s| s.name.clone());
                                    let make = [asset.brand.as_deref(), asset.model.as_deref()]
                                        .into_iter()
                                        .flatten()
                                        .collect::<Vec<_>>()
                                        .join(" ");
                                    let row = asset.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__strong">{asset.name}</td>
                                            <td>{sector}</td>
                                            <td>{make}</td>
                                            <td>{asset.serial_number.unwrap_or_default()}</td>
                                            <td>{display_date(asset.purchase_date.as_deref())}</td>
                                            <td>
                                                <span class=status_class(asset.status)>{asset.status.label()}</span>
                                            </td>
                                            <td class="data-table__actions">
                                                <button class="link" on:click=move |_| open_edit(&row)>
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="link link--danger"
                                                    on:click=move |_| assets.remove(id, "¿Eliminar este activo?")
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
                    heading=Signal::derive(move || editing.get().heading("Activo"))
                    on_cancel=on_cancel
                    on_submit=on_submit
                >
                    <TextField
                        label="Nombre"
                        form=form
                        get=|f: &AssetInput| f.name.clone()
                        set=|f: &mut AssetInput, v| f.name = v
                        required=true
                    />
                    <SelectField
                        label="Sector"
                        form=form
                        get=|f: &AssetInput| if f.sector_id == 0 { String::new() } else { f.sector_id.to_string() }
                        set=|f: &mut AssetInput, v| f.sector_id = parse_id(&v).unwrap_or(0)
                        options=sector_options
                        placeholder="Seleccione un sector"
                    />
                    <TextField
                        label="Marca"
                        form=form
                        get=|f: &AssetInput| f.brand.clone().unwrap_or_default()
                        set=|f: &mut AssetInput, v| f.brand = Some(v)
                    />
                    <TextField
                        label="Modelo"
                        form=form
                        get=|f: &AssetInput| f.model.clone().unwrap_or_default()
                        set=|f: &mut AssetInput, v| f.model = Some(v)
                    />
                    <TextField
                        label="Número de serie"
                        form=form
                        get=|f: &AssetInput| f.serial_number.clone().unwrap_or_default()
                        set=|f: &mut AssetInput, v| f.serial_number = Some(v)
                    />
                    <TextField
                        label="Fecha de compra"
                        form=form
                        get=|f: &AssetInput| f.purchase_date.clone().unwrap_or_default()
                        set=|f: &mut AssetInput, v| f.purchase_date = Some(v)
                        input_type="date"
                    />
                    <SelectField
                        label="Estado"
                        form=form
                        get=|f: &AssetInput| f.status.as_wire().to_owned()
                        set=|f: &mut AssetInput, v| f.status = AssetStatus::from_wire(&v).unwrap_or_default()
                        options=status_options
                    />
                </FormDialog>
            </Show>
        </div>
    }
}

fn status_class(status: AssetStatus) -> &'static str {
    match status {
        AssetStatus::Active => "badge badge--green",
        AssetStatus::Inactive => "badge badge--gray",
        AssetStatus::Maintenance => "badge badge--yellow",
    }
}

/// Trim the payload; name and sector are required.
fn cleaned(mut input: AssetInput) -> Result<AssetInput, &'static str> {
    input.name = input.name.trim().to_owned();
    if input.name.is_empty() {
        return Err("El nombre del activo es obligatorio.");
    }
    if input.sector_id <= 0 {
        return Err("Seleccione un sector.");
    }
    input.brand = blank_to_none(input.brand);
    input.model = blank_to_none(input.model);
    input.serial_number = blank_to_none(input.serial_number);
    input.purchase_date = blank_to_none(input.purchase_date);
    Ok(input)
}
