//! Sectors: the physical areas assets and workers belong to.

#[cfg(test)]
#[path = "sectors_test.rs"]
mod sectors_test;

use leptos::prelude::*;

use super::collection::{Collection, Editing};
use crate::components::dialog::{FormDialog, PageHeader};
use crate::components::field::{TextAreaField, TextField};
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{Sector, SectorInput};
use crate::util::format::blank_to_none;
use crate::util::{dialog, search};

#[component]
pub fn SectorsPage() -> impl IntoView {
    let sectors = Collection::<Sector>::new(expect_context::<ApiClient>());
    sectors.load();

    let editing = RwSignal::new(Editing::Closed);
    let form = RwSignal::new(SectorInput::default());
    let query = RwSignal::new(String::new());

    let open_new = move |_| {
        form.set(SectorInput::default());
        editing.set(Editing::New);
    };
    let open_edit = move |sector: &Sector| {
        form.set(SectorInput::from(sector));
        editing.set(Editing::Existing(sector.id));
    };
    let on_cancel = Callback::new(move |()| editing.set(Editing::Closed));
    let on_submit = Callback::new(move |()| {
        match cleaned(form.get_untracked()) {
            Ok(input) => sectors.save(editing.get_untracked(), input, move || editing.set(Editing::Closed)),
            Err(message) => dialog::alert(message),
        }
    });

    let visible = move || {
        let needle = query.get();
        sectors
            .items
            .get()
            .into_iter()
            .filter(|s| search::matches(&needle, [Some(s.name.as_str()), s.description.as_deref()]))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Sectores" subtitle="Administra las áreas físicas de tu empresa.">
                <button class="btn btn--primary" on:click=open_new>
                    "+ Nuevo Sector"
                </button>
            </PageHeader>
            <input
                class="search-input"
                type="search"
                placeholder="Buscar sector..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !sectors.loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Descripción"</th>
                            <th class="data-table__actions">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = visible();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td colspan="3" class="data-table__empty">
                                            "No hay sectores registrados."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter()
                                .map(|sector| {
                                    let id = sector.id;
                                    let row = sector.clone();
                                    view! {
                                        <tr>
                                            <td class="data-table__strong">{sector.name}</td>
                                            <td>{sector.description.unwrap_or_default()}</td>
                                            <td class="data-table__actions">
                                                <button class="link" on:click=move |_| open_edit(&row)>
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="link link--danger"
                                                    on:click=move |_| sectors.remove(id, "¿Eliminar este sector?")
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
                    heading=Signal::derive(move || editing.get().heading("Sector"))
                    on_cancel=on_cancel
                    on_submit=on_submit
                >
                    <TextField
                        label="Nombre del Sector"
                        form=form
                        get=|f: &SectorInput| f.name.clone()
                        set=|f: &mut SectorInput, v| f.name = v
                        required=true
                    />
                    <TextAreaField
                        label="Descripción (Opcional)"
                        form=form
                        get=|f: &SectorInput| f.description.clone().unwrap_or_default()
                        set=|f: &mut SectorInput, v| f.description = Some(v)
                    />
                </FormDialog>
            </Show>
        </div>
    }
}

/// Trim the payload; the name is required.
fn cleaned(mut input: SectorInput) -> Result<SectorInput, &'static str> {
    input.name = input.name.trim().to_owned();
    if input.name.is_empty() {
        return Err("El nombre del sector es obligatorio.");
    }
    input.description = blank_to_none(input.description);
    Ok(input)
}
