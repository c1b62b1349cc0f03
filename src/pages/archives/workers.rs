//! Workers: maintenance staff that work orders are assigned to.

#[cfg(test)]
#[path = "workers_test.rs"]
mod workers_test;

use leptos::prelude::*;

use super::collection::{Collection, Editing, label_for, options};
use crate::components::dialog::{FormDialog, PageHeader};
use crate::components::field::{SelectField, TextField};
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{Sector, Worker, WorkerInput};
use crate::util::format::{blank_to_none, parse_id};
use crate::util::{dialog, search};

#[component]
pub fn WorkersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let workers = Collection::<Worker>::new(api.clone());
    let sectors = Collection::<Sector>::new(api);
    workers.load();
    sectors.load();

    let editing = RwSignal::new(Editing::Closed);
    let form = RwSignal::new(WorkerInput::default());
    let query = RwSignal::new(String::new());

    let open_new = move |_| {
        form.set(WorkerInput::default());
        editing.set(Editing::New);
    };
    let open_edit = move |worker: &Worker| {
        form.set(WorkerInput::from(worker));
        editing.set(Editing::Existing(worker.id));
    };
    let on_cancel = Callback::new(move |()| editing.set(Editing::Closed));
    let on_submit = Callback::new(move |()| match cleaned(form.get_untracked()) {
        Ok(input) => workers.save(editing.get_untracked(), input, move || editing.set(Editing::Closed)),
        Err(message) => dialog::alert(message),
    });

    let sector_options = Signal::derive(move || sectors.items.with(|s| options(s, |s| s.id, |s| s.name.clone())));

    let visible = move || {
        let needle = query.get();
        workers
            .items
            .get()
            .into_iter()
            .filter(|w| {
                search::matches(
                    &needle,
                    [Some(w.first_name.as_str()), Some(w.last_name.as_str()), w.rut_dni.as_deref(), w.job_title.as_deref()],
                )
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Personal" subtitle="Técnicos y operarios de mantenimiento.">
                <button class="btn btn--primary" on:click=open_new>
                    "+ Nuevo Trabajador"
                </button>
            </PageHeader>
            <input
                class="search-input"
                type="search"
                placeholder="Buscar por nombre, documento o puesto..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <Show when=move || !workers.loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"RUT / DNI"</th>
                            <th>"Puesto"</th>
                            <th>"Sector"</th>
                            <th>"Contacto"</th>
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
                                            "No hay personal registrado."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let sector_list = sectors.items.get();
                            rows.into_iter()
                                .map(|worker| {
                                    let id = worker.id;
                                    let name = worker.full_name();
                                    let sector = label_for(&sector_list, worker.sector_id, |s| s.id, |s| s.name.clone());
                                    let contact = worker.email.clone().or_else(|| worker.phone.clone()).unwrap_or_default();
                                    let row = worker.clone();
                                    view! {
                                        <tr class:data-table__row--muted=!worker.is_active>
                                            <td class="data-table__strong">{name}</td>
                                            <td>{worker.rut_dni.unwrap_or_default()}</td>
                                            <td>{worker.job_title.unwrap_or_default()}</td>
                                            <td>{sector}</td>
                                            <td>{contact}</td>
                                            <td class="data-table__actions">
                                                <button class="link" on:click=move |_| open_edit(&row)>
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="link link--danger"
                                                    on:click=move |_| workers.remove(id, "¿Eliminar este trabajador?")
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
                    heading=Signal::derive(move || editing.get().heading("Trabajador"))
                    on_cancel=on_cancel
                    on_submit=on_submit
                >
                    <TextField
                        label="Nombre"
                        form=form
                        get=|f: &WorkerInput| f.first_name.clone()
                        set=|f: &mut WorkerInput, v| f.first_name = v
                        required=true
                    />
                    <TextField
                        label="Apellido"
                        form=form
                        get=|f: &WorkerInput| f.last_name.clone()
                        set=|f: &mut WorkerInput, v| f.last_name = v
                        required=true
                    />
                    <TextField
                        label="RUT / DNI"
                        form=form
                        get=|f: &WorkerInput| f.rut_dni.clone().unwrap_or_default()
                        set=|f: &mut WorkerInput, v| f.rut_dni = Some(v)
                    />
                    <TextField
                        label="Email"
                        form=form
                        get=|f: &WorkerInput| f.email.clone().unwrap_or_default()
                        set=|f: &mut WorkerInput, v| f.email = Some(v)
                        input_type="email"
                    />
                    <TextField
                        label="Teléfono"
                        form=form
                        get=|f: &WorkerInput| f.phone.clone().unwrap_or_default()
                        set=|f: &mut WorkerInput, v| f.phone = Some(v)
                        input_type="tel"
                    />
                    <TextField
                        label="Puesto"
                        form=form
                        get=|f: &WorkerInput| f.job_title.clone().unwrap_or_default()
                        set=|f: &mut WorkerInput, v| f.job_title = Some(v)
                    />
                    <SelectField
                        label="Sector"
                        form=form
                        get=|f: &WorkerInput| f.sector_id.map(|id| id.to_string()).unwrap_or_default()
                        set=|f: &mut WorkerInput, v| f.sector_id = parse_id(&v)
                        options=sector_options
                        placeholder="Sin sector"
                    />
                </FormDialog>
            </Show>
        </div>
    }
}

/// Trim the payload; first and last name are required.
fn cleaned(mut input: WorkerInput) -> Result<WorkerInput, &'static str> {
    input.first_name = input.first_name.trim().to_owned();
    input.last_name = input.last_name.trim().to_owned();
    if input.first_name.is_empty() || input.last_name.is_empty() {
        return Err("Nombre y apellido son obligatorios.");
    }
    input.rut_dni = blank_to_none(input.rut_dni);
    input.email = blank_to_none(input.email);
    input.phone = blank_to_none(input.phone);
    input.job_title = blank_to_none(input.job_title);
    Ok(input)
}
