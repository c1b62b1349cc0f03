//! Tools: inventory of hand and power tools with custody tracking.

#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;

use leptos::prelude::*;

use super::collection::{Collection, Editing, label_for, options};
use crate::components::dialog::{FormDialog, PageHeader};
use crate::components::field::{SelectField, TextField};
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{Sector, Tool, ToolInput, ToolStatus, Worker};
use crate::util::format::{blank_to_none, parse_id};
use crate::util::{dialog, search};

#[component]
pub fn ToolsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let tools = Collection::<Tool>::new(api.clone());
    let workers = Collection::<Worker>::new(api.clone());
    let sectors = Collection::<Sector>::new(api);
    tools.load();
    workers.load();
    sectors.load();

    let editing = RwSignal::new(Editing::Closed);
    let form = RwSignal::new(ToolInput::default());
    let query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(None::<ToolStatus>);

    let open_new = move |_| {
        form.set(ToolInput::default());
        editing.set(Editing::New);
    };
    let open_edit = move |tool: &Tool| {
        form.set(ToolInput::from(tool));
        editing.set(Editing::Existing(tool.id));
    };
    let on_cancel = Callback::new(move |()| editing.set(Editing::Closed));
    let on_submit = Callback::new(move |()| match cleaned(form.get_untracked()) {
        Ok(input) => tools.save(editing.get_untracked(), input, move || editing.set(Editing::Closed)),
        Err(message) => dialog::alert(message),
    });

    let worker_options = Signal::derive(move || workers.items.with(|w| options(w, |w| w.id, Worker::full_name)));
    let sector_options = Signal::derive(move || sectors.items.with(|s| options(s, |s| s.id, |s| s.name.clone())));
    let status_options = Signal::derive(|| {
        ToolStatus::ALL.iter().map(|s| (s.as_wire().to_owned(), s.label().to_owned())).collect::<Vec<_>>()
    });

    let visible = move || {
        let needle = query.get();
        let status = status_filter.get();
        tools
            .items
            .get()
            .into_iter()
            .filter(|t| status.is_none_or(|s| t.status == s))
            .filter(|t| search::matches(&needle, [Some(t.name.as_str()), t.code.as_deref(), t.brand.as_deref()]))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Herramientas" subtitle="Inventario y responsables de cada herramienta.">
                <button class="btn btn--primary" on:click=open_new>
                    "+ Nueva Herramienta"
                </button>
            </PageHeader>
            <div class="filters">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Buscar por nombre, código o marca..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <select
                    class="filters__select"
                    on:change=move |ev| status_filter.set(ToolStatus::from_wire(&event_target_value(&ev)))
                >
                    <option value="">"Todos los estados"</option>
                    {ToolStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_wire()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <Show when=move || !tools.loading.get() fallback=|| view! { <LoadingLine/> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Código"</th>
                            <th>"Nombre"</th>
                            <th>"Marca"</th>
                            <th>"Estado"</th>
                            <th>"Asignada a"</th>
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
                                            "No hay herramientas registradas."
                                        </td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let worker_list = workers.items.get();
                            let sector_list = sectors.items.get();
                            rows.into_iter()
                                .map(|tool| {
                                    let id = tool.id;
                                    let custody = custody_label(&tool, &worker_list, &sector_list);
                                    let row = tool.clone();
                                    view! {
                                        <tr>
                                            <td>{tool.code.unwrap_or_default()}</td>
                                            <td class="data-table__strong">{tool.name}</td>
                                            <td>{tool.brand.unwrap_or_default()}</td>
                                            <td>
                                                <span class=status_class(tool.status)>{tool.status.label()}</span>
                                            </td>
                                            <td>{custody}</td>
                                            <td class="data-table__actions">
                                                <button class="link" on:click=move |_| open_edit(&row)>
                                                    "Editar"
                                                </button>
                                                <button
                                                    class="link link--danger"
                                                    on:click=move |_| tools.remove(id, "¿Eliminar esta herramienta?")
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
                    heading=Signal::derive(move || editing.get().heading_feminine("Herramienta"))
                    on_cancel=on_cancel
                    on_submit=on_submit
                >
                    <TextField
                        label="Nombre"
                        form=form
                        get=|f: &ToolInput| f.name.clone()
                        set=|f: &mut ToolInput, v| f.name = v
                        required=true
                    />
                    <TextField
                        label="Código"
                        form=form
                        get=|f: &ToolInput| f.code.clone().unwrap_or_default()
                        set=|f: &mut ToolInput, v| f.code = Some(v)
                    />
                    <TextField
                        label="Marca"
                        form=form
                        get=|f: &ToolInput| f.brand.clone().unwrap_or_default()
                        set=|f: &mut ToolInput, v| f.brand = Some(v)
                    />
                    <SelectField
                        label="Estado"
                        form=form
                        get=|f: &ToolInput| f.status.as_wire().to_owned()
                        set=|f: &mut ToolInput, v| f.status = ToolStatus::from_wire(&v).unwrap_or_default()
                        options=status_options
                    />
                    <SelectField
                        label="Trabajador responsable"
                        form=form
                        get=|f: &ToolInput| f.current_worker_id.map(|id| id.to_string()).unwrap_or_default()
                        set=|f: &mut ToolInput, v| f.current_worker_id = parse_id(&v)
                        options=worker_options
                        placeholder="Sin asignar"
                    />
                    <SelectField
                        label="Sector"
                        form=form
                        get=|f: &ToolInput| f.current_sector_id.map(|id| id.to_string()).unwrap_or_default()
                        set=|f: &mut ToolInput, v| f.current_sector_id = parse_id(&v)
                        options=sector_options
                        placeholder="Sin sector"
                    />
                </FormDialog>
            </Show>
        </div>
    }
}

fn status_class(status: ToolStatus) -> &'static str {
    match status {
        ToolStatus::Available => "badge badge--green",
        ToolStatus::InUse => "badge badge--blue",
        ToolStatus::Broken => "badge badge--red",
        ToolStatus::Lost => "badge badge--gray",
    }
}

/// Who holds the tool: the assigned worker, else the sector, else `-`.
fn custody_label(tool: &Tool, workers: &[Worker], sectors: &[Sector]) -> String {
    if tool.current_worker_id.is_some() {
        return label_for(workers, tool.current_worker_id, |w| w.id, Worker::full_name);
    }
    label_for(sectors, tool.current_sector_id, |s| s.id, |s| s.name.clone())
}

/// Trim the payload; the name is required.
fn cleaned(mut input: ToolInput) -> Result<ToolInput, &'static str> {
    input.name = input.name.trim().to_owned();
    if input.name.is_empty() {
        return Err("El nombre de la herramienta es obligatorio.");
    }
    input.code = blank_to_none(input.code);
    input.brand = blank_to_none(input.brand);
    Ok(input)
}
