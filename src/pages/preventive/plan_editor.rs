//! New preventive plan form with an editable task checklist.

#[cfg(test)]
#[path = "plan_editor_test.rs"]
mod plan_editor_test;

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::dialog::PageHeader;
use crate::components::field::{SelectField, TextField};
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::{Asset, FrequencyType, PreventivePlanInput, PreventiveTask};
use crate::pages::archives::collection::options;
use crate::pages::report;
use crate::router::Route;
use crate::util::format::{parse_amount, parse_id};
use crate::util::{dialog, task};

/// One checklist row as typed; `minutes` stays raw until submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub description: String,
    pub minutes: String,
}

/// Editor state for a plan that has not been saved yet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanDraft {
    pub name: String,
    pub asset_id: Option<i64>,
    pub frequency_type: FrequencyType,
    pub frequency_value: String,
    pub is_active: bool,
    pub tasks: Vec<TaskDraft>,
}

impl Default for PlanDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            asset_id: None,
            frequency_type: FrequencyType::Monthly,
            frequency_value: "1".to_owned(),
            is_active: true,
            tasks: vec![TaskDraft::default()],
        }
    }
}

impl PlanDraft {
    pub fn add_task(&mut self) {
        self.tasks.push(TaskDraft::default());
    }

    /// Drop the row at `index`; out-of-range indexes are ignored.
    pub fn remove_task(&mut self, index: usize) {
        if index < self.tasks.len() {
            self.tasks.remove(index);
        }
    }

    /// Validate and build the create payload. Tasks with a blank
    /// description are left out.
    pub fn to_input(&self) -> Result<PreventivePlanInput, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("El nombre del plan es obligatorio.");
        }
        let Some(asset_id) = self.asset_id else {
            return Err("Debes seleccionar un activo");
        };
        let frequency_value = match self.frequency_value.trim().parse::<u32>() {
            Ok(value) if value > 0 => value,
            _ => return Err("La frecuencia debe ser un número mayor a cero."),
        };
        let tasks = self
            .tasks
            .iter()
            .filter(|t| !t.description.trim().is_empty())
            .map(|t| PreventiveTask {
                description: t.description.trim().to_owned(),
                estimated_time: parse_amount(&t.minutes).max(0.0),
            })
            .collect();
        Ok(PreventivePlanInput {
            name: name.to_owned(),
            asset_id,
            frequency_type: self.frequency_type,
            frequency_value,
            is_active: self.is_active,
            tasks,
        })
    }
}

#[component]
pub fn PlanEditorPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let router = expect_context::<RouterHandle>();
    let assets = RwSignal::new(Vec::<Asset>::new());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let draft = RwSignal::new(PlanDraft::default());

    task::spawn(async move {
        match api.get_value().list::<Asset>().await {
            Ok(list) => assets.set(list),
            Err(err) => report("Error al cargar los activos", &err),
        }
        loading.set(false);
    });

    let asset_options = Signal::derive(move || assets.with(|a| options(a, |a| a.id, |a| a.name.clone())));
    let frequency_options = Signal::derive(|| {
        FrequencyType::ALL.iter().map(|f| (f.as_wire().to_owned(), f.label().to_owned())).collect::<Vec<_>>()
    });
    let task_count = Memo::new(move |_| draft.with(|d| d.tasks.len()));

    let back = move || router.navigate(&Route::PreventivePlans.path());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let input = match draft.with_untracked(PlanDraft::to_input) {
            Ok(input) => input,
            Err(message) => {
                dialog::alert(message);
                return;
            }
        };
        saving.set(true);
        let api = api.get_value();
        task::spawn(async move {
            match api.create_preventive_plan(&input).await {
                Ok(plan) => {
                    log::info!("created preventive plan {}", plan.id);
                    dialog::alert("Plan creado exitosamente");
                    back();
                }
                Err(err) => report("Error al crear el plan", &err),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <PageHeader title="Nuevo Plan Preventivo"/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingLine/> }>
                <form class="card form" on:submit=on_submit>
                    <div class="form__grid">
                        <TextField
                            label="Nombre del Plan"
                            form=draft
                            get=|d: &PlanDraft| d.name.clone()
                            set=|d: &mut PlanDraft, v| d.name = v
                            required=true
                        />
                        <SelectField
                            label="Activo"
                            form=draft
                            get=|d: &PlanDraft| d.asset_id.map(|id| id.to_string()).unwrap_or_default()
                            set=|d: &mut PlanDraft, v| d.asset_id = parse_id(&v)
                            options=asset_options
                            placeholder="Seleccione un activo..."
                        />
                        <SelectField
                            label="Frecuencia"
                            form=draft
                            get=|d: &PlanDraft| d.frequency_type.as_wire().to_owned()
                            set=|d: &mut PlanDraft, v| d.frequency_type = FrequencyType::from_wire(&v).unwrap_or_default()
                            options=frequency_options
                        />
                        <TextField
                            label="Valor (Cada cuánto)"
                            form=draft
                            get=|d: &PlanDraft| d.frequency_value.clone()
                            set=|d: &mut PlanDraft, v| d.frequency_value = v
                            input_type="number"
                        />
                    </div>
                    <label class="field field--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.with(|d| d.is_active)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                draft.update(|d| d.is_active = checked);
                            }
                        />
                        <span>"Plan activo"</span>
                    </label>
                    <fieldset class="checklist">
                        <legend class="field__label">"Checklist de Tareas"</legend>
                        {move || {
                            (0..task_count.get())
                                .map(|index| {
                                    view! {
                                        <div class="checklist__row">
                                            <span class="checklist__index">{format!("{}.", index + 1)}</span>
                                            <input
                                                class="field__input checklist__text"
                                                type="text"
                                                placeholder="Descripción de la tarea"
                                                prop:value=move || {
                                                    draft.with(|d| d.tasks.get(index).map(|t| t.description.clone()).unwrap_or_default())
                                                }
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    draft.update(|d| {
                                                        if let Some(t) = d.tasks.get_mut(index) {
                                                            t.description = value;
                                                        }
                                                    });
                                                }
                                            />
                                            <input
                                                class="field__input checklist__minutes"
                                                type="number"
                                                min="0"
                                                placeholder="Min"
                                                prop:value=move || {
                                                    draft.with(|d| d.tasks.get(index).map(|t| t.minutes.clone()).unwrap_or_default())
                                                }
                                                on:input=move |ev| {
                                                    let value = event_target_value(&ev);
                                                    draft.update(|d| {
                                                        if let Some(t) = d.tasks.get_mut(index) {
                                                            t.minutes = value;
                                                        }
                                                    });
                                                }
                                            />
                                            <button
                                                type="button"
                                                class="link link--danger"
                                                on:click=move |_| draft.update(|d| d.remove_task(index))
                                            >
                                                "X"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <button type="button" class="link" on:click=move |_| draft.update(PlanDraft::add_task)>
                            "+ Agregar Tarea"
                        </button>
                    </fieldset>
                    <div class="form__actions">
                        <button type="button" class="btn" on:click=move |_| back()>
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                            "Guardar Plan"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
