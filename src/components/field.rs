//! Labelled form inputs bound to one field of a form signal.
//!
//! DESIGN
//! ======
//! Each form keeps its whole payload (`SectorInput`, `AssetInput`, ...) in a
//! single `RwSignal`; a field is a getter/setter pair over that payload, so
//! pages declare inputs without per-field signals.

use leptos::prelude::*;

#[component]
pub fn TextField<T>(
    label: &'static str,
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type.unwrap_or("text")
                required=required
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[component]
pub fn TextAreaField<T>(
    label: &'static str,
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--area"
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            ></textarea>
        </label>
    }
}

/// `<select>` over `(value, label)` options, with an optional blank choice.
#[component]
pub fn SelectField<T>(
    label: &'static str,
    form: RwSignal<T>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || form.with(get)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let current = form.with(get);
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected = value == current;
                            view! {
                                <option value=value selected=selected>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
