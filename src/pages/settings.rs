//! General company settings and logo upload.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::app::refresh_company;
use crate::components::dialog::PageHeader;
use crate::components::field::TextField;
use crate::components::notice::{LoadingLine, Notice, Tone};
use crate::net::ApiClient;
use crate::net::types::CompanySettingsUpdate;
use crate::state::company::CompanyState;
use crate::util::format::blank_to_none;
use crate::util::task;

#[component]
pub fn GeneralSettingsPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let company = expect_context::<RwSignal<CompanyState>>();
    let form = RwSignal::new(CompanySettingsUpdate::default());
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let message = RwSignal::new(None::<(Tone, String)>);

    task::spawn(async move {
        match api.get_value().company_settings().await {
            Ok(settings) => form.set(CompanySettingsUpdate::from(&settings)),
            Err(err) => {
                log::error!("company settings unavailable: {err}");
                message.set(Some((Tone::Error, "Error al cargar la configuración.".to_owned())));
            }
        }
        loading.set(false);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = match cleaned(form.get_untracked()) {
            Ok(update) => update,
            Err(text) => {
                message.set(Some((Tone::Error, text.to_owned())));
                return;
            }
        };
        saving.set(true);
        message.set(None);
        let api = api.get_value();
        task::spawn(async move {
            match api.update_company_settings(&update).await {
                Ok(saved) => {
                    log::info!("company settings saved for {}", saved.name);
                    form.set(CompanySettingsUpdate::from(&saved));
                    message.set(Some((Tone::Success, "Configuración guardada correctamente.".to_owned())));
                    refresh_company(api, company);
                }
                Err(err) => {
                    log::error!("company settings save failed: {err}");
                    message.set(Some((Tone::Error, "Error al guardar la configuración.".to_owned())));
                }
            }
            saving.set(false);
        });
    };

    let config = StoredValue::new(api.with_value(|api| api.config().clone()));
    let logo_src = move || company.with(|c| config.with_value(|config| c.logo_src(config)));

    view! {
        <div class="page page--narrow">
            <PageHeader title="Configuración General" subtitle="Datos de la empresa que aparecen en la aplicación."/>
            <Notice message=message/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingLine/> }>
                <section class="card settings__logo">
                    <div class="settings__logo-preview">
                        {move || match logo_src() {
                            Some(src) => view! { <img src=src alt="Logo de la empresa"/> }.into_any(),
                            None => view! { <span class="settings__logo-empty">"Sin logo"</span> }.into_any(),
                        }}
                    </div>
                    <LogoPicker message=message/>
                </section>
                <form class="card form" on:submit=on_submit>
                    <TextField
                        label="Nombre de la Empresa"
                        form=form
                        get=|f: &CompanySettingsUpdate| f.name.clone().unwrap_or_default()
                        set=|f: &mut CompanySettingsUpdate, v| f.name = Some(v)
                        required=true
                    />
                    <TextField
                        label="Dirección"
                        form=form
                        get=|f: &CompanySettingsUpdate| f.address.clone().unwrap_or_default()
                        set=|f: &mut CompanySettingsUpdate, v| f.address = Some(v)
                    />
                    <div class="form__row">
                        <TextField
                            label="Ciudad"
                            form=form
                            get=|f: &CompanySettingsUpdate| f.city.clone().unwrap_or_default()
                            set=|f: &mut CompanySettingsUpdate, v| f.city = Some(v)
                        />
                        <TextField
                            label="Código Postal"
                            form=form
                            get=|f: &CompanySettingsUpdate| f.postal_code.clone().unwrap_or_default()
                            set=|f: &mut CompanySettingsUpdate, v| f.postal_code = Some(v)
                        />
                    </div>
                    <TextField
                        label="Provincia"
                        form=form
                        get=|f: &CompanySettingsUpdate| f.province.clone().unwrap_or_default()
                        set=|f: &mut CompanySettingsUpdate, v| f.province = Some(v)
                    />
                    <div class="form__row">
                        <TextField
                            label="Teléfono"
                            form=form
                            get=|f: &CompanySettingsUpdate| f.phone.clone().unwrap_or_default()
                            set=|f: &mut CompanySettingsUpdate, v| f.phone = Some(v)
                        />
                        <TextField
                            label="Email de Contacto"
                            form=form
                            get=|f: &CompanySettingsUpdate| f.email_contact.clone().unwrap_or_default()
                            set=|f: &mut CompanySettingsUpdate, v| f.email_contact = Some(v)
                            input_type="email"
                        />
                    </div>
                    <div class="form__actions">
                        <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Guardando..." } else { "Guardar Cambios" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// File input that uploads the chosen image as the company logo.
#[cfg(feature = "csr")]
#[component]
fn LogoPicker(message: RwSignal<Option<(Tone, String)>>) -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let company = expect_context::<RwSignal<CompanyState>>();
    let uploading = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        uploading.set(true);
        let api = api.get_value();
        task::spawn(async move {
            match api.upload_company_logo(&file).await {
                Ok(upload) => {
                    log::info!("company logo uploaded: {}", upload.logo_url);
                    company.update(|c| c.set_logo(upload.logo_url));
                    message.set(Some((Tone::Success, "Logo actualizado correctamente.".to_owned())));
                }
                Err(err) => {
                    log::error!("logo upload failed: {err}");
                    message.set(Some((Tone::Error, "Error al subir el logo.".to_owned())));
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <label class="btn btn--secondary settings__logo-button">
            {move || if uploading.get() { "Subiendo..." } else { "Cambiar Logo" }}
            <input type="file" class="hidden" accept="image/*" disabled=move || uploading.get() on:change=on_change/>
        </label>
    }
}

/// Uploads need the browser's `File`; native builds render nothing.
#[cfg(not(feature = "csr"))]
#[component]
fn LogoPicker(message: RwSignal<Option<(Tone, String)>>) -> impl IntoView {
    let _ = message;
}

/// Trim every field; the name is required. Blank optionals are sent as
/// empty strings so a cleared field is cleared on the backend too.
fn cleaned(mut update: CompanySettingsUpdate) -> Result<CompanySettingsUpdate, &'static str> {
    update.name = blank_to_none(update.name);
    if update.name.is_none() {
        return Err("El nombre de la empresa es obligatorio.");
    }
    for field in [
        &mut update.address,
        &mut update.city,
        &mut update.postal_code,
        &mut update.province,
        &mut update.phone,
        &mut update.email_contact,
    ] {
        *field = field.as_deref().map(|value| value.trim().to_owned());
    }
    Ok(update)
}
