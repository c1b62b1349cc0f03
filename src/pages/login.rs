//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::link::NavLink;
use crate::components::notice::{Notice, Tone};
use crate::net::{ApiClient, ApiError};
use crate::router::Route;
use crate::state::auth::{self, AuthState};
use crate::util::task;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let router = expect_context::<RouterHandle>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<(Tone, String)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(text) => {
                message.set(Some((Tone::Error, text.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        let api = api.get_value();
        task::spawn(async move {
            match auth::sign_in(&api, &email_value, &password_value).await {
                Ok(state) => {
                    auth_state.set(state);
                    router.navigate(&Route::Dashboard.path());
                }
                Err(err) => {
                    log::warn!("sign-in failed: {err}");
                    message.set(Some((Tone::Error, sign_in_error(&err))));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Ingresar a MantenPro"</h1>
                <Notice message=message/>
                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            placeholder="admin@empresa.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Contraseña"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "¿No tienes cuenta? "
                    <NavLink to=Route::Register.path()>"Registra tu empresa"</NavLink>
                </p>
            </div>
        </div>
    }
}

/// Trimmed email plus password; both are required.
fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Ingresa tu email y contraseña.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Viewer-facing text for a failed sign-in.
pub(crate) fn sign_in_error(err: &ApiError) -> String {
    if err.is_unauthorized() { "Email o contraseña incorrectos.".to_owned() } else { err.to_string() }
}
