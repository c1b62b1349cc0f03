//! Company sign-up: creates the company and its admin user.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::field::TextField;
use crate::components::link::NavLink;
use crate::components::notice::{Notice, Tone};
use crate::net::ApiClient;
use crate::net::types::RegisterRequest;
use crate::router::Route;
use crate::util::{dialog, task};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub admin_email: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterForm {
    /// Trim and check the form, producing the request body.
    pub fn to_request(&self) -> Result<RegisterRequest, &'static str> {
        let name = self.name.trim();
        let admin_email = self.admin_email.trim();
        if name.is_empty() || admin_email.is_empty() || self.password.is_empty() {
            return Err("Completa todos los campos.");
        }
        if self.password != self.confirm {
            return Err("Las contraseñas no coinciden.");
        }
        Ok(RegisterRequest {
            name: name.to_owned(),
            admin_email: admin_email.to_owned(),
            admin_password: self.password.clone(),
        })
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let router = expect_context::<RouterHandle>();
    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<(Tone, String)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(RegisterForm::to_request) {
            Ok(request) => request,
            Err(text) => {
                message.set(Some((Tone::Error, text.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        let api = api.get_value();
        task::spawn(async move {
            match api.register(&request).await {
                Ok(_) => {
                    log::info!("registered company {}", request.name);
                    dialog::alert("¡Registro exitoso! Por favor inicia sesión.");
                    router.navigate(&Route::Login.path());
                }
                Err(err) => {
                    log::warn!("registration failed: {err}");
                    message.set(Some((Tone::Error, err.to_string())));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Registra tu Empresa"</h1>
                <Notice message=message/>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Nombre de la Empresa"
                        form=form
                        get=|f: &RegisterForm| f.name.clone()
                        set=|f: &mut RegisterForm, v| f.name = v
                        required=true
                    />
                    <TextField
                        label="Email del Administrador"
                        form=form
                        get=|f: &RegisterForm| f.admin_email.clone()
                        set=|f: &mut RegisterForm, v| f.admin_email = v
                        input_type="email"
                        required=true
                    />
                    <TextField
                        label="Contraseña"
                        form=form
                        get=|f: &RegisterForm| f.password.clone()
                        set=|f: &mut RegisterForm, v| f.password = v
                        input_type="password"
                        required=true
                    />
                    <TextField
                        label="Confirmar Contraseña"
                        form=form
                        get=|f: &RegisterForm| f.confirm.clone()
                        set=|f: &mut RegisterForm, v| f.confirm = v
                        input_type="password"
                        required=true
                    />
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        "Comenzar Prueba Gratis"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "¿Ya tienes cuenta? "
                    <NavLink to=Route::Login.path()>"Ingresar"</NavLink>
                </p>
            </div>
        </div>
    }
}
