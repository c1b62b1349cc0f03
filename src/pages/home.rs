//! `/`: marketing landing for visitors, the dashboard once signed in.

use leptos::prelude::*;

use crate::components::link::NavLink;
use crate::pages::dashboard::DashboardPage;
use crate::router::Route;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = Memo::new(move |_| auth.with(AuthState::is_authenticated));

    view! {
        <Show when=move || signed_in.get() fallback=|| view! { <Landing/> }>
            <DashboardPage/>
        </Show>
    }
}

#[component]
fn Landing() -> impl IntoView {
    view! {
        <div class="landing">
            <section class="landing__hero">
                <h1>"Gestión de mantenimiento para tu planta"</h1>
                <p>
                    "Órdenes de trabajo, planes preventivos, activos y stock de repuestos en un solo lugar."
                </p>
                <div class="landing__actions">
                    <NavLink to=Route::Register.path() class="btn btn--primary">"Comenzar ahora"</NavLink>
                    <NavLink to=Route::Pricing.path() class="btn btn--secondary">"Ver precios"</NavLink>
                </div>
            </section>
            <section class="landing__features">
                <div class="feature">
                    <h3>"Mantenimiento preventivo"</h3>
                    <p>"Planes con frecuencia y tareas que generan órdenes de trabajo automáticamente."</p>
                </div>
                <div class="feature">
                    <h3>"Órdenes de trabajo"</h3>
                    <p>"Seguimiento de cada intervención desde que se reporta hasta que se completa."</p>
                </div>
                <div class="feature">
                    <h3>"Stock y compras"</h3>
                    <p>"Repuestos, proveedores y órdenes de compra con recepción de mercadería."</p>
                </div>
            </section>
        </div>
    }
}
