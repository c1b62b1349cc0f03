//! Subscription plans and checkout.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::notice::LoadingLine;
use crate::net::ApiClient;
use crate::net::types::Plan;
use crate::pages::report;
use crate::router::Route;
use crate::state::auth::AuthState;
use crate::util::format::money;
use crate::util::{dialog, task};

/// "ARS 4.999,00 / mes".
fn price_label(plan: &Plan) -> String {
    let amount = money(plan.price, &plan.currency.to_uppercase());
    match interval_label(&plan.interval) {
        Some(interval) => format!("{amount} / {interval}"),
        None => amount,
    }
}

fn interval_label(interval: &str) -> Option<&'static str> {
    match interval.to_ascii_lowercase().as_str() {
        "month" | "monthly" | "mes" | "mensual" => Some("mes"),
        "year" | "yearly" | "año" | "anual" => Some("año"),
        _ => None,
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let api = StoredValue::new(expect_context::<ApiClient>());
    let auth = expect_context::<RwSignal<AuthState>>();
    let router = expect_context::<RouterHandle>();
    let plans = RwSignal::new(Vec::<Plan>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let checking_out = RwSignal::new(None::<i64>);

    task::spawn(async move {
        match api.get_value().plans().await {
            Ok(list) => plans.set(list),
            Err(err) => {
                log::error!("plans unavailable: {err}");
                error.set(Some("No se pudieron cargar los planes.".to_owned()));
            }
        }
        loading.set(false);
    });

    let subscribe = move |plan_id: i64| {
        if !auth.with_untracked(AuthState::is_authenticated) {
            dialog::alert("Debes iniciar sesión para suscribirte.");
            router.navigate(&Route::Login.path());
            return;
        }
        if checking_out.get_untracked().is_some() {
            return;
        }
        checking_out.set(Some(plan_id));
        let api = api.get_value();
        task::spawn(async move {
            match api.create_checkout_session(plan_id).await {
                Ok(session) => dialog::redirect(&session.init_point),
                Err(err) => report("Error", &err),
            }
            checking_out.set(None);
        });
    };

    view! {
        <div class="page pricing">
            <div class="pricing__intro">
                <h2 class="pricing__eyebrow">"Precios"</h2>
                <p class="pricing__headline">"Planes para todos los tamaños"</p>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingLine text="Cargando planes..."/> }>
                {move || error.get().map(|text| view! { <p class="pricing__error">{text}</p> })}
                <div class="pricing__grid">
                    {move || {
                        plans
                            .get()
                            .into_iter()
                            .map(|plan| {
                                let id = plan.id;
                                let price = price_label(&plan);
                                view! {
                                    <div class="pricing__card">
                                        <h3>{plan.name}</h3>
                                        <p class="pricing__description">
                                            {plan.description.unwrap_or_else(|| "Perfecto para empezar.".to_owned())}
                                        </p>
                                        <p class="pricing__price">{price}</p>
                                        <button
                                            class="btn btn--primary btn--block"
                                            disabled=move || checking_out.get() == Some(id)
                                            on:click=move |_| subscribe(id)
                                        >
                                            {move || if checking_out.get() == Some(id) { "Redirigiendo..." } else { "Suscribirse" }}
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
