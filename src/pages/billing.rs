//! Return page for the payment provider's checkout redirect.

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::link::NavLink;
use crate::router::{Location, Route};

/// Outcome of a checkout, read from the redirect's query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingStatus {
    Success,
    Pending,
    Canceled,
    /// No checkout outcome in the URL; plain visit to the billing page.
    Active,
}

impl BillingStatus {
    /// Classify the provider's redirect parameters. One-off payments report
    /// `collection_status` or `status`; subscriptions return a
    /// `preapproval_id`.
    pub fn from_location(location: &Location) -> Self {
        let param = |key: &str| location.query_param(key).filter(|v| !v.is_empty());
        let collection = param("collection_status");
        let payment = param("status");
        let reports = |value: &str| collection.as_deref() == Some(value) || payment.as_deref() == Some(value);

        if reports("approved") || param("preapproval_id").is_some() {
            Self::Success
        } else if reports("rejected") {
            Self::Canceled
        } else if reports("pending") {
            Self::Pending
        } else if param("canceled").is_some() {
            Self::Canceled
        } else {
            Self::Active
        }
    }
}

#[component]
pub fn BillingPage() -> impl IntoView {
    let router = expect_context::<RouterHandle>();
    let status = BillingStatus::from_location(&router.location());
    log::info!("billing return status: {status:?}");

    let body = match status {
        BillingStatus::Success => view! {
            <div class="billing billing--success">
                <h3>"¡Suscripción Exitosa!"</h3>
                <p>"Tu suscripción ha sido procesada correctamente por Mercado Pago."</p>
                <NavLink to=Route::Dashboard.path() class="link">"Ir al Dashboard"</NavLink>
            </div>
        }
            .into_any(),
        BillingStatus::Pending => view! {
            <div class="billing billing--pending">
                <h3>"Pago Pendiente"</h3>
                <p>"Tu pago está siendo procesado. Te avisaremos cuando se confirme."</p>
            </div>
        }
            .into_any(),
        BillingStatus::Canceled => view! {
            <div class="billing billing--canceled">
                <h3>"Pago No Completado"</h3>
                <p>"El proceso de pago no se completó."</p>
                <NavLink to=Route::Pricing.path() class="link">"Volver a Precios"</NavLink>
            </div>
        }
            .into_any(),
        BillingStatus::Active => view! {
            <div class="billing">
                <h3>"Estado de la Cuenta"</h3>
                <p>"Consultando estado..."</p>
                <p class="billing__hint">"Para gestionar pagos, revisa tu correo de Mercado Pago."</p>
            </div>
        }
            .into_any(),
    };

    view! {
        <div class="page page--narrow">
            <h2 class="page-header__title">"Facturación y Suscripción"</h2>
            <div class="card">{body}</div>
        </div>
    }
}
