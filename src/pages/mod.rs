//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data loading and form state and delegates chrome to
//! `components`. `render` is the single mapping from `Route` to page; it is
//! an exhaustive match, so a route without a page does not compile.

pub mod archives;
pub mod billing;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod preventive;
pub mod pricing;
pub mod register;
pub mod settings;
pub mod stock;
pub mod work_orders;

use leptos::prelude::*;

use crate::net::ApiError;
use crate::router::Route;
use crate::util::dialog;

/// View for `route`.
pub fn render(route: Route) -> AnyView {
    match route {
        Route::Home => view! { <home::HomePage/> }.into_any(),
        Route::Login => view! { <login::LoginPage/> }.into_any(),
        Route::Register => view! { <register::RegisterPage/> }.into_any(),
        Route::Pricing => view! { <pricing::PricingPage/> }.into_any(),
        Route::Billing => view! { <billing::BillingPage/> }.into_any(),
        Route::Dashboard => view! { <dashboard::DashboardPage/> }.into_any(),
        Route::Sectors => view! { <archives::sectors::SectorsPage/> }.into_any(),
        Route::Assets => view! { <archives::assets::AssetsPage/> }.into_any(),
        Route::Workers => view! { <archives::workers::WorkersPage/> }.into_any(),
        Route::Tools => view! { <archives::tools::ToolsPage/> }.into_any(),
        Route::SpareParts => view! { <archives::spare_parts::SparePartsPage/> }.into_any(),
        Route::Suppliers => view! { <archives::suppliers::SuppliersPage/> }.into_any(),
        Route::PreventivePlans => view! { <preventive::plans::PreventivePlansPage/> }.into_any(),
        Route::PreventivePlanNew => view! { <preventive::plan_editor::PlanEditorPage/> }.into_any(),
        Route::WorkOrders => view! { <work_orders::WorkOrdersPage/> }.into_any(),
        Route::PurchaseOrders => view! { <stock::purchase_orders::PurchaseOrdersPage/> }.into_any(),
        Route::PurchaseOrderNew => view! { <stock::purchase_order_editor::PurchaseOrderEditorPage/> }.into_any(),
        Route::PurchaseOrderEdit(id) => {
            view! { <stock::purchase_order_editor::PurchaseOrderEditorPage order_id=id/> }.into_any()
        }
        Route::GeneralSettings => view! { <settings::GeneralSettingsPage/> }.into_any(),
    }
}

/// Log a failed call and tell the viewer with a blocking alert.
pub(crate) fn report(action: &str, err: &ApiError) {
    log::error!("{action}: {err}");
    dialog::alert(&format!("{action}: {err}"));
}
