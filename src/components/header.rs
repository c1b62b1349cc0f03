//! Top navigation bar.
//!
//! Anonymous viewers get the public links; authenticated viewers get the
//! dropdown menus, the dashboard link and logout. The brand shows the
//! company name and logo from `CompanyState`.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::app::RouterHandle;
use crate::components::link::NavLink;
use crate::net::ApiClient;
use crate::router::Route;
use crate::state::auth::{self, AuthState};
use crate::state::company::CompanyState;

/// One dropdown in the authenticated navigation.
pub struct NavMenu {
    pub label: &'static str,
    pub items: &'static [(&'static str, Route)],
}

pub static MENUS: [NavMenu; 4] = [
    NavMenu {
        label: "Mantenimiento",
        items: &[("Planes Preventivos", Route::PreventivePlans), ("Órdenes de Trabajo", Route::WorkOrders)],
    },
    NavMenu {
        label: "Archivos",
        items: &[
            ("Sectores", Route::Sectors),
            ("Activos", Route::Assets),
            ("Personal", Route::Workers),
            ("Herramientas", Route::Tools),
        ],
    },
    NavMenu {
        label: "Stock",
        items: &[
            ("Repuestos", Route::SpareParts),
            ("Proveedores", Route::Suppliers),
            ("Órdenes de Compra", Route::PurchaseOrders),
        ],
    },
    NavMenu { label: "Configuración", items: &[("General", Route::GeneralSettings)] },
];

pub static PUBLIC_LINKS: [(&str, Route); 3] =
    [("Ingresar", Route::Login), ("Registro", Route::Register), ("Precios", Route::Pricing)];

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let company = expect_context::<RwSignal<CompanyState>>();
    let api = expect_context::<ApiClient>();
    let router = expect_context::<RouterHandle>();

    // Index into MENUS of the open dropdown.
    let open_menu = RwSignal::new(None::<usize>);

    let logo_src = move || company.with(|c| c.logo_src(api.config()));
    let on_logout = move |_| {
        open_menu.set(None);
        auth.set(auth::sign_out());
        router.navigate(&Route::Login.path());
    };

    view! {
        <header class="app-header">
            <NavLink to=Route::Home.path() class="app-header__brand">
                {move || logo_src().map(|src| view! { <img class="app-header__logo" src=src alt="Logo"/> })}
                <span class="app-header__name">{move || company.with(|c| c.name.clone())}</span>
            </NavLink>
            <nav class="app-header__nav">
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=|| {
                        PUBLIC_LINKS
                            .iter()
                            .map(|(label, route)| {
                                view! {
                                    <NavLink to=route.path() class="app-header__link">
                                        {*label}
                                    </NavLink>
                                }
                            })
                            .collect_view()
                    }
                >
                    {MENUS
                        .iter()
                        .enumerate()
                        .map(|(index, menu)| view! { <Dropdown index=index menu=menu open_menu=open_menu/> })
                        .collect_view()}
                    <NavLink to=Route::Dashboard.path() class="app-header__link">
                        "Dashboard"
                    </NavLink>
                    <button class="app-header__link app-header__logout" on:click=on_logout>
                        "Salir"
                    </button>
                </Show>
            </nav>
        </header>
    }
}

#[component]
fn Dropdown(index: usize, menu: &'static NavMenu, open_menu: RwSignal<Option<usize>>) -> impl IntoView {
    let is_open = move || open_menu.get() == Some(index);
    let toggle = move |_| open_menu.update(|open| *open = if *open == Some(index) { None } else { Some(index) });

    view! {
        <div class="dropdown" class:dropdown--open=is_open>
            <button class="app-header__link dropdown__toggle" on:click=toggle>
                {menu.label}
                " ▾"
            </button>
            <Show when=is_open>
                <div class="dropdown__menu" on:click=move |_| open_menu.set(None)>
                    {menu
                        .items
                        .iter()
                        .map(|(label, route)| {
                            view! {
                                <NavLink to=route.path() class="dropdown__item">
                                    {*label}
                                </NavLink>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
