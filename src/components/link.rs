//! In-app anchor that navigates through the router instead of reloading.

use leptos::prelude::*;

use crate::app::RouterHandle;

/// `<a>` whose click pushes `to` onto history. Modified clicks (new tab)
/// fall through to the browser.
#[component]
pub fn NavLink(#[prop(into)] to: String, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let router = expect_context::<RouterHandle>();
    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
