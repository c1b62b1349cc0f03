//! Modal form shell used by list pages for create/edit.

use leptos::prelude::*;

#[component]
pub fn FormDialog(
    #[prop(into)] heading: Signal<String>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{move || heading.get()}</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {children()}
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancelar"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Guardar"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Title block with the page's primary actions on the right.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h1 class="page-header__title">{title}</h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </div>
            <div class="page-header__actions">{children.map(|children| children())}</div>
        </div>
    }
}
