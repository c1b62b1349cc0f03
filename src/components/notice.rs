//! Inline status messages and the loading placeholder.

use leptos::prelude::*;

/// Message kind for an inline notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "notice notice--info",
            Self::Success => "notice notice--success",
            Self::Error => "notice notice--error",
        }
    }
}

/// Notice region bound to a page's message signal; hidden when empty.
#[component]
pub fn Notice(message: RwSignal<Option<(Tone, String)>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            {move || {
                message
                    .get()
                    .map(|(tone, text)| {
                        view! {
                            <p class=tone.class() role="status">
                                {text}
                                <button class="notice__close" on:click=move |_| message.set(None)>
                                    "×"
                                </button>
                            </p>
                        }
                    })
            }}
        </Show>
    }
}

#[component]
pub fn LoadingLine(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    let text = text.unwrap_or_else(|| "Cargando...".to_owned());
    view! { <p class="loading-line">{text}</p> }
}
