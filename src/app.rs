//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the three shared containers (`AuthState`, `CompanyState`,
//! `RouterHandle`) plus the `ApiClient`, and is the only place that wires
//! browser events (popstate) and auth changes into the navigator.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::header::Header;
use crate::components::notice::LoadingLine;
use crate::config::ClientConfig;
use crate::net::ApiClient;
use crate::pages;
use crate::router::{BrowserHistory, Decision, Location, Navigator};
use crate::state::auth::AuthState;
use crate::state::company::CompanyState;
use crate::util::task::spawn;

/// Navigation handle provided to every page and component.
///
/// All mutation goes through the wrapped `Navigator`, which settles the
/// auth guard synchronously; `decision` is the settled outcome rendering
/// reads.
#[derive(Clone, Copy)]
pub struct RouterHandle {
    nav: RwSignal<Navigator<BrowserHistory>>,
    decision: RwSignal<Decision>,
    auth: RwSignal<AuthState>,
}

impl RouterHandle {
    fn new(auth: RwSignal<AuthState>) -> Self {
        let mut navigator = Navigator::new(BrowserHistory);
        let decision = navigator.settle(auth.get_untracked().status());
        Self { nav: RwSignal::new(navigator), decision: RwSignal::new(decision), auth }
    }

    /// Push `target` (path plus optional query) and render its page.
    pub fn navigate(&self, target: &str) {
        let status = self.auth.get_untracked().status();
        let mut decision = Decision::Pending;
        self.nav.update(|nav| decision = nav.navigate(target, status));
        self.decision.set(decision);
    }

    /// Re-evaluate the guard for the current location.
    pub fn settle(&self) {
        let status = self.auth.get_untracked().status();
        let mut decision = Decision::Pending;
        self.nav.update(|nav| decision = nav.settle(status));
        self.decision.set(decision);
    }

    fn pop_state(&self) {
        let status = self.auth.get_untracked().status();
        let mut decision = Decision::Pending;
        self.nav.update(|nav| decision = nav.pop_state(status));
        self.decision.set(decision);
    }

    pub fn decision(&self) -> Decision {
        self.decision.get()
    }

    pub fn location(&self) -> Location {
        self.nav.with(|nav| nav.location().clone())
    }

    pub fn query_param(&self, key: &str) -> Option<String> {
        self.nav.with(|nav| nav.location().query_param(key))
    }
}

/// Reload the header's company profile from the backend.
pub fn refresh_company(api: ApiClient, company: RwSignal<CompanyState>) {
    company.update(|c| c.loading = true);
    spawn(async move {
        match api.company_settings().await {
            Ok(settings) => company.update(|c| c.apply(&settings)),
            Err(err) => {
                log::warn!("company settings unavailable: {err}");
                company.update(|c| c.loading = false);
            }
        }
    });
}

/// Root application component.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::new(config);
    let auth = RwSignal::new(AuthState::default());
    let company = RwSignal::new(CompanyState::default());
    let router = RouterHandle::new(auth);

    provide_context(api.clone());
    provide_context(auth);
    provide_context(company);
    provide_context(router);

    {
        let api = api.clone();
        spawn(async move {
            let restored = crate::state::auth::restore_session(&api).await;
            auth.set(restored);
        });
    }

    // Loading -> ready, login and logout all re-run the guard.
    let status = Memo::new(move |_| auth.with(AuthState::status));
    Effect::new(move || {
        status.track();
        router.settle();
    });

    let user_id = Memo::new(move |_| auth.with(|a| a.user.as_ref().map(|u| u.id)));
    Effect::new(move || match user_id.get() {
        Some(_) => refresh_company(api.clone(), company),
        None => company.update(CompanyState::reset),
    });

    #[cfg(feature = "csr")]
    {
        let _ = window_event_listener(leptos::ev::popstate, move |_| router.pop_state());
    }

    let decision = Memo::new(move |_| router.decision());
    let title = move || match decision.get().route() {
        Some(route) => format!("{} | {}", route.title(), company.with(|c| c.name.clone())),
        None => company.with(|c| c.name.clone()),
    };

    view! {
        <Stylesheet id="mantenpro" href="/pkg/mantenpro.css"/>
        <Title text=title/>

        <Header/>
        <main class="app-main">
            {move || match decision.get() {
                Decision::Pending => view! { <LoadingLine/> }.into_any(),
                Decision::Render(route) | Decision::Redirect(route) => pages::render(route),
            }}
        </main>
    }
}
