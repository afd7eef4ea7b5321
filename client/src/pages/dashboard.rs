//! Main menu shown to a signed-in investigator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Campaign features are not wired yet; menu entries only report the
//! selection. Sign-out failures are logged by the session manager and the
//! button simply re-enables.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::types::User;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Scenarios,
    NewCampaign,
    Settings,
    Investigations,
}

impl MenuEntry {
    pub const ALL: [Self; 4] = [Self::Scenarios, Self::NewCampaign, Self::Settings, Self::Investigations];

    pub fn label(self) -> &'static str {
        match self {
            Self::Scenarios => "Ver Escenarios",
            Self::NewCampaign => "Crear Nueva Campaña",
            Self::Settings => "Configuración",
            Self::Investigations => "Mis Investigaciones",
        }
    }
}

fn welcome_text(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Bienvenido, {}", user.display_name()),
        None => "Bienvenido".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let signing_out = RwSignal::new(false);

    let on_sign_out = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            if session.sign_out().await.is_ok() {
                log::info!("signed out");
            }
            let _ = signing_out.try_set(false);
        });
    };

    view! {
        <div class="dashboard-page">
            <button class="sign-out-button" on:click=on_sign_out disabled=move || signing_out.get()>
                "Cerrar Sesión"
            </button>
            <div class="parchment">
                <header class="parchment__header">
                    <h1>"Menú Principal"</h1>
                    <p class="parchment__subtitle">{move || auth.with(|s| welcome_text(s.user.as_ref()))}</p>
                </header>
                <div class="menu">
                    {MenuEntry::ALL
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <button
                                    class="menu__item"
                                    on:click=move |_| log::info!("menu selected: {}", entry.label())
                                >
                                    {entry.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <footer class="parchment__footer">"Arkham Horror - Scenario Manager"</footer>
            </div>
        </div>
    }
}
