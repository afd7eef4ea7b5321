//! Corner tab selector switching between the login and signup forms.
//!
//! Writes only the local [`AuthMode`] signal; the session is never touched.

use leptos::prelude::*;

use crate::state::route::AuthMode;

fn tab_class(active: bool) -> &'static str {
    if active { "auth-tab auth-tab--active" } else { "auth-tab" }
}

#[component]
pub fn AuthTabs(mode: RwSignal<AuthMode>) -> impl IntoView {
    view! {
        <nav class="auth-tabs">
            <button
                class=move || tab_class(mode.get() == AuthMode::Login)
                on:click=move |_| mode.set(AuthMode::Login)
            >
                "Iniciar Sesión"
            </button>
            <button
                class=move || tab_class(mode.get() == AuthMode::Signup)
                on:click=move |_| mode.set(AuthMode::Signup)
            >
                "Registrarse"
            </button>
        </nav>
    }
}
