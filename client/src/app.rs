//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one [`SessionManager`] for the page, mirrors its state into
//! a signal, and hands both to descendants through context. `AuthGate` picks
//! the screen with [`select_view`].

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::auth_tabs::AuthTabs;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::net::supabase::SupabaseProvider;
use crate::pages::{confirm::ConfirmPage, dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::route::{AuthMode, View, select_view};
use crate::state::session::SessionManager;

/// Session manager type provided through context.
pub type AppSession = SessionManager<SupabaseProvider>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session: AppSession = SessionManager::new(SupabaseProvider::from_build_env());
    session.subscribe(move |state| auth.set(state.clone()));

    provide_context(auth);
    provide_context(session.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        session.bootstrap().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/arkham.css"/>
        <Title text="Arkham Horror - Scenario Manager"/>

        <Router>
            <Routes fallback=|| view! { <AuthGate/> }>
                <Route path=StaticSegment("") view=AuthGate/>
                <Route path=(StaticSegment("auth"), StaticSegment("confirm")) view=AuthGate/>
            </Routes>
        </Router>
    }
}

/// Chooses the single visible screen.
#[component]
fn AuthGate() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    // Read once at mount; in-page navigation is not followed.
    let path = use_location().pathname.get_untracked();
    let mode = RwSignal::new(AuthMode::default());
    // Re-render only when the selected screen changes.
    let selected = Memo::new(move |_| auth.with(|state| select_view(state, &path, mode.get())));

    move || match selected.get() {
        View::Loading => view! { <LoadingScreen/> }.into_any(),
        View::Confirmation => view! { <ConfirmPage/> }.into_any(),
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::Login => view! {
            <AuthTabs mode=mode/>
            <LoginPage on_switch_to_signup=move |()| mode.set(AuthMode::Signup)/>
        }
        .into_any(),
        View::Signup => view! {
            <AuthTabs mode=mode/>
            <SignupPage on_switch_to_login=move |()| mode.set(AuthMode::Login)/>
        }
        .into_any(),
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <LoadingSpinner size=SpinnerSize::Lg/>
            <p>"Awakening the Ancient Ones..."</p>
        </div>
    }
}
