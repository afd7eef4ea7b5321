//! Email + password sign-in form.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::state::forms::LoginForm;

#[component]
pub fn LoginPage(#[prop(into)] on_switch_to_signup: Callback<()>) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(creds) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = session.sign_in(&creds.email, &creds.password).await;
            if result.is_ok() {
                log::info!("login successful");
            }
            // The page unmounts on success, so the signal may already be gone.
            let _ = form.try_update(|f| f.complete(result));
        });
    };

    let busy = move || form.with(|f| f.status.is_loading);

    view! {
        <div class="auth-page">
            <div class="parchment">
                <header class="parchment__header">
                    <h1>"Iniciar Sesión"</h1>
                    <p class="parchment__subtitle">"Arkham Horror - Scenario Manager"</p>
                </header>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || form.with(|f| f.status.error.is_some())>
                        <div class="auth-error">{move || form.with(|f| f.status.error.clone().unwrap_or_default())}</div>
                    </Show>
                    <label for="email">"Correo Electrónico"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="Introduce tu correo"
                        required=true
                        disabled=busy
                        prop:value=move || form.with(|f| f.credentials.email.clone())
                        on:input=move |ev| form.update(|f| f.credentials.email = event_target_value(&ev))
                    />
                    <label for="password">"Contraseña"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Introduce tu contraseña"
                        required=true
                        disabled=busy
                        prop:value=move || form.with(|f| f.credentials.password.clone())
                        on:input=move |ev| form.update(|f| f.credentials.password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=busy>
                        <Show when=busy fallback=|| view! { <span>"Entrar"</span> }>
                            <LoadingSpinner size=SpinnerSize::Sm/>
                            <span>"Entrando..."</span>
                        </Show>
                    </button>
                </form>
                <p class="auth-switch">
                    "¿No tienes cuenta? "
                    <button class="auth-link" on:click=move |_| on_switch_to_signup.run(())>
                        "Registrarse"
                    </button>
                </p>
            </div>
        </div>
    }
}
