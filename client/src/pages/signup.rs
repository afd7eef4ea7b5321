//! Account registration form and the "check your email" panel.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::state::forms::{SignupCredentials, SignupForm};
use crate::state::route::ROOT_PATH;
use crate::util::navigation::{BrowserNavigator, Navigator};

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    fn slot(self, creds: &mut SignupCredentials) -> &mut String {
        match self {
            Self::Name => &mut creds.name,
            Self::Email => &mut creds.email,
            Self::Password => &mut creds.password,
            Self::ConfirmPassword => &mut creds.confirm_password,
        }
    }

    fn value(self, creds: &SignupCredentials) -> String {
        match self {
            Self::Name => creds.name.clone(),
            Self::Email => creds.email.clone(),
            Self::Password => creds.password.clone(),
            Self::ConfirmPassword => creds.confirm_password.clone(),
        }
    }
}

/// Two-way bind one signup field to an input.
fn field_input(
    form: RwSignal<SignupForm>,
    field: Field,
    id: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            id=id
            class="auth-input"
            type=kind
            placeholder=placeholder
            required=true
            disabled=move || form.with(|f| f.status.is_loading)
            prop:value=move || form.with(|f| field.value(&f.credentials))
            on:input=move |ev| form.update(|f| *field.slot(&mut f.credentials) = event_target_value(&ev))
        />
    }
}

#[component]
pub fn SignupPage(#[prop(into)] on_switch_to_login: Callback<()>) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let form = RwSignal::new(SignupForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(creds) = form.try_update(SignupForm::begin_submit).flatten() else {
            return;
        };
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = session.sign_up(&creds.email, &creds.password, &creds.name).await;
            if result.is_ok() {
                log::info!("registration successful");
            }
            let _ = form.try_update(|f| f.complete(result));
        });
    };

    let busy = move || form.with(|f| f.status.is_loading);

    let confirmation_panel = move || {
        view! {
            <div class="auth-page">
                <div class="parchment parchment--centered">
                    <div class="badge badge--success">"✓"</div>
                    <h1>"Check Your Email"</h1>
                    <p>
                        "We've sent you a confirmation email. Please click the link in your "
                        "email to activate your investigator account."
                    </p>
                    <p class="parchment__hint">
                        "Don't see the email? Check your spam folder or try registering again."
                    </p>
                    <button class="auth-button" on:click=move |_| form.update(SignupForm::try_again)>
                        "Try Again"
                    </button>
                    <button class="auth-button auth-button--secondary" on:click=move |_| BrowserNavigator.navigate(ROOT_PATH)>
                        "Back to Login"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <Show when=move || !form.with(|f| f.confirmation_sent) fallback=confirmation_panel>
            <div class="auth-page">
                <div class="parchment">
                    <header class="parchment__header">
                        <h1>"Registrarse"</h1>
                        <p class="parchment__subtitle">"Arkham Horror - Scenario Manager"</p>
                    </header>
                    <form class="auth-form" on:submit=on_submit.clone()>
                        <Show when=move || form.with(|f| f.status.error.is_some())>
                            <div class="auth-error">{move || form.with(|f| f.status.error.clone().unwrap_or_default())}</div>
                        </Show>
                        <label for="name">"Nombre del Investigador"</label>
                        {field_input(form, Field::Name, "name", "text", "Introduce tu nombre")}
                        <label for="email">"Correo Electrónico"</label>
                        {field_input(form, Field::Email, "email", "email", "Introduce tu correo")}
                        <label for="password">"Contraseña"</label>
                        {field_input(form, Field::Password, "password", "password", "Mínimo 6 caracteres")}
                        <label for="confirm-password">"Confirmar Contraseña"</label>
                        {field_input(form, Field::ConfirmPassword, "confirm-password", "password", "Repite tu contraseña")}
                        <button class="auth-button" type="submit" disabled=busy>
                            <Show when=busy fallback=|| view! { <span>"Crear Cuenta"</span> }>
                                <LoadingSpinner size=SpinnerSize::Sm/>
                                <span>"Registrando..."</span>
                            </Show>
                        </button>
                    </form>
                    <p class="auth-switch">
                        "¿Ya tienes cuenta? "
                        <button class="auth-link" on:click=move |_| on_switch_to_login.run(())>
                            "Iniciar Sesión"
                        </button>
                    </p>
                </div>
            </div>
        </Show>
    }
}
