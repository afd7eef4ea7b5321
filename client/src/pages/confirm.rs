//! Landing page for emailed confirmation and recovery links.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use leptos::prelude::*;

use crate::state::confirm::ConfirmationHandler;
use crate::util::location;
use crate::util::navigation::BrowserNavigator;

fn heading(success: bool) -> &'static str {
    if success { "¡Bienvenido!" } else { "Error de Confirmación" }
}

fn return_label(success: bool) -> &'static str {
    if success { "Ir al Panel Principal" } else { "Volver al Login" }
}

#[component]
pub fn ConfirmPage() -> impl IntoView {
    // One handler per mount; `run` settles before the first render.
    let mut handler = ConfirmationHandler::new(BrowserNavigator);
    let outcome = handler.run(&location::current_fragment()).clone();
    let handler = StoredValue::new_local(handler);

    let success = outcome.is_success();
    let message = outcome.message().unwrap_or_default().to_owned();
    let (badge_class, badge_mark) = if success { ("badge badge--success", "✓") } else { ("badge badge--error", "✕") };
    view! {
        <div class="auth-page">
            <div class="parchment parchment--centered">
                <header class="parchment__header">
                    <h1>{heading(success)}</h1>
                </header>
                <div class=badge_class>{badge_mark}</div>
                <p class="confirm-message">{message}</p>
                <Show when=move || success>
                    <p class="parchment__hint">"Redirigiendo al panel principal en unos segundos..."</p>
                </Show>
                <button class="auth-button" on:click=move |_| handler.update_value(ConfirmationHandler::return_to_start)>
                    {return_label(success)}
                </button>
            </div>
        </div>
    }
}
