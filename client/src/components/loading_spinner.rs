//! Spinning ring shown while a session check or provider call is pending.

#[cfg(test)]
#[path = "loading_spinner_test.rs"]
mod loading_spinner_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerTint {
    #[default]
    Gold,
    Purple,
    Blue,
}

fn spinner_class(size: SpinnerSize, tint: SpinnerTint) -> String {
    let size = match size {
        SpinnerSize::Sm => "spinner--sm",
        SpinnerSize::Md => "spinner--md",
        SpinnerSize::Lg => "spinner--lg",
    };
    let tint = match tint {
        SpinnerTint::Gold => "spinner--gold",
        SpinnerTint::Purple => "spinner--purple",
        SpinnerTint::Blue => "spinner--blue",
    };
    format!("spinner {size} {tint}")
}

#[component]
pub fn LoadingSpinner(#[prop(optional)] size: SpinnerSize, #[prop(optional)] tint: SpinnerTint) -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class=spinner_class(size, tint)></div>
        </div>
    }
}
