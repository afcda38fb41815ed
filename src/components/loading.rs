//! Status Line Component
//!
//! Centered single-line status display for the loading and error states.

use leptos::*;

/// Visual variant of a status line
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum StatusVariant {
    Info,
    Error,
}

/// Centered status line filling the content area
#[component]
pub fn StatusLine(
    #[prop(into)]
    message: String,
    variant: StatusVariant,
) -> impl IntoView {
    let text_class = match variant {
        StatusVariant::Info => "text-lg",
        StatusVariant::Error => "text-lg text-red-500",
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] space-y-3">
            {matches!(variant, StatusVariant::Info).then(|| view! {
                <div class="loading-spinner w-8 h-8" />
            })}
            <p class=text_class>{message}</p>
        </div>
    }
}
