//! One-click example questions.

use leptos::prelude::*;

use crate::state::chat::SUGGESTIONS;

/// Row of suggestion buttons. Disabled while a request is pending.
#[component]
pub fn SuggestionBar(#[prop(into)] disabled: Signal<bool>, on_select: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="suggestion-bar">
            {SUGGESTIONS
                .iter()
                .map(|&suggestion| {
                    view! {
                        <button
                            class="btn suggestion-bar__item"
                            disabled=move || disabled.get()
                            on:click=move |_| on_select.run(suggestion)
                        >
                            {suggestion}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
