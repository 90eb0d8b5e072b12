//! Conversation view: history, suggestions, and the prompt input.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::suggestion_bar::SuggestionBar;
use crate::components::turn_bubble::TurnBubble;
use crate::net::gateway::{ChatGateway, exchange};
use crate::state::chat::ConversationState;
#[cfg(feature = "hydrate")]
use crate::util::scroll::{ScrollTracker, pin_to_bottom};

/// Heading shown above the conversation.
pub const TITLE: &str = "NBA Stats Assistant";

/// Chat view owning one conversation for its lifetime.
///
/// Reads the `Arc<dyn ChatGateway>` provided by the app and sends at most one
/// query at a time through it.
#[component]
pub fn ChatView() -> impl IntoView {
    let gateway = StoredValue::new(expect_context::<Arc<dyn ChatGateway>>());
    let state = RwSignal::new(ConversationState::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // History is append-only, so its length changes exactly when it does.
    let turn_count = Memo::new(move |_| state.with(|s| s.turns().len()));
    let pending = Memo::new(move |_| state.with(ConversationState::is_pending));
    let can_submit = Memo::new(move |_| state.with(ConversationState::can_submit));
    let scroll_seq = Memo::new(move |_| state.with(|s| s.scroll_seq));

    #[cfg(feature = "hydrate")]
    let tracker = StoredValue::new(ScrollTracker::default());

    Effect::new(move || {
        let _ = scroll_seq.get();

        #[cfg(feature = "hydrate")]
        leptos::leptos_dom::helpers::request_animation_frame(move || {
            let seq = scroll_seq.get_untracked();
            if !tracker.try_update_value(|t| t.claim(seq)).unwrap_or(false) {
                return;
            }
            pin_to_bottom(messages_ref.get_untracked());
        });
    });

    let dispatch = move |query: Option<String>| {
        let Some(query) = query else {
            return;
        };
        let gateway = gateway.get_value();
        leptos::task::spawn_local(async move {
            let outcome = exchange(gateway.as_ref(), &query).await;
            state.update(|s| s.settle(outcome));
        });
    };

    let submit = move || dispatch(state.try_update(ConversationState::submit).flatten());

    let on_select = Callback::new(move |suggestion: &'static str| {
        dispatch(state.try_update(|s| s.select_suggestion(suggestion)).flatten());
    });

    let on_click = move |_| submit();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <div class="chat-view">
            <header class="chat-view__header">
                <h1>{TITLE}</h1>
            </header>

            <div class="chat-view__messages" node_ref=messages_ref>
                {move || {
                    let _ = turn_count.get();
                    state
                        .with_untracked(|s| s.turns().to_vec())
                        .into_iter()
                        .map(|turn| view! { <TurnBubble turn=turn/> })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    pending
                        .get()
                        .then(|| view! { <div class="chat-view__loading">"Thinking..."</div> })
                }}
            </div>

            <SuggestionBar disabled=pending on_select=on_select/>

            <div class="chat-view__input-row">
                <input
                    class="chat-view__input"
                    type="text"
                    placeholder="Ask about NBA games..."
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft = value);
                    }
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary" on:click=on_click disabled=move || !can_submit.get()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
