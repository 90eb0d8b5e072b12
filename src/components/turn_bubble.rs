//! A single conversation turn and the evidence cited under bot answers.

#[cfg(test)]
#[path = "turn_bubble_test.rs"]
mod turn_bubble_test;

use leptos::prelude::*;

use crate::state::chat::{EvidenceItem, Speaker, Turn};

fn evidence_label(item: &EvidenceItem) -> String {
    format!("{} #{}", item.source_table, item.record_id)
}

/// One message row, styled by speaker.
#[component]
pub fn TurnBubble(turn: Turn) -> impl IntoView {
    let Turn { speaker, text, evidence } = turn;
    let is_bot = speaker == Speaker::Bot;
    let is_user = speaker == Speaker::User;

    view! {
        <div
            class="chat-view__message"
            class:chat-view__message--bot=is_bot
            class:chat-view__message--user=is_user
        >
            <span class="chat-view__role">{speaker.as_str()}</span>
            <div class="chat-view__content">{text}</div>
            {(!evidence.is_empty()).then(|| view! { <EvidenceList items=evidence/> })}
        </div>
    }
}

/// Citations attached to a bot answer.
#[component]
pub fn EvidenceList(items: Vec<EvidenceItem>) -> impl IntoView {
    view! {
        <ul class="evidence-list">
            {items
                .into_iter()
                .map(|item| {
                    let label = evidence_label(&item);
                    view! {
                        <li class="evidence-list__item">
                            <span class="evidence-list__source">{label}</span>
                            {item
                                .details
                                .map(|details| view! { <span class="evidence-list__details">{details}</span> })}
                            {item.date.map(|date| view! { <span class="evidence-list__date">{date}</span> })}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
