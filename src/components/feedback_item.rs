//! Feedback Item Card

use leptos::prelude::*;

use crate::components::card::Card;
use crate::models::FeedbackItem;

#[component]
pub fn FeedbackItemCard(item: FeedbackItem) -> impl IntoView {
    let meta = item.meta();
    let name = item.display_name().to_string();
    let email = item.contact().map(str::to_string);

    view! {
        <Card class="feedback-item">
            <div class="rating-display-inline" style=format!("color: {};", meta.color)>
                <span class="emoji">{meta.emoji}</span>
                <span class="label">{format!("{} - {}", item.rating, meta.label)}</span>
            </div>

            <p class="feedback-comment">{format!("\"{}\"", item.comments)}</p>

            <div class="feedback-author">
                <strong>{name}</strong>
                {email.map(|email| view! {
                    <span class="feedback-email">{format!("({})", email)}</span>
                })}
            </div>
        </Card>
    }
}
