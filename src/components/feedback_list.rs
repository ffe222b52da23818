//! Feedback List Component
//!
//! Horizontal carousel of feedback cards, or the loading/error/empty
//! placeholder in their place.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::feedback_item::FeedbackItemCard;
use crate::models::FeedbackItem;

/// What the list region shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Error(String),
    Empty,
    Items(Vec<FeedbackItem>),
}

/// Loading wins over error, error wins over content
pub fn list_view(is_loading: bool, error: Option<String>, items: Vec<FeedbackItem>) -> ListView {
    if is_loading {
        ListView::Loading
    } else if let Some(message) = error {
        ListView::Error(message)
    } else if items.is_empty() {
        ListView::Empty
    } else {
        ListView::Items(items)
    }
}

#[component]
pub fn FeedbackList(
    #[prop(into)] items: Signal<Vec<FeedbackItem>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    /// Offered next to the error message when given
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || match list_view(is_loading.get(), error.get(), items.get()) {
            ListView::Loading => view! {
                <Card>
                    <p class="message-loading"><strong>"Loading Feedback..."</strong>" ⏳"</p>
                </Card>
            }.into_any(),
            ListView::Error(message) => view! {
                <Card>
                    <p class="message-error"><strong>"Error: "</strong>{message}" 🙁"</p>
                    {on_retry.map(|retry| view! {
                        <div class="form-actions">
                            <button type="button" class="btn btn-primary" on:click=move |_| retry.run(())>
                                "Try Again"
                            </button>
                        </div>
                    })}
                </Card>
            }.into_any(),
            ListView::Empty => view! {
                <p class="message-info">"No feedback yet! Be the first to submit a review."</p>
            }.into_any(),
            ListView::Items(items) => view! {
                <div class="feedback-carousel">
                    <div class="feedback-carousel-inner">
                        <For
                            each=move || items.clone()
                            key=|item| item.id.clone()
                            children=move |item: FeedbackItem| view! {
                                <div class="carousel-item-wrapper">
                                    <FeedbackItemCard item=item />
                                </div>
                            }
                        />
                    </div>
                </div>
            }.into_any(),
        }}
    }
}
