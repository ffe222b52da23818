//! Rating Selector Component
//!
//! One colored button per point on the 1-5 scale.

use leptos::prelude::*;

use crate::models::RATINGS;

#[component]
pub fn RatingSelector(
    #[prop(into)] selected: Signal<u8>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_select: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="rating-bar-selector">
            {RATINGS.iter().map(|meta| {
                let value = meta.value;
                view! {
                    <button
                        type="button"
                        class=move || if selected.get() == value { "rating-option selected" } else { "rating-option" }
                        style=format!("background-color: {};", meta.color)
                        disabled=move || disabled.get()
                        on:click=move |_| on_select.run(value)
                    >
                        <span class="emoji">{meta.emoji}</span>
                        <span class="label">{format!("{} - {}", value, meta.label)}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
