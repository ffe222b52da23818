//! Stats Summary Component
//!
//! Average rating, review count and the positive share as a bar.

use leptos::prelude::*;

use crate::stats::FeedbackStats;

#[component]
pub fn StatsSummary(#[prop(into)] stats: Signal<FeedbackStats>) -> impl IntoView {
    let percent = move || stats.get().positive_percent;

    view! {
        <div class="feedback-stats">
            <h2 class="stats-average">{move || stats.get().average_label()}</h2>
            <p class="stats-count">
                {move || format!("Average Rating ({} Reviews)", stats.get().count)}
            </p>

            <div class="stats-positive">
                <p class="stats-positive-label">
                    "Positive Feedback: "
                    <strong>{move || format!("{}%", percent())}</strong>
                </p>
                <div class="stats-bar">
                    <div class="stats-bar-fill" style=move || format!("width: {}%;", percent())></div>
                </div>
            </div>
        </div>
    }
}
