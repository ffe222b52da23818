//! Feedback Frontend App
//!
//! Root composition: form on one side, stats and recent reviews on the other.

use leptos::prelude::*;

use crate::api::HttpFeedbackApi;
use crate::components::{FeedbackForm, FeedbackList, Header, StatsSummary};
use crate::config::AppConfig;
use crate::store::FeedbackStore;
use crate::styles::stylesheet;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = HttpFeedbackApi::new(config.api_url.clone());
    log::info!("[APP] feedback endpoint: {}", api.endpoint());

    // Loads the collection once on creation
    let store = FeedbackStore::new(api);
    let actions = store.actions();

    let items = store.items();
    let is_loading = store.is_loading();
    let error = store.error();
    let stats = store.stats();
    let show_stats = move || !is_loading.get() && error.with(Option::is_none);

    let phase = store.phase();
    Effect::new(move |_| {
        log::debug!("[APP] store phase: {:?}", phase.get());
    });

    view! {
        <style>{stylesheet()}</style>
        <Header />
        <div class="container">
            <div class="main-app-grid">
                <section class="form-section">
                    <h2 class="section-title">"💌 Share Your Experience"</h2>
                    <FeedbackForm
                        actions=actions
                        is_loading=is_loading
                        success_notice_ms=config.success_notice_ms
                    />
                </section>

                <section class="stats-and-list-section">
                    <h2 class="section-title">"🌟 Review Snapshot"</h2>
                    <Show when=show_stats>
                        <StatsSummary stats=stats />
                    </Show>

                    <h3 class="list-title">"Recent Reviews"</h3>
                    <FeedbackList
                        items=items
                        is_loading=is_loading
                        error=error
                        on_retry=Callback::new(move |_| actions.refresh())
                    />
                </section>
            </div>
        </div>
    }
}
