//! Page Header

use leptos::prelude::*;

#[component]
pub fn Header(
    #[prop(into, default = "Feedback Application".to_string())] text: String,
) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1>{text}</h1>
        </header>
    }
}
