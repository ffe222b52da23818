//! Card Component
//!
//! Shared surface for the form, list states and feedback items.

use leptos::prelude::*;

/// Rounded, shadowed container
///
/// # Arguments
/// * `reverse` - Dark variant
/// * `class` - Extra classes appended after `card`
#[component]
pub fn Card(
    #[prop(optional)] reverse: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_class(reverse, &class)>
            {children()}
        </div>
    }
}

fn card_class(reverse: bool, extra: &str) -> String {
    let mut class = String::from("card");
    if reverse {
        class.push_str(" reverse");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}
