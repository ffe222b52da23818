//! Feedback Form Component
//!
//! Rating selector plus comment/name/email fields. Validates while typing
//! and again on submit, then hands the draft to the store.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::card::Card;
use crate::components::rating_selector::RatingSelector;
use crate::models::{FeedbackDraft, FeedbackItem};
use crate::store::{FeedbackActions, SubmitError};
use crate::validation::comment_hint;

/// Message under the submit button
#[derive(Debug, Clone, PartialEq)]
pub enum FormNotice {
    Error(String),
    Success,
}

/// A fresh success hides any pending validation message
pub fn form_notice(message: Option<String>, submitted: bool) -> Option<FormNotice> {
    if submitted {
        Some(FormNotice::Success)
    } else {
        message.map(FormNotice::Error)
    }
}

/// Field values and the success notice, independent of any signal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub draft: FeedbackDraft,
    pub submitted: bool,
    notice_token: u32,
}

impl FormState {
    /// Apply the outcome of a submit.
    ///
    /// A success resets every field and returns the token the notice timer
    /// must present to [`FormState::expire_notice`]. A failure keeps the
    /// draft so the visitor can retry.
    pub fn on_submit_result(&mut self, result: &Result<FeedbackItem, SubmitError>) -> Option<u32> {
        match result {
            Ok(_) => {
                self.draft = FeedbackDraft::default();
                self.submitted = true;
                self.notice_token = self.notice_token.wrapping_add(1);
                Some(self.notice_token)
            }
            Err(_) => {
                self.submitted = false;
                None
            }
        }
    }

    /// Hide the notice unless a newer success has replaced it
    pub fn expire_notice(&mut self, token: u32) -> bool {
        if self.submitted && token == self.notice_token {
            self.submitted = false;
            true
        } else {
            false
        }
    }
}

#[component]
pub fn FeedbackForm(
    actions: FeedbackActions,
    #[prop(into)] is_loading: Signal<bool>,
    /// How long the success notice stays up
    success_notice_ms: u32,
) -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let (message, set_message) = signal::<Option<String>>(None);
    let comments = Memo::new(move |_| form.with(|f| f.draft.comments.clone()));
    let rating = Signal::derive(move || form.with(|f| f.draft.rating));

    Effect::new(move |_| {
        let hint = comments.with(|text| comment_hint(text));
        set_message.set(hint.map(str::to_string));
    });

    let is_invalid = move || is_loading.get() || form.with(|f| f.draft.validate().is_err());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = form.with_untracked(|f| f.draft.clone());
        if let Err(err) = draft.validate() {
            set_message.set(Some(err.to_string()));
            return;
        }
        if is_loading.get_untracked() {
            return;
        }

        spawn_local(async move {
            let result = actions.submit(draft).await;
            match &result {
                Ok(item) => log::info!("[FORM] feedback {} submitted", item.id),
                // The store shows the error; the draft stays for a retry
                Err(err) => log::warn!("[FORM] submit failed: {}", err),
            }
            let Some(Some(token)) = form.try_update(|f| f.on_submit_result(&result)) else {
                return;
            };
            TimeoutFuture::new(success_notice_ms).await;
            let _ = form.try_update(|f| f.expire_notice(token));
        });
    };

    view! {
        <Card>
            <form on:submit=handle_submit>
                <h3 class="form-heading">"How would you rate your experience?"</h3>

                <RatingSelector
                    selected=rating
                    disabled=is_loading
                    on_select=move |value: u8| form.update(|f| f.draft.rating = value)
                />

                <div class="form-control">
                    <label for="comments">"Comments"</label>
                    <textarea
                        id="comments"
                        name="comments"
                        placeholder="Tell us about your experience..."
                        prop:value=move || comments.get()
                        on:input=move |ev| form.update(|f| f.draft.comments = event_target_value(&ev))
                        disabled=move || is_loading.get()
                    ></textarea>
                </div>

                <div class="contact-row">
                    <div class="form-control">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            placeholder="Your Name (Optional)"
                            prop:value=move || form.with(|f| f.draft.name.clone())
                            on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <div class="form-control">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="Your Email (Optional)"
                            prop:value=move || form.with(|f| f.draft.email.clone())
                            on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                </div>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=is_invalid>
                        {move || if is_loading.get() { "Submitting..." } else { "Send Feedback" }}
                    </button>
                </div>

                {move || match form_notice(message.get(), form.with(|f| f.submitted)) {
                    Some(FormNotice::Success) => view! {
                        <div class="message-success">"Feedback submitted successfully! Thank you."</div>
                    }.into_any(),
                    Some(FormNotice::Error(text)) => view! {
                        <div class="message-error">{text}</div>
                    }.into_any(),
                    None => view! { <div></div> }.into_any(),
                }}
            </form>
        </Card>
    }
}
