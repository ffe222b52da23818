//! Feedback Store
//!
//! Owns the item collection, the loading/error flags and the derived
//! statistics. Views read signals from it and change it only through
//! `FeedbackActions`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use thiserror::Error;

use crate::api::{ApiError, ApiResult, FeedbackApi, HttpFeedbackApi};
use crate::models::{FeedbackDraft, FeedbackItem};
use crate::stats::FeedbackStats;
use crate::validation::ValidationError;

/// Store state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FeedbackState {
    /// Newest first after any submit
    pub items: Vec<FeedbackItem>,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Operations started but not yet settled
    in_flight: u32,
    /// Bumped by every operation
    generation: u64,
}

/// Handle for one started operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Populated,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Feedback store is no longer available")]
    Detached,
}

impl FeedbackState {
    /// Enter `Loading` and hand out a ticket for the new operation
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.in_flight += 1;
        self.is_loading = true;
        self.error = None;
        Ticket(self.generation)
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.is_loading = self.in_flight > 0;
    }

    fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a list result.
    ///
    /// A failure clears the collection. Results from a refresh that was
    /// overtaken by a newer operation are dropped.
    pub fn finish_refresh(&mut self, ticket: Ticket, result: ApiResult<Vec<FeedbackItem>>) {
        self.settle();
        if !self.is_latest(ticket) {
            log::debug!(
                "[STORE] dropping stale refresh #{} (latest #{})",
                ticket.id(),
                self.generation
            );
            return;
        }
        match result {
            Ok(items) => {
                log::info!("[STORE] loaded {} feedback items", items.len());
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                log::warn!("[STORE] refresh #{} failed: {}", ticket.id(), err);
                self.error = Some(err.to_string());
                self.items.clear();
            }
        }
    }

    /// Apply a create result.
    ///
    /// Always applied, since the backend has already stored the item. A
    /// failure keeps the current collection.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: ApiResult<FeedbackItem>,
    ) -> Result<FeedbackItem, SubmitError> {
        self.settle();
        match result {
            Ok(item) => {
                log::info!("[STORE] submit #{} stored feedback {}", ticket.id(), item.id);
                self.items.insert(0, item.clone());
                self.error = None;
                Ok(item)
            }
            Err(err) => {
                log::warn!("[STORE] submit #{} failed: {}", ticket.id(), err);
                self.error = Some(err.to_string());
                Err(SubmitError::Api(err))
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.generation == 0 {
            Phase::Idle
        } else {
            Phase::Populated
        }
    }

    #[cfg(test)]
    pub fn stats(&self) -> FeedbackStats {
        FeedbackStats::from_items(&self.items)
    }
}

/// Somewhere a `FeedbackState` lives
pub trait StateCell {
    /// Run `f` against the state, or return `None` once the state is gone
    fn modify<R>(&self, f: impl FnOnce(&mut FeedbackState) -> R) -> Option<R>;
}

impl StateCell for Store<FeedbackState> {
    fn modify<R>(&self, f: impl FnOnce(&mut FeedbackState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Reload the whole collection from the backend
pub async fn refresh<A, S>(api: &A, state: &S)
where
    A: FeedbackApi + ?Sized,
    S: StateCell,
{
    let Some(ticket) = state.modify(FeedbackState::begin) else {
        return;
    };
    log::debug!("[STORE] refresh #{} started", ticket.id());
    let result = api.list_feedback().await;
    if state.modify(|s| s.finish_refresh(ticket, result)).is_none() {
        log::debug!("[STORE] refresh #{} finished after the store was dropped", ticket.id());
    }
}

/// Validate and create one feedback item.
///
/// Invalid drafts are rejected before any request is made.
pub async fn submit<A, S>(api: &A, state: &S, draft: FeedbackDraft) -> Result<FeedbackItem, SubmitError>
where
    A: FeedbackApi + ?Sized,
    S: StateCell,
{
    if let Err(err) = draft.validate() {
        log::debug!("[STORE] rejected draft: {:?}", err);
        return Err(err.into());
    }
    let ticket = state.modify(FeedbackState::begin).ok_or(SubmitError::Detached)?;
    log::debug!("[STORE] submit #{} started", ticket.id());
    let result = api.create_feedback(&draft).await;
    state
        .modify(|s| s.finish_submit(ticket, result))
        .unwrap_or(Err(SubmitError::Detached))
}

/// Reactive feedback store bound to the HTTP backend
#[derive(Clone, Copy)]
pub struct FeedbackStore {
    state: Store<FeedbackState>,
    api: StoredValue<HttpFeedbackApi, LocalStorage>,
}

impl FeedbackStore {
    /// Create the store and start the initial load
    pub fn new(api: HttpFeedbackApi) -> Self {
        let store = Self {
            state: Store::new(FeedbackState::default()),
            api: StoredValue::new_local(api),
        };
        store.refresh();
        store
    }

    pub fn refresh(&self) {
        let this = *self;
        spawn_local(async move {
            if let Some(api) = this.api.try_get_value() {
                refresh(&api, &this.state).await;
            }
        });
    }

    pub async fn submit(self, draft: FeedbackDraft) -> Result<FeedbackItem, SubmitError> {
        let api = self.api.try_get_value().ok_or(SubmitError::Detached)?;
        submit(&api, &self.state, draft).await
    }

    pub fn items(&self) -> Signal<Vec<FeedbackItem>> {
        let state = self.state;
        Signal::derive(move || state.items().get())
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.is_loading().get())
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.error().get())
    }

    pub fn phase(&self) -> Signal<Phase> {
        let state = self.state;
        Signal::derive(move || state.with(FeedbackState::phase))
    }

    /// Recomputed whenever the collection changes
    pub fn stats(&self) -> Memo<FeedbackStats> {
        let state = self.state;
        Memo::new(move |_| state.items().with(|items| FeedbackStats::from_items(items)))
    }

    pub fn actions(&self) -> FeedbackActions {
        FeedbackActions { store: *self }
    }
}

/// Write side of the store, handed down to views
#[derive(Clone, Copy)]
pub struct FeedbackActions {
    store: FeedbackStore,
}

impl FeedbackActions {
    pub async fn submit(self, draft: FeedbackDraft) -> Result<FeedbackItem, SubmitError> {
        self.store.submit(draft).await
    }

    pub fn refresh(self) {
        self.store.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Operation;
    use crate::models::FeedbackId;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    impl StateCell for RefCell<FeedbackState> {
        fn modify<R>(&self, f: impl FnOnce(&mut FeedbackState) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    type Reply<T> = oneshot::Receiver<ApiResult<T>>;

    /// Backend whose replies are queued up front and released by the test
    #[derive(Default)]
    struct ScriptedApi {
        lists: RefCell<VecDeque<Reply<Vec<FeedbackItem>>>>,
        creates: RefCell<VecDeque<Reply<FeedbackItem>>>,
        list_calls: Cell<usize>,
        create_calls: Cell<usize>,
    }

    impl ScriptedApi {
        fn with_list(self, reply: Reply<Vec<FeedbackItem>>) -> Self {
            self.lists.borrow_mut().push_back(reply);
            self
        }

        fn with_create(self, reply: Reply<FeedbackItem>) -> Self {
            self.creates.borrow_mut().push_back(reply);
            self
        }
    }

    #[async_trait(?Send)]
    impl FeedbackApi for ScriptedApi {
        async fn list_feedback(&self) -> ApiResult<Vec<FeedbackItem>> {
            self.list_calls.set(self.list_calls.get() + 1);
            let reply = self.lists.borrow_mut().pop_front().expect("unexpected list call");
            reply.await.expect("list reply dropped")
        }

        async fn create_feedback(&self, _draft: &FeedbackDraft) -> ApiResult<FeedbackItem> {
            self.create_calls.set(self.create_calls.get() + 1);
            let reply = self.creates.borrow_mut().pop_front().expect("unexpected create call");
            reply.await.expect("create reply dropped")
        }
    }

    /// State that has already been torn down
    struct Gone;

    impl StateCell for Gone {
        fn modify<R>(&self, _f: impl FnOnce(&mut FeedbackState) -> R) -> Option<R> {
            None
        }
    }

    fn ready<T>(value: ApiResult<T>) -> Reply<T> {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(value);
        rx
    }

    fn make_item(id: &str, rating: u8, comments: &str) -> FeedbackItem {
        FeedbackItem {
            id: FeedbackId::new(id),
            name: String::new(),
            email: String::new(),
            rating,
            comments: comments.to_string(),
        }
    }

    fn valid_draft() -> FeedbackDraft {
        FeedbackDraft {
            name: String::new(),
            email: String::new(),
            rating: 4,
            comments: "Pretty good overall".to_string(),
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            operation: Operation::Create,
            status: 500,
        }
    }

    fn loaded(items: Vec<FeedbackItem>) -> RefCell<FeedbackState> {
        let mut state = FeedbackState::default();
        let ticket = state.begin();
        state.finish_refresh(ticket, Ok(items));
        RefCell::new(state)
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let state = FeedbackState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_loading);
        assert_eq!(state.stats(), FeedbackStats::default());
    }

    #[test]
    fn test_begin_clears_error() {
        let mut state = FeedbackState::default();
        state.error = Some("old".to_string());

        let first = state.begin();
        let second = state.begin();

        assert!(state.error.is_none());
        assert_eq!(state.phase(), Phase::Loading);
        assert!(second.id() > first.id());
    }

    #[tokio::test]
    async fn test_refresh_empty_backend() {
        let api = ScriptedApi::default().with_list(ready(Ok(vec![])));
        let state = RefCell::new(FeedbackState::default());

        refresh(&api, &state).await;

        let state = state.borrow();
        assert!(state.items.is_empty());
        assert_eq!(state.phase(), Phase::Populated);
        assert_eq!(state.stats().count, 0);
        assert_eq!(state.stats().average_rating, 0.0);
    }

    #[tokio::test]
    async fn test_refresh_single_item() {
        let api = ScriptedApi::default()
            .with_list(ready(Ok(vec![make_item("1", 5, "Great service today")])));
        let state = RefCell::new(FeedbackState::default());

        refresh(&api, &state).await;

        let stats = state.borrow().stats();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average_rating, 5.0);
        assert_eq!(stats.positive_percent, 100);
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_items() {
        let err = ApiError::Transport("connection refused".to_string());
        let api = ScriptedApi::default().with_list(ready(Err(err.clone())));
        let state = loaded(vec![make_item("1", 3, "Okay I guess so")]);

        refresh(&api, &state).await;

        let state = state.borrow();
        assert!(state.items.is_empty());
        assert_eq!(state.error, Some(err.to_string()));
        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn test_failed_state_recovers_on_refresh() {
        let api = ScriptedApi::default()
            .with_list(ready(Err(ApiError::Transport("offline".to_string()))))
            .with_list(ready(Ok(vec![make_item("1", 2, "Could be better")])));
        let state = RefCell::new(FeedbackState::default());

        refresh(&api, &state).await;
        assert_eq!(state.borrow().phase(), Phase::Failed);

        refresh(&api, &state).await;
        let state = state.borrow();
        assert_eq!(state.phase(), Phase::Populated);
        assert!(state.error.is_none());
        assert_eq!(state.items.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_prepends_item() {
        let api = ScriptedApi::default()
            .with_create(ready(Ok(make_item("42", 4, "Pretty good overall"))));
        let state = loaded(vec![
            make_item("1", 5, "Great service today"),
            make_item("2", 3, "Okay I guess so"),
        ]);

        let created = submit(&api, &state, valid_draft()).await.unwrap();

        assert_eq!(created.id, FeedbackId::new("42"));
        let state = state.borrow();
        let ids: Vec<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["42", "1", "2"]);
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_items() {
        let api = ScriptedApi::default().with_create(ready(Err(server_error())));
        let before = vec![make_item("1", 5, "Great service today")];
        let state = loaded(before.clone());

        let result = submit(&api, &state, valid_draft()).await;

        assert_eq!(result, Err(SubmitError::Api(server_error())));
        let state = state.borrow();
        assert_eq!(state.items, before);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to submit feedback. Server responded with status: 500")
        );
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_backend() {
        let api = ScriptedApi::default();
        let state = loaded(vec![]);
        let draft = FeedbackDraft {
            rating: 4,
            comments: "short".to_string(),
            ..Default::default()
        };

        let result = submit(&api, &state, draft).await;

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert_eq!(api.create_calls.get(), 0);
        assert!(!state.borrow().is_loading);

        let unrated = FeedbackDraft {
            rating: 0,
            ..valid_draft()
        };
        assert!(submit(&api, &state, unrated).await.is_err());
        assert_eq!(api.create_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_detached_store() {
        let api = ScriptedApi::default();

        refresh(&api, &Gone).await;
        let result = submit(&api, &Gone, valid_draft()).await;

        assert_eq!(result, Err(SubmitError::Detached));
        assert_eq!(api.list_calls.get(), 0);
        assert_eq!(api.create_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_stale_refresh_is_dropped() {
        let (list_tx, list_rx) = oneshot::channel();
        let (create_tx, create_rx) = oneshot::channel();
        let api = ScriptedApi::default().with_list(list_rx).with_create(create_rx);
        let state = RefCell::new(FeedbackState::default());

        let slow_refresh = refresh(&api, &state);
        let new_submit = submit(&api, &state, valid_draft());
        let driver = async {
            tokio::task::yield_now().await;
            let _ = create_tx.send(Ok(make_item("42", 4, "Pretty good overall")));
            for _ in 0..10 {
                if !state.borrow().items.is_empty() {
                    break;
                }
                tokio::task::yield_now().await;
            }
            // The refresh is still outstanding
            assert!(state.borrow().is_loading);
            let _ = list_tx.send(Ok(vec![]));
        };

        let (_, submitted, _) = tokio::join!(slow_refresh, new_submit, driver);

        assert!(submitted.is_ok());
        let state = state.borrow();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id.as_str(), "42");
        assert!(!state.is_loading);
        assert_eq!(state.phase(), Phase::Populated);
    }
}
