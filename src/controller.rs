//! The composed state + operations contract a list screen binds to.
//!
//! One [`ListController`] instance owns the pagination state and last
//! fetched page of exactly one screen. Overlapping list fetches resolve
//! last-request-wins, and at most one mutation is in flight per instance.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, warn};

use crate::client::errors::ClientError;
use crate::client::{ListFilter, ResourceFetcher};
use crate::pagination::{PageRequest, PageResult, page_range};
use crate::PAGE_SIZE_OPTIONS;

const NETWORK_MESSAGE: &str = "Network error. Check your connection and try again.";
const SAVE_FALLBACK: &str = "Failed to save";
const DELETE_FALLBACK: &str = "Failed to delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Outcome banner of the last settled mutation. Cleared explicitly by the
/// user or when the next mutation begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionMessage {
    pub kind: MessageKind,
    pub text: String,
    pub details: Option<String>,
}

impl ActionMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
            details: None,
        }
    }

    pub fn error(text: impl Into<String>, details: Option<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
            details,
        }
    }
}

/// The one panel a list screen shows at any moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error,
    Empty,
    Populated,
}

/// Cloned view of the controller state handed to the screen on each render.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub data: Option<PageResult<T>>,
    pub loading: bool,
    pub error: Option<ClientError>,
    pub page_no: usize,
    pub page_size: usize,
    pub action: Option<ActionMessage>,
}

impl<T> ListSnapshot<T> {
    /// Which of the mutually exclusive screen panels to render.
    pub fn view_state(&self) -> ViewState {
        if self.loading {
            ViewState::Loading
        } else if self.error.is_some() {
            ViewState::Error
        } else {
            match &self.data {
                Some(data) if !data.is_empty() => ViewState::Populated,
                _ => ViewState::Empty,
            }
        }
    }

    /// Page labels for the pagination control; empty when the control
    /// should not render.
    pub fn page_labels(&self) -> Vec<Option<usize>> {
        self.data
            .as_ref()
            .map(|data| page_range(data.current_page, data.total_pages))
            .unwrap_or_default()
    }
}

struct ListState<T> {
    page: PageRequest,
    data: Option<PageResult<T>>,
    loading: bool,
    error: Option<ClientError>,
    action: Option<ActionMessage>,
}

/// Pagination state, fetch orchestration and mutation operations for one
/// list screen.
pub struct ListController<F: ResourceFetcher> {
    fetcher: F,
    filter: Option<ListFilter>,
    page_sizes: Vec<usize>,
    state: Mutex<ListState<F::Item>>,
    /// Sequence number of the latest issued list fetch; responses tagged
    /// with an older number are discarded.
    seq: AtomicU64,
    /// Guards the Idle -> Submitting transition of the mutation machine.
    submitting: AtomicBool,
}

impl<F: ResourceFetcher> ListController<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            filter: None,
            page_sizes: PAGE_SIZE_OPTIONS.to_vec(),
            state: Mutex::new(ListState {
                page: PageRequest::default(),
                data: None,
                loading: false,
                error: None,
                action: None,
            }),
            seq: AtomicU64::new(0),
            submitting: AtomicBool::new(false),
        }
    }

    /// Fixes the single-key filter for this screen's list requests.
    #[must_use]
    pub fn with_filter(mut self, filter: ListFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Overrides the allowed page sizes. When the currently configured size
    /// is absent from the new set, the controller falls back to the first
    /// entry so the active size always stays inside the allow-list.
    #[must_use]
    pub fn with_page_sizes(mut self, sizes: Vec<usize>) -> Self {
        if !sizes.is_empty() {
            let current = self.state().page.page_size;
            if !sizes.contains(&current) {
                self.state().page = PageRequest::first_page(sizes[0]);
            }
            self.page_sizes = sizes;
        }
        self
    }

    /// Starts on the given page size, which must be one of the allowed
    /// sizes.
    #[must_use]
    pub fn with_page_size(self, size: usize) -> Self {
        if self.page_sizes.contains(&size) {
            self.state().page = PageRequest::first_page(size);
        } else {
            warn!("ignoring initial page size {size} outside the allowed set");
        }
        self
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn snapshot(&self) -> ListSnapshot<F::Item> {
        let state = self.state();
        ListSnapshot {
            data: state.data.clone(),
            loading: state.loading,
            error: state.error.clone(),
            page_no: state.page.page_no,
            page_size: state.page.page_size,
            action: state.action.clone(),
        }
    }

    /// Fetches the current page. Also the "Retry" action of the error
    /// panel.
    pub async fn refresh(&self) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let page = {
            let mut state = self.state();
            state.loading = true;
            state.error = None;
            state.page
        };

        let result = self.fetcher.list(page, self.filter.as_ref()).await;

        let mut state = self.state();
        if self.seq.load(Ordering::SeqCst) != seq {
            debug!("discarding stale list response for page {}", page.page_no);
            return;
        }
        state.loading = false;
        match result {
            Ok(data) => {
                state.data = Some(data);
            }
            Err(err) => {
                error!("failed to load page {}: {err}", page.page_no);
                state.error = Some(err);
            }
        }
    }

    /// Moves to the given page (0 clamps to 1) and refetches.
    pub async fn set_page_no(&self, page_no: usize) {
        {
            let mut state = self.state();
            state.page = PageRequest::new(page_no, state.page.page_size);
        }
        self.refresh().await;
    }

    /// Switches the page size and refetches. The next fetch always uses
    /// page 1: staying deep in pagination after a size change would request
    /// a page that no longer makes sense.
    pub async fn set_page_size(&self, page_size: usize) {
        if !self.page_sizes.contains(&page_size) {
            warn!("ignoring page size {page_size} outside the allowed set");
            return;
        }
        self.state().page = PageRequest::first_page(page_size);
        self.refresh().await;
    }

    pub async fn create(&self, payload: F::New) {
        self.run_mutation(
            async { self.fetcher.create(&payload).await.map(|_| ()) },
            "Saved.",
            SAVE_FALLBACK,
        )
        .await;
    }

    pub async fn update(&self, id: i32, payload: F::Update) {
        self.run_mutation(
            async { self.fetcher.update(id, &payload).await.map(|_| ()) },
            "Saved.",
            SAVE_FALLBACK,
        )
        .await;
    }

    pub async fn delete(&self, id: i32) {
        self.run_mutation(
            async { self.fetcher.delete(id).await },
            "Deleted.",
            DELETE_FALLBACK,
        )
        .await;
    }

    pub fn clear_message(&self) {
        self.state().action = None;
    }

    /// Runs one mutation through the Idle/Submitting machine. A submit
    /// while another is in flight is a no-op. Success refetches the current
    /// page so the server-side totals stay authoritative; failure leaves
    /// the list data untouched and triggers no refetch.
    async fn run_mutation<Fut>(&self, op: Fut, success_text: &str, fallback: &str)
    where
        Fut: Future<Output = Result<(), ClientError>>,
    {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("mutation already in flight, ignoring submit");
            return;
        }

        self.state().action = None;

        let result = op.await;

        match result {
            Ok(()) => {
                self.state().action = Some(ActionMessage::success(success_text));
                self.submitting.store(false, Ordering::SeqCst);
                self.refresh().await;
            }
            Err(err) => {
                error!("mutation failed: {err}");
                let text = mutation_error_text(&err, fallback);
                self.state().action = Some(ActionMessage::error(text, Some(err.to_string())));
                self.submitting.store(false, Ordering::SeqCst);
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, ListState<F::Item>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Server-supplied message verbatim when available, otherwise the
/// per-operation fallback; transport failures get the connectivity hint.
fn mutation_error_text(err: &ClientError, fallback: &str) -> String {
    match err {
        ClientError::Server { message, .. } if !message.is_empty() => message.clone(),
        ClientError::Validation(message) => message.clone(),
        ClientError::Network(_) => NETWORK_MESSAGE.to_string(),
        _ => fallback.to_string(),
    }
}
