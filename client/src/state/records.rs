//! Record list view-model: query parameters, fetch generations, page, selection.
//!
//! DESIGN
//! ======
//! Every parameter change issues a [`FetchTicket`] carrying a fresh generation.
//! The page applies a response only when its generation is still the newest,
//! so out-of-order completions are dropped by construction rather than by
//! scheduling luck. Rows live behind an `Arc` and are replaced wholesale on
//! each successful fetch.
//!
//! Loading keeps the previous rows visible; a failed fetch keeps them too and
//! reports the error until the next parameter change or manual refresh.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::sync::Arc;

use doclist::{Filter, ListError, ListQuery, OrderBy, Record};

use super::detail::resolve_selection;
use super::page_size::PageSizeOptions;

/// Static description of which document type a list view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSpec {
    pub doctype: &'static str,
    pub fields: &'static [&'static str],
    /// Field matched by the search prefix filter.
    pub search_field: &'static str,
}

/// Search text, 1-based page number and page size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParameters {
    pub search_term: String,
    pub page: u32,
    pub page_size: u32,
}

impl QueryParameters {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self { search_term: String::new(), page: 1, page_size }
    }

    /// Offset of the first row on the current page.
    #[must_use]
    pub fn limit_start(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

pub type Generation = u64;

/// One issued fetch. The caller runs `query` and hands the result back to
/// [`RecordListState::complete`] together with `generation`.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    pub generation: Generation,
    pub query: ListQuery,
}

/// Externally visible state of the list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Idle,
    Error(String),
    /// Idle with the detail dialog open for this record id.
    DetailOpen(String),
}

/// Result of handing a fetch response back to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// Superseded by a newer request or arrived after teardown.
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("page size {0} is not one of the configured options")]
pub struct UnknownPageSize(pub u32);

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    Loading,
    Idle,
    Error(String),
}

#[derive(Clone, Debug)]
pub struct RecordListState {
    spec: ListSpec,
    options: PageSizeOptions,
    params: QueryParameters,
    rows: Arc<Vec<Record>>,
    phase: Phase,
    selection: Option<String>,
    generation: Generation,
    closed: bool,
}

impl RecordListState {
    /// Create the view in its initial Loading state along with the first fetch.
    ///
    /// Out-of-range parameters are normalized: `page` to at least 1 and an
    /// unknown `page_size` to the first option.
    #[must_use]
    pub fn new(spec: ListSpec, options: PageSizeOptions, mut params: QueryParameters) -> (Self, FetchTicket) {
        params.page = params.page.max(1);
        if !options.contains(params.page_size) {
            params.page_size = options.first();
        }
        let mut state = Self {
            spec,
            options,
            params,
            rows: Arc::new(Vec::new()),
            phase: Phase::Loading,
            selection: None,
            generation: 0,
            closed: false,
        };
        let ticket = state.issue();
        (state, ticket)
    }

    #[must_use]
    pub fn spec(&self) -> ListSpec {
        self.spec
    }

    #[must_use]
    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    #[must_use]
    pub fn options(&self) -> &PageSizeOptions {
        &self.options
    }

    #[must_use]
    pub fn rows(&self) -> Arc<Vec<Record>> {
        Arc::clone(&self.rows)
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    #[must_use]
    pub fn status(&self) -> ViewStatus {
        match &self.phase {
            Phase::Loading => ViewStatus::Loading,
            Phase::Error(reason) => ViewStatus::Error(reason.clone()),
            Phase::Idle => match &self.selection {
                Some(id) => ViewStatus::DetailOpen(id.clone()),
                None => ViewStatus::Idle,
            },
        }
    }

    /// Request for the current parameters.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        let filters = if self.params.search_term.is_empty() {
            Vec::new()
        } else {
            vec![Filter::prefix(self.spec.search_field, &self.params.search_term)]
        };
        ListQuery {
            fields: self.spec.fields.iter().map(|f| (*f).to_owned()).collect(),
            filters,
            limit_start: self.params.limit_start(),
            limit: self.params.page_size,
            order_by: Some(OrderBy::newest_first()),
        }
    }

    /// Commit a new search term. Returns to page 1.
    pub fn set_search_term(&mut self, term: &str) -> Option<FetchTicket> {
        if self.closed || self.params.search_term == term {
            return None;
        }
        term.clone_into(&mut self.params.search_term);
        self.params.page = 1;
        Some(self.issue())
    }

    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        let page = page.max(1);
        if self.closed || self.params.page == page {
            return None;
        }
        self.params.page = page;
        Some(self.issue())
    }

    pub fn next_page(&mut self) -> Option<FetchTicket> {
        self.set_page(self.params.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Option<FetchTicket> {
        if self.params.page <= 1 {
            return None;
        }
        self.set_page(self.params.page - 1)
    }

    /// Whether the last applied page came back full, so a following page may exist.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.phase == Phase::Idle && self.rows.len() >= self.params.page_size as usize
    }

    /// Change the page size. Returns to page 1.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPageSize`] when `size` is not a configured option.
    pub fn set_page_size(&mut self, size: u32) -> Result<Option<FetchTicket>, UnknownPageSize> {
        if !self.options.contains(size) {
            return Err(UnknownPageSize(size));
        }
        if self.closed || self.params.page_size == size {
            return Ok(None);
        }
        self.params.page_size = size;
        self.params.page = 1;
        Ok(Some(self.issue()))
    }

    /// Manual retry with unchanged parameters.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        if self.closed {
            return None;
        }
        Some(self.issue())
    }

    /// Apply a fetch result if it belongs to the newest request.
    pub fn complete(&mut self, generation: Generation, result: Result<Vec<Record>, ListError>) -> FetchOutcome {
        if self.closed || generation != self.generation || self.phase != Phase::Loading {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(rows) => {
                self.rows = Arc::new(rows);
                self.phase = Phase::Idle;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.phase = Phase::Error(err.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Open the detail view for a row on the current page.
    ///
    /// Only possible while idle; returns `false` otherwise or when the id is
    /// not on the page.
    pub fn select(&mut self, id: &str) -> bool {
        if self.phase != Phase::Idle || resolve_selection(&self.rows, id).is_none() {
            return false;
        }
        self.selection = Some(id.to_owned());
        true
    }

    /// Close the detail view. Leaves rows and parameters untouched.
    pub fn dismiss(&mut self) {
        self.selection = None;
    }

    #[must_use]
    pub fn selected_record(&self) -> Option<&Record> {
        let id = self.selection.as_deref()?;
        resolve_selection(&self.rows, id)
    }

    /// Teardown: every outstanding fetch becomes stale and no new one is issued.
    pub fn close(&mut self) {
        self.closed = true;
        self.selection = None;
    }

    fn issue(&mut self) -> FetchTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.selection = None;
        FetchTicket { generation: self.generation, query: self.query() }
    }
}
