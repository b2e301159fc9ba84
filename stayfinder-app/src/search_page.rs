use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayfinder_core::repository::{HotelQuery, HotelRepository};
use stayfinder_core::{CoreResult, Hotel};
use stayfinder_search::{filter, paginate, sort, suggest_destinations};
use stayfinder_search::{FilterState, Page, SearchCriteria, SortKey};

use crate::view::ViewState;

/// Everything the search page needs to rebuild its display, as one
/// serializable value updated only through [`SearchPageState::apply`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchPageState {
    pub criteria: SearchCriteria,
    pub filters: FilterState,
    pub sort: SortKey,
    pub page: u32,
    pub page_size: u32,
}

impl SearchPageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            criteria: SearchCriteria::default(),
            filters: FilterState::default(),
            sort: SortKey::default(),
            page: 1,
            page_size,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SearchAction {
    SetCriteria(SearchCriteria),
    SetFilters(FilterState),
    SetSort(SortKey),
    SetPage(u32),
    SetPageSize(u32),
}

impl SearchPageState {
    /// Pure reducer. Any action that reshapes the result list (new
    /// criteria, new filters, new ordering, new page size) returns to the
    /// first page.
    pub fn apply(mut self, action: SearchAction) -> Self {
        match action {
            SearchAction::SetCriteria(criteria) => {
                self.criteria = criteria;
                self.page = 1;
            }
            SearchAction::SetFilters(filters) => {
                self.filters = filters;
                self.page = 1;
            }
            SearchAction::SetSort(sort) => {
                self.sort = sort;
                self.page = 1;
            }
            SearchAction::SetPage(page) => {
                self.page = page.max(1);
            }
            SearchAction::SetPageSize(page_size) => {
                self.page_size = page_size.max(1);
                self.page = 1;
            }
        }
        self
    }
}

/// Identifies one in-flight fetch so results landing after the page has
/// moved on are thrown away instead of clobbering newer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    id: Uuid,
    key: String,
}

/// Controller for the search results page: owns the reducer state, a query
/// cache keyed by normalized destination, and the superseded-request guard.
pub struct SearchPage {
    hotels: Arc<dyn HotelRepository>,
    state: SearchPageState,
    cache: HashMap<String, Vec<Hotel>>,
    current_fetch: Option<FetchTicket>,
    results: ViewState<Vec<Hotel>>,
    suggestion_limit: usize,
}

impl SearchPage {
    pub fn new(hotels: Arc<dyn HotelRepository>, page_size: u32, suggestion_limit: usize) -> Self {
        Self {
            hotels,
            state: SearchPageState::new(page_size),
            cache: HashMap::new(),
            current_fetch: None,
            results: ViewState::Loading,
            suggestion_limit,
        }
    }

    pub fn state(&self) -> &SearchPageState {
        &self.state
    }

    pub fn dispatch(&mut self, action: SearchAction) {
        self.state = self.state.clone().apply(action);
    }

    fn cache_key(&self) -> String {
        self.state.criteria.destination.trim().to_lowercase()
    }

    /// Start a fetch for the current criteria. A cache hit resolves
    /// immediately and returns `None`; otherwise the page goes to
    /// `Loading` and the caller drives [`perform_fetch`](Self::perform_fetch)
    /// and [`apply_fetch`](Self::apply_fetch) with the returned ticket.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        let key = self.cache_key();
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(%key, "search cache hit");
            self.results = ViewState::Ready(cached.clone());
            self.current_fetch = None;
            return None;
        }

        let ticket = FetchTicket {
            id: Uuid::new_v4(),
            key,
        };
        self.current_fetch = Some(ticket.clone());
        self.results = ViewState::Loading;
        Some(ticket)
    }

    /// The asynchronous collaborator call for a ticket issued by
    /// [`begin_fetch`](Self::begin_fetch).
    pub async fn perform_fetch(&self, ticket: &FetchTicket) -> CoreResult<Vec<Hotel>> {
        self.hotels
            .search(&HotelQuery {
                city: ticket.key.clone(),
                ..Default::default()
            })
            .await
    }

    /// Apply a fetch outcome. Results for a superseded ticket are
    /// discarded; only the newest request may touch the page.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: CoreResult<Vec<Hotel>>) {
        if self.current_fetch.as_ref() != Some(&ticket) {
            tracing::debug!(key = %ticket.key, "discarding superseded search results");
            return;
        }
        self.current_fetch = None;
        match outcome {
            Ok(hotels) => {
                self.cache.insert(ticket.key, hotels.clone());
                self.results = ViewState::Ready(hotels);
            }
            Err(err) => {
                tracing::warn!(error = %err, "search fetch failed");
                self.results = ViewState::from_result(Err(err));
            }
        }
    }

    /// Convenience wrapper: begin, perform and apply in one await.
    pub async fn load(&mut self) {
        if let Some(ticket) = self.begin_fetch() {
            let outcome = self.perform_fetch(&ticket).await;
            self.apply_fetch(ticket, outcome);
        }
    }

    /// Drop the cached results for the current destination and refetch.
    pub async fn refresh(&mut self) {
        self.cache.remove(&self.cache_key());
        self.load().await;
    }

    /// Run the pipeline over the raw results and produce the page to
    /// render. Empty after filtering is its own display state.
    pub fn view(&self) -> ViewState<Page> {
        match &self.results {
            ViewState::Loading => ViewState::Loading,
            ViewState::NotFound => ViewState::NotFound,
            ViewState::EmptyResults => ViewState::EmptyResults,
            ViewState::Failed(msg) => ViewState::Failed(msg.clone()),
            ViewState::Ready(hotels) => {
                let filtered = filter(hotels, &self.state.filters);
                if filtered.is_empty() {
                    return ViewState::EmptyResults;
                }
                let sorted = sort(filtered, self.state.sort);
                ViewState::Ready(paginate(&sorted, self.state.page, self.state.page_size))
            }
        }
    }

    /// Destination autocomplete over the full catalog.
    pub async fn suggestions(&self, input: &str) -> CoreResult<Vec<String>> {
        let hotels = self.hotels.list().await?;
        Ok(suggest_destinations(&hotels, input, self.suggestion_limit))
    }
}
