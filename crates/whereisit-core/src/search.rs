//! Free-text + category search state.
//!
//! Text and category combine as an AND filter. Nothing is sent until the
//! query has at least [`MIN_QUERY_CHARS`] characters or a category is
//! selected; below that the results are cleared.
//!
//! Every search gets a sequence number when it is issued. A response is
//! only applied if no newer search was issued in the meantime, so quick
//! typing cannot leave an older result set on screen.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use tracing::{debug, error};

use crate::api::Endpoints;
use crate::error::FetchError;
use crate::models::SearchResults;

/// Minimum query length (in characters) that triggers a text search.
pub const MIN_QUERY_CHARS: usize = 2;

/// Fetches search results from a resolved URL.
pub trait SearchBackend {
    fn search(&self, url: &str) -> impl Future<Output = Result<SearchResults, FetchError>>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub query_text: String,
    pub selected_category: Option<String>,
    pub results: SearchResults,
}

impl SearchState {
    /// Whether the current input warrants a backend request.
    pub fn is_active(&self) -> bool {
        self.query_text.chars().count() >= MIN_QUERY_CHARS || self.selected_category.is_some()
    }
}

/// What a search call did to the result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Below threshold; results emptied, no request.
    Cleared,
    /// Response stored as the current results.
    Applied,
    /// A newer search was issued before this one answered; dropped.
    Superseded,
    /// Request failed; previous results kept.
    Failed,
}

impl SearchOutcome {
    pub fn changed_results(self) -> bool {
        matches!(self, Self::Cleared | Self::Applied)
    }
}

/// Search state owned by one view.
///
/// Single-threaded: the returned futures are meant for `spawn_local`.
pub struct SearchCoordinator<B> {
    backend: Rc<B>,
    endpoints: Endpoints,
    state: Rc<RefCell<SearchState>>,
    issued: Rc<Cell<u64>>,
}

impl<B: SearchBackend + 'static> SearchCoordinator<B> {
    pub fn new(backend: B, endpoints: Endpoints) -> Self {
        Self {
            backend: Rc::new(backend),
            endpoints,
            state: Rc::default(),
            issued: Rc::new(Cell::new(0)),
        }
    }

    /// Set the query text and search.
    ///
    /// The state changes immediately; only the request is deferred to the
    /// returned future.
    pub fn update_query(&self, text: String) -> impl Future<Output = SearchOutcome> + use<B> {
        self.state.borrow_mut().query_text = text;
        self.perform_search()
    }

    /// Select a category (`None` = all) and search.
    pub fn select_category(
        &self,
        category: Option<String>,
    ) -> impl Future<Output = SearchOutcome> + use<B> {
        self.state.borrow_mut().selected_category = category;
        self.perform_search()
    }

    /// Search with the current state.
    pub fn perform_search(&self) -> impl Future<Output = SearchOutcome> + use<B> {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);

        let url = {
            let mut state = self.state.borrow_mut();
            if state.is_active() {
                Some(
                    self.endpoints
                        .search(&state.query_text, state.selected_category.as_deref()),
                )
            } else {
                state.results = SearchResults::default();
                None
            }
        };

        let backend = Rc::clone(&self.backend);
        let state = Rc::clone(&self.state);
        let issued = Rc::clone(&self.issued);

        async move {
            let Some(url) = url else {
                return SearchOutcome::Cleared;
            };
            debug!(seq, %url, "search issued");

            match backend.search(&url).await {
                Ok(results) if issued.get() == seq => {
                    state.borrow_mut().results = results;
                    SearchOutcome::Applied
                }
                Ok(_) => {
                    debug!(seq, latest = issued.get(), "stale search response dropped");
                    SearchOutcome::Superseded
                }
                Err(err) => {
                    error!(seq, %err, %url, "search failed");
                    SearchOutcome::Failed
                }
            }
        }
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn results(&self) -> SearchResults {
        self.state.borrow().results.clone()
    }

    pub fn is_active(&self) -> bool {
        self.state.borrow().is_active()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{Item, StorageBox};
    use crate::mount::MountConfig;
    use crate::path::PathResolver;

    /// Answers by URL; unknown URLs fail with a 500.
    #[derive(Default)]
    struct FakeBackend {
        responses: RefCell<HashMap<String, Result<SearchResults, FetchError>>>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl FakeBackend {
        fn respond(self, url: &str, response: Result<SearchResults, FetchError>) -> Self {
            self.responses.borrow_mut().insert(url.to_string(), response);
            self
        }
    }

    impl SearchBackend for FakeBackend {
        fn search(&self, url: &str) -> impl Future<Output = Result<SearchResults, FetchError>> {
            self.requests.borrow_mut().push(url.to_string());
            let response = self
                .responses
                .borrow()
                .get(url)
                .cloned()
                .unwrap_or(Err(FetchError::HttpError(500)));
            std::future::ready(response)
        }
    }

    fn item(id: u64, name: &str) -> Item {
        Item {
            id,
            box_id: 1,
            name: name.to_string(),
            description: None,
            quantity: 1,
            category: None,
            photo_path: None,
            storage_box: None,
        }
    }

    fn items(names: &[&str]) -> SearchResults {
        SearchResults {
            boxes: vec![],
            items: names
                .iter()
                .enumerate()
                .map(|(i, n)| item(i as u64, n))
                .collect(),
        }
    }

    fn coordinator(backend: FakeBackend) -> (SearchCoordinator<FakeBackend>, Rc<RefCell<Vec<String>>>) {
        let requests = Rc::clone(&backend.requests);
        let endpoints = Endpoints::new(PathResolver::identity());
        (SearchCoordinator::new(backend, endpoints), requests)
    }

    #[tokio::test]
    async fn test_two_characters_trigger_search() {
        let backend = FakeBackend::default().respond("/api/search?q=ba", Ok(items(&["battery"])));
        let (search, requests) = coordinator(backend);

        let outcome = search.update_query("ba".to_string()).await;

        assert_eq!(outcome, SearchOutcome::Applied);
        assert_eq!(*requests.borrow(), vec!["/api/search?q=ba".to_string()]);
        assert_eq!(search.results().items[0].name, "battery");
    }

    #[tokio::test]
    async fn test_single_character_clears_without_request() {
        let backend = FakeBackend::default().respond("/api/search?q=ba", Ok(items(&["battery"])));
        let (search, requests) = coordinator(backend);
        search.update_query("ba".to_string()).await;

        let outcome = search.update_query("b".to_string()).await;

        assert_eq!(outcome, SearchOutcome::Cleared);
        assert!(outcome.changed_results());
        assert_eq!(requests.borrow().len(), 1);
        assert!(search.results().is_empty());
    }

    #[tokio::test]
    async fn test_category_alone_activates_search() {
        let backend =
            FakeBackend::default().respond("/api/search?q=&category=Tools", Ok(items(&["drill"])));
        let (search, requests) = coordinator(backend);

        let outcome = search.select_category(Some("Tools".to_string())).await;

        assert_eq!(outcome, SearchOutcome::Applied);
        assert_eq!(*requests.borrow(), vec!["/api/search?q=&category=Tools".to_string()]);
        assert!(search.is_active());
    }

    #[tokio::test]
    async fn test_text_and_category_combine() {
        let url = "/api/search?q=drill&category=Tools";
        let backend = FakeBackend::default().respond(url, Ok(items(&["drill bits"])));
        let (search, requests) = coordinator(backend);

        search.select_category(Some("Tools".to_string())).await;
        search.update_query("drill".to_string()).await;

        assert_eq!(requests.borrow().last().map(String::as_str), Some(url));
        assert_eq!(search.results().items[0].name, "drill bits");
    }

    #[tokio::test]
    async fn test_clearing_category_below_threshold_resets() {
        let backend =
            FakeBackend::default().respond("/api/search?q=&category=Tools", Ok(items(&["drill"])));
        let (search, _) = coordinator(backend);
        search.select_category(Some("Tools".to_string())).await;

        let outcome = search.select_category(None).await;

        assert_eq!(outcome, SearchOutcome::Cleared);
        assert!(search.results().is_empty());
        assert_eq!(search.state().selected_category, None);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_results() {
        let backend = FakeBackend::default()
            .respond("/api/search?q=ba", Ok(items(&["battery"])))
            .respond("/api/search?q=bat", Err(FetchError::Timeout));
        let (search, _) = coordinator(backend);
        search.update_query("ba".to_string()).await;

        let outcome = search.update_query("bat".to_string()).await;

        assert_eq!(outcome, SearchOutcome::Failed);
        assert!(!outcome.changed_results());
        assert_eq!(search.results().items[0].name, "battery");
        assert_eq!(search.state().query_text, "bat");
    }

    #[tokio::test]
    async fn test_out_of_order_responses_keep_latest() {
        let backend = FakeBackend::default()
            .respond("/api/search?q=ham", Ok(items(&["ham radio", "hammer"])))
            .respond("/api/search?q=hamm", Ok(items(&["hammer"])));
        let (search, _) = coordinator(backend);

        let older = search.update_query("ham".to_string());
        let newer = search.update_query("hamm".to_string());

        // The newer request answers first, then the older one arrives.
        assert_eq!(newer.await, SearchOutcome::Applied);
        assert_eq!(older.await, SearchOutcome::Superseded);
        assert_eq!(search.results().items.len(), 1);
        assert_eq!(search.results().items[0].name, "hammer");
    }

    #[tokio::test]
    async fn test_clear_supersedes_in_flight_search() {
        let backend = FakeBackend::default().respond("/api/search?q=ba", Ok(items(&["battery"])));
        let (search, _) = coordinator(backend);

        let in_flight = search.update_query("ba".to_string());
        let cleared = search.update_query(String::new());

        assert_eq!(cleared.await, SearchOutcome::Cleared);
        assert_eq!(in_flight.await, SearchOutcome::Superseded);
        assert!(search.results().is_empty());
    }

    #[tokio::test]
    async fn test_search_uses_mounted_endpoint() {
        let url = "/ingress/api/search?q=box%20a";
        let backend = FakeBackend::default().respond(
            url,
            Ok(SearchResults {
                boxes: vec![StorageBox {
                    id: 1,
                    unit_id: 1,
                    name: "Box A".to_string(),
                    description: None,
                    slug: None,
                    items: vec![],
                }],
                items: vec![],
            }),
        );
        let requests = Rc::clone(&backend.requests);
        let search = SearchCoordinator::new(
            backend,
            Endpoints::new(PathResolver::new(Some(MountConfig::new("/ingress/")))),
        );

        assert_eq!(search.update_query("box a".to_string()).await, SearchOutcome::Applied);
        assert_eq!(*requests.borrow(), vec![url.to_string()]);
        assert_eq!(search.results().boxes[0].name, "Box A");
    }

    #[test]
    fn test_threshold_counts_characters() {
        let state = SearchState {
            query_text: "é".to_string(),
            ..Default::default()
        };
        assert!(!state.is_active());
    }
}
