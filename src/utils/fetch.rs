//! Network fetching with timeout support.

use std::pin::pin;

use futures_util::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use whereisit_core::{FetchError, SearchBackend, SearchResults};

use crate::config::FETCH_TIMEOUT_MS;
use crate::utils::dom;

/// GET `url` and decode the JSON body.
///
/// The request races a [`FETCH_TIMEOUT_MS`] timer; non-2xx responses map to
/// [`FetchError::HttpError`].
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    if dom::window().is_none() {
        return Err(FetchError::NoWindow);
    }

    let request = pin!(Request::get(url).send());
    let timeout = pin!(TimeoutFuture::new(FETCH_TIMEOUT_MS));

    let response = match select(request, timeout).await {
        Either::Left((result, _)) => {
            result.map_err(|e| FetchError::NetworkError(e.to_string()))?
        }
        Either::Right(_) => return Err(FetchError::Timeout),
    };

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// [`SearchBackend`] over the Fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSearchBackend;

impl SearchBackend for HttpSearchBackend {
    fn search(&self, url: &str) -> impl Future<Output = Result<SearchResults, FetchError>> {
        let url = url.to_string();
        async move { fetch_json::<SearchResults>(&url).await }
    }
}
