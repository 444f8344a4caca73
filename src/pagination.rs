//! Lazy traversal of paginated collections.
//!
//! The gateway serves collections one page at a time. A [`PaginatedResponse`] wraps a
//! page-fetch function and exposes the whole collection either as a lazy stream
//! ([`into_stream`](PaginatedResponse::into_stream)) or as a fully buffered `Vec`
//! ([`collect_all`](PaginatedResponse::collect_all)).

use crate::Error;
use futures::{
    future::BoxFuture,
    stream::{self, BoxStream},
    FutureExt, StreamExt, TryStreamExt,
};
use std::{
    collections::VecDeque,
    fmt::{Debug, Formatter},
    future::Future,
};

/// One page of a paginated collection.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Page<T> {
    /// Number of items in the whole collection.
    pub total_items: u32,
    /// Maximum number of items the server returns per page.
    pub page_size: u32,
    /// Items of this page, in server order.
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if there are pages left after `page_number`, which is the number of this page.
    fn has_more(&self, page_number: u32) -> bool {
        !self.items.is_empty()
            && self.page_size > 0
            && u64::from(page_number) * u64::from(self.page_size) < u64::from(self.total_items)
    }
}

type PageFetcher<T> = Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>, Error>> + Send + Sync>;

/// A collection fetched page by page, starting from page 1.
pub struct PaginatedResponse<T> {
    fetch_page: PageFetcher<T>,
}

impl<T> Debug for PaginatedResponse<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedResponse").finish_non_exhaustive()
    }
}

struct StreamState<T> {
    fetch_page: PageFetcher<T>,
    next_page: Option<u32>,
    buffer: VecDeque<T>,
}

impl<T: Send + 'static> PaginatedResponse<T> {
    /// Wraps a page-fetch function. Nothing is fetched until the response is consumed.
    pub fn new<F, Fut>(fetch_page: F) -> Self
    where
        F: Fn(u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Page<T>, Error>> + Send + 'static,
    {
        Self {
            fetch_page: Box::new(move |page_number| fetch_page(page_number).boxed()),
        }
    }

    /// Turns the collection into a lazy stream of items.
    ///
    /// Pages are fetched one at a time, in increasing order, and only once all the items
    /// of the previous page have been pulled. The stream ends after the last page or
    /// right after the first error.
    pub fn into_stream(self) -> BoxStream<'static, Result<T, Error>> {
        let state = StreamState {
            fetch_page: self.fetch_page,
            next_page: Some(1),
            buffer: VecDeque::new(),
        };

        stream::try_unfold(state, |mut state| async move {
            loop {
                if let Some(item) = state.buffer.pop_front() {
                    return Ok::<_, Error>(Some((item, state)));
                }

                let page_number = match state.next_page {
                    Some(page_number) => page_number,
                    None => return Ok(None),
                };

                tracing::debug!(page_number, "Fetching page");
                let page = (state.fetch_page)(page_number).await?;

                state.next_page = page.has_more(page_number).then(|| page_number + 1);
                state.buffer.extend(page.items);
            }
        })
        .boxed()
    }

    /// Fetches every page and returns all the items in order.
    pub async fn collect_all(self) -> Result<Vec<T>, Error> {
        self.into_stream().try_collect().await
    }
}
