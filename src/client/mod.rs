//! The resource-fetcher seam between list controllers and the LearnHub
//! backend.
//!
//! [`ResourceFetcher`] is the trait a [`crate::controller::ListController`]
//! depends on; [`http::HttpResource`] is the production implementation and
//! tests substitute hand-written fetchers.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::pagination::{PageRequest, PageResult};

pub mod errors;
#[cfg(feature = "http")]
pub mod http;
pub mod resources;

pub use errors::{ClientError, ClientResult};

/// Optional single-key filter appended to a list request, e.g.
/// `coach_id=7` on the course list of one coach's admin page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub key: String,
    pub value: String,
}

impl ListFilter {
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

/// A server-side collection exposed through the uniform REST contract.
///
/// Implemented by each listable entity; `PATH` is the collection segment of
/// `GET /{path}?page=&size=`.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    const PATH: &'static str;
    type New: Serialize + Send + Sync + 'static;
    type Update: Serialize + Send + Sync + 'static;
}

/// One parameterized read plus the mutation operations of a resource
/// collection. No operation retries automatically.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    type Item: Clone + Send + Sync + 'static;
    type New: Send + Sync + 'static;
    type Update: Send + Sync + 'static;

    async fn list(
        &self,
        page: PageRequest,
        filter: Option<&ListFilter>,
    ) -> ClientResult<PageResult<Self::Item>>;

    async fn create(&self, payload: &Self::New) -> ClientResult<Self::Item>;

    async fn update(&self, id: i32, payload: &Self::Update) -> ClientResult<Self::Item>;

    async fn delete(&self, id: i32) -> ClientResult<()>;
}
