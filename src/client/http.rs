//! reqwest-backed implementation of the resource contract.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::SIGNIN_PATH;
use crate::client::errors::{ClientError, ClientResult};
use crate::client::{ListFilter, Resource, ResourceFetcher};
use crate::dto::{ApiEnvelope, ErrorBody};
use crate::models::config::ClientConfig;
use crate::pagination::{PageRequest, PageResult};

/// Navigation port injected into the HTTP client at construction time.
///
/// Invoked when the backend rejects a request as unauthenticated, so
/// redirect logic lives with the host application instead of a mutable
/// module-level singleton.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
    fn clear_transient_errors(&self);
}

/// Shared HTTP transport for every [`HttpResource`] of one backend.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    navigator: Option<Arc<dyn Navigator>>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            navigator: None,
        })
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        page: PageRequest,
        filter: Option<&ListFilter>,
    ) -> ClientResult<PageResult<T>> {
        let mut params = vec![
            ("page".to_string(), page.page_no.to_string()),
            ("size".to_string(), page.page_size.to_string()),
        ];
        if let Some(filter) = filter {
            params.push((filter.key.clone(), filter.value.clone()));
        }

        let response = self.http.get(self.url(path)).query(&params).send().await?;
        let response = self.check(response).await?;

        let envelope: ApiEnvelope<PageResult<T>> = response.json().await?;
        Ok(envelope.data)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        id: i32,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{id}", self.url(path));
        let response = self.http.put(url).json(body).send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, path: &str, id: i32) -> ClientResult<()> {
        let url = format!("{}/{id}", self.url(path));
        let response = self.http.delete(url).send().await?;
        self.check(response).await?;
        Ok(())
    }

    /// Turns a non-2xx response into a [`ClientError::Server`], extracting
    /// the server-supplied message when the body carries one. 401/403 also
    /// hand control to the navigation port before the error propagates.
    async fn check(&self, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            if let Some(navigator) = &self.navigator {
                debug!("unauthenticated response ({status}), redirecting to {SIGNIN_PATH}");
                navigator.clear_transient_errors();
                navigator.navigate_to(SIGNIN_PATH);
            }
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_default();

        Err(ClientError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

/// [`ResourceFetcher`] for one resource collection over a shared
/// [`HttpClient`].
pub struct HttpResource<R> {
    client: Arc<HttpClient>,
    _resource: PhantomData<R>,
}

impl<R> HttpResource<R> {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceFetcher for HttpResource<R> {
    type Item = R;
    type New = R::New;
    type Update = R::Update;

    async fn list(
        &self,
        page: PageRequest,
        filter: Option<&ListFilter>,
    ) -> ClientResult<PageResult<R>> {
        self.client.get_page(R::PATH, page, filter).await
    }

    async fn create(&self, payload: &R::New) -> ClientResult<R> {
        self.client.post_json(R::PATH, payload).await
    }

    async fn update(&self, id: i32, payload: &R::Update) -> ClientResult<R> {
        self.client.put_json(R::PATH, id, payload).await
    }

    async fn delete(&self, id: i32) -> ClientResult<()> {
        self.client.delete(R::PATH, id).await
    }
}
