//! Paged `v1` Node listing against a single API server.

use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Empty, LengthLimitError, Limited};
use hyper::{Method, Request, StatusCode, header};
use node_ref_resolver_sdk::{InventoryError, MemberRecord};
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;
use url::Url;

use super::node_list::NodeList;
use super::transport::{ApiClient, build_client};
use crate::config::ClusterEndpointConfig;

/// Characters of an error body echoed into `Unavailable` messages.
const ERROR_BODY_PREVIEW: usize = 256;

/// Lists Nodes from one workload cluster.
pub struct ClusterClient {
    name: String,
    nodes_url: Url,
    bearer_token: Option<SecretString>,
    page_size: u32,
    request_timeout: Duration,
    max_response_bytes: usize,
    max_pages: usize,
    http: ApiClient,
}

impl ClusterClient {
    /// Builds the client for one configured cluster.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or TLS setup fails.
    pub fn new(cfg: &ClusterEndpointConfig) -> anyhow::Result<Self> {
        cfg.validate()?;

        let mut nodes_url = cfg.api_server.clone();
        nodes_url
            .path_segments_mut()
            .map_err(|()| anyhow::anyhow!("cluster '{}': API server URL cannot be a base", cfg.name))?
            .pop_if_empty()
            .extend(["api", "v1", "nodes"]);

        let http = build_client(cfg.certificate_authority.as_deref(), cfg.allow_insecure_http)?;

        Ok(Self {
            name: cfg.name.clone(),
            nodes_url,
            bearer_token: cfg.bearer_token.clone(),
            page_size: cfg.page_size,
            request_timeout: cfg.request_timeout,
            max_response_bytes: cfg.max_response_bytes,
            max_pages: cfg.max_pages,
            http,
        })
    }

    /// Cluster name this client serves.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lists every Node, following `continue` tokens to the last page.
    ///
    /// # Errors
    ///
    /// Fails on the first page that errors, times out, or cannot be decoded.
    /// A `continue` token repeated back to back, or more than `max_pages`
    /// pages, fails with [`InventoryError::InvalidResponse`].
    /// Returns [`InventoryError::Cancelled`] as soon as `cancel` fires.
    #[tracing::instrument(skip_all, fields(cluster = %self.name))]
    pub async fn list_nodes(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<MemberRecord>, InventoryError> {
        let mut members = Vec::new();
        let mut continue_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(InventoryError::Cancelled),
                page = self.fetch_page(continue_token.as_deref()) => page?,
            };
            pages += 1;
            members.extend(page.items.into_iter().map(MemberRecord::from));

            let Some(next) = page.metadata.next_page() else {
                break;
            };
            if continue_token.as_deref() == Some(next) {
                return Err(InventoryError::InvalidResponse(format!(
                    "API server repeated continue token after page {pages}"
                )));
            }
            if pages >= self.max_pages {
                return Err(InventoryError::InvalidResponse(format!(
                    "listing did not finish within {} pages",
                    self.max_pages
                )));
            }
            continue_token = Some(next.to_owned());
        }

        tracing::debug!(pages, members = members.len(), "listed cluster nodes");
        Ok(members)
    }

    fn page_url(&self, continue_token: Option<&str>) -> Url {
        let mut url = self.nodes_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &self.page_size.to_string());
            if let Some(token) = continue_token {
                query.append_pair("continue", token);
            }
        }
        url
    }

    async fn fetch_page(&self, continue_token: Option<&str>) -> Result<NodeList, InventoryError> {
        let url = self.page_url(continue_token);

        let mut builder = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.bearer_token {
            builder = builder.header(
                header::AUTHORIZATION,
                format!("Bearer {}", token.expose_secret()),
            );
        }
        let request = builder
            .body(Empty::<Bytes>::new())
            .map_err(|e| InventoryError::Unavailable(format!("failed to build request: {e}")))?;

        let exchange = async {
            let response = self
                .http
                .request(request)
                .await
                .map_err(|e| InventoryError::Unavailable(format!("request failed: {e}")))?;
            let status = response.status();
            let body = Limited::new(response.into_body(), self.max_response_bytes)
                .collect()
                .await
                .map_err(|e| {
                    if e.is::<LengthLimitError>() {
                        oversized_body(status, self.max_response_bytes)
                    } else {
                        InventoryError::Unavailable(format!("failed to read body: {e}"))
                    }
                })?
                .to_bytes();
            Ok::<_, InventoryError>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.request_timeout, exchange)
            .await
            .map_err(|_| {
                tracing::warn!(timeout = ?self.request_timeout, "node list request timed out");
                InventoryError::Timeout(self.request_timeout)
            })??;

        decode_page(status, &body)
    }
}

fn oversized_body(status: StatusCode, limit: usize) -> InventoryError {
    let msg = format!("response body exceeds {limit} bytes");
    if status.is_success() {
        InventoryError::InvalidResponse(msg)
    } else {
        InventoryError::Unavailable(format!("HTTP {status}: {msg}"))
    }
}

fn decode_page(status: StatusCode, body: &[u8]) -> Result<NodeList, InventoryError> {
    if !status.is_success() {
        let preview = String::from_utf8_lossy(body);
        let preview: String = preview.chars().take(ERROR_BODY_PREVIEW).collect();
        return Err(InventoryError::Unavailable(format!(
            "HTTP {status}: {preview}"
        )));
    }

    serde_json::from_slice(body).map_err(|e| InventoryError::InvalidResponse(e.to_string()))
}
