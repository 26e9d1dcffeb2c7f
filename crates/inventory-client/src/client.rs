//! # Product Client
//!
//! Thin HTTP wrapper over the products API.
//!
//! ## URL Layout
//! ```text
//! base = http://localhost:5000/api/products
//!
//! fetch(All)          GET    {base}
//! fetch(Expired)      GET    {base}/expired
//! fetch(NearExpiry)   GET    {base}/near-expiry
//! create(input)       POST   {base}
//! update(id, input)   PUT    {base}/{id}
//! delete(id)          DELETE {base}/{id}
//! ```
//!
//! Any non-2xx status is a failure carrying the server's `error` text, or a
//! per-operation fallback. No retries and no caching.

use inventory_core::{DeletedProduct, Product, ProductInput, ProductView};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Default collection URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/products";

const FETCH_FAILED: &str = "Failed to fetch products";
const CREATE_FAILED: &str = "Failed to add product";
const UPDATE_FAILED: &str = "Failed to update";
const DELETE_FAILED: &str = "Failed to delete";

/// Error body the API sends with every failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the products API.
#[derive(Debug, Clone)]
pub struct ProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ProductClient {
    fn default() -> Self {
        ProductClient::new(DEFAULT_API_URL)
    }
}

impl ProductClient {
    /// Creates a client for the collection at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        ProductClient::with_http(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ProductClient { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a list view.
    pub fn view_url(&self, view: ProductView) -> String {
        format!("{}{}", self.base_url, view.path_suffix())
    }

    /// URL for a single product.
    pub fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetches the products in `view`.
    pub async fn fetch(&self, view: ProductView) -> ClientResult<Vec<Product>> {
        let url = self.view_url(view);
        debug!(%url, "Fetching products");

        let response = self.http.get(&url).send().await.map_err(|source| {
            ClientError::Transport {
                context: FETCH_FAILED,
                source,
            }
        })?;

        decode(response, FETCH_FAILED).await
    }

    /// Creates a product; returns it with its server-assigned id.
    pub async fn create(&self, input: &ProductInput) -> ClientResult<Product> {
        let response = self
            .http
            .post(&self.base_url)
            .json(input)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                context: CREATE_FAILED,
                source,
            })?;

        decode(response, CREATE_FAILED).await
    }

    /// Replaces a product's fields; returns the updated record.
    pub async fn update(&self, id: i64, input: &ProductInput) -> ClientResult<Product> {
        let response = self
            .http
            .put(self.item_url(id))
            .json(input)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                context: UPDATE_FAILED,
                source,
            })?;

        decode(response, UPDATE_FAILED).await
    }

    /// Deletes a product; returns the removed record.
    pub async fn delete(&self, id: i64) -> ClientResult<DeletedProduct> {
        let response = self
            .http
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                context: DELETE_FAILED,
                source,
            })?;

        decode(response, DELETE_FAILED).await
    }
}

/// Turns a response into `T`, or into an error carrying the server message.
async fn decode<T: DeserializeOwned>(response: Response, context: &'static str) -> ClientResult<T> {
    let status = response.status();

    if !status.is_success() {
        return Err(api_error(status, response, context).await);
    }

    response.json::<T>().await.map_err(|e| ClientError::Decode {
        context,
        message: e.to_string(),
    })
}

async fn api_error(status: StatusCode, response: Response, context: &'static str) -> ClientError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => context.to_string(),
    };

    debug!(status = status.as_u16(), %message, "API request failed");
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
