//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use log::warn;
use reqwest::Client;

use crate::api::ArtworksResponse;
use crate::api::Page;
use crate::api::PageSource;
use crate::api::artworks_url;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Artwork;

/// Public API root of the Art Institute of Chicago.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// HTTP client for the artworks collection.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use artic_lib::ArticClient;
/// use artic_lib::api::PageSource;
///
/// let client = ArticClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.fetch_page(1, 12).await?;
/// println!("{} artworks in total", page.total_count());
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: String,
    fields: Vec<String>,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the fields requested for each artwork.
    pub fn fields(&self) -> &[String] {
        &self.inner.fields
    }

    /// Fetches one page of artworks.
    ///
    /// Pages are 1-based. Index 0 and size 0 are rejected without a request.
    pub async fn artworks(&self, page: u32, limit: u32) -> Result<Page<Artwork>, Error> {
        if page == 0 {
            return Err(ValidationError::InvalidPage(page).into());
        }
        if limit == 0 {
            return Err(ValidationError::ZeroPageSize.into());
        }

        let url = artworks_url(&self.inner.base_url, page, limit, &self.inner.fields)?;
        debug!("GET {}", url);

        let mut request = self.inner.http_client.get(url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            warn!("Artworks page {} failed with HTTP {}", page, status.as_u16());
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let page = ArtworksResponse::parse(&body)?.into_page();
        debug!(
            "Fetched {} artworks (total {})",
            page.len(),
            page.total_count()
        );
        Ok(page)
    }
}

#[async_trait]
impl PageSource for ArticClient {
    type Record = Artwork;

    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Page<Artwork>, Error> {
        self.artworks(page, page_size).await
    }
}

/// Builder for constructing an [`ArticClient`].
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .base_url("http://localhost:8080/api/v1")
///     .fields(["id", "title"])
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    fields: Vec<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ArticClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fields: Artwork::FIELDS.iter().map(|f| f.to_string()).collect(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the API root.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the fields requested for each artwork.
    ///
    /// An empty list requests every field.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArticClient`].
    pub fn build(self) -> Result<ArticClient, Error> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url: self.base_url,
                fields: self.fields,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
