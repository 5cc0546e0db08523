//! Client entry point and builder.

use crate::config::{self, ClientConfig};
use crate::request::{RequestBuilder, RequestDescriptor};
use crate::resources::{Announcements, Conversations, Messages};
use crate::response::{self, ApiResponse};
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use regex::Regex;
use std::sync::Arc;

/// Client for the Layer platform API.
///
/// Holds the validated [`ClientConfig`] and a [`Transport`]; all resource
/// methods hang off the facades returned by [`conversations`],
/// [`messages`] and [`announcements`]. The client is cheap to clone and
/// safe to share across tasks — nothing in it is mutated after
/// construction.
///
/// [`conversations`]: LayerClient::conversations
/// [`messages`]: LayerClient::messages
/// [`announcements`]: LayerClient::announcements
#[derive(Clone)]
pub struct LayerClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    requests: RequestBuilder,
}

impl std::fmt::Debug for LayerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayerClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LayerClient {
    /// Construct a client against the production endpoint. Fails if the
    /// token is empty or the app id is missing, malformed, or
    /// fully-qualified.
    pub fn new(token: impl Into<String>, app_id: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).app_id(app_id).build()
    }

    pub fn builder() -> LayerClientBuilder {
        LayerClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn conversations(&self) -> Conversations<'_> {
        Conversations::new(self)
    }

    pub fn messages(&self) -> Messages<'_> {
        Messages::new(self)
    }

    pub fn announcements(&self) -> Announcements<'_> {
        Announcements::new(self)
    }

    pub(crate) fn requests(&self) -> &RequestBuilder {
        &self.requests
    }

    /// Execute one descriptor and classify the outcome. Every facade method
    /// funnels through here, so the single-completion guarantee holds for
    /// the whole surface.
    pub(crate) async fn execute(&self, request: RequestDescriptor) -> Result<ApiResponse> {
        let raw = self.transport.send(&request).await?;
        response::normalize(raw)
    }
}

/// Builder for [`LayerClient`].
pub struct LayerClientBuilder {
    token: Option<String>,
    app_id: Option<String>,
    base_url: String,
    app_id_pattern: Option<Regex>,
    transport: Option<Arc<dyn Transport>>,
}

impl LayerClientBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            app_id: None,
            base_url: config::DEFAULT_BASE_URL.to_string(),
            app_id_pattern: None,
            transport: None,
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Point the client at a different endpoint, e.g. a mock server in
    /// tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the accepted app id grammar. The default accepts a bare
    /// UUID and nothing else.
    pub fn app_id_pattern(mut self, pattern: Regex) -> Self {
        self.app_id_pattern = Some(pattern);
        self
    }

    /// Substitute the HTTP execution capability. Primarily a test seam.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<LayerClient> {
        let pattern = self
            .app_id_pattern
            .unwrap_or_else(|| config::default_app_id_pattern().clone());
        let config = ClientConfig::with_pattern(
            self.token.unwrap_or_default(),
            self.app_id.unwrap_or_default(),
            self.base_url,
            &pattern,
        )?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&config)?),
        };
        let requests = RequestBuilder::new(config.app_id());

        Ok(LayerClient {
            config: Arc::new(config),
            transport,
            requests,
        })
    }
}

impl Default for LayerClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
