//! Controller HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use crate::error::Result;
use crate::http_client::{HttpUtils, create_http_client};
use crate::mock::MockController;
use crate::traits::ProxyApi;
use crate::types::{DelayResponse, DelayTest, ProxiesResponse, SelectRequest};

/// Default controller address of Clash/Mihomo.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9090";

/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

const PROXIES_PATH: &str = "/proxies";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Controller base URL, without trailing slash.
    pub base_url: String,
    /// Bearer secret; no `Authorization` header is sent when `None`.
    pub secret: Option<String>,
    /// Serve the canned dataset instead of talking to a controller.
    pub mock: bool,
    /// Upper bound for every request.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration for a controller at `base_url`.
    ///
    /// An empty URL falls back to [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if base_url.is_empty() {
                DEFAULT_BASE_URL.to_string()
            } else {
                base_url.to_string()
            },
            secret: None,
            mock: false,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Sets the bearer secret; blank secrets are treated as absent.
    #[must_use]
    pub fn with_secret(mut self, secret: Option<String>) -> Self {
        self.secret = secret.filter(|s| !s.is_empty());
        self
    }

    #[must_use]
    pub fn with_mock(mut self, mock: bool) -> Self {
        self.mock = mock;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

enum Backend {
    Http { client: Client },
    Mock(MockController),
}

/// Client for the Clash/Mihomo external controller.
pub struct ProxyClient {
    config: ClientConfig,
    backend: Backend,
}

impl ProxyClient {
    /// Creates a client. In mock mode no HTTP client is built at all.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let backend = if config.mock {
            log::info!("Mock mode enabled, controller requests are served from canned data");
            Backend::Mock(MockController::new())
        } else {
            Backend::Http {
                client: create_http_client(config.request_timeout)?,
            }
        };
        Ok(Self { config, backend })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.backend, Backend::Mock(_))
    }

    fn proxies_url(&self) -> String {
        format!("{}{PROXIES_PATH}", self.config.base_url)
    }

    /// `/proxies/{name}`，名称需要百分号编码（组名常含空格或 emoji）
    fn proxy_url(&self, name: &str) -> String {
        format!(
            "{}{PROXIES_PATH}/{}",
            self.config.base_url,
            urlencoding::encode(name)
        )
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.secret {
            Some(secret) => request.bearer_auth(secret),
            None => request,
        }
    }

    /// Lists all proxies and groups.
    pub async fn fetch_groups(&self) -> Result<ProxiesResponse> {
        let client = match &self.backend {
            Backend::Mock(mock) => return Ok(mock.fetch_groups().await),
            Backend::Http { client } => client,
        };

        let url = self.proxies_url();
        let request = self.with_auth(client.get(&url));
        let (status, body) = HttpUtils::execute_request(request, "GET", &url).await?;
        HttpUtils::ensure_status(status, &body, &[200])?;
        let response: ProxiesResponse = HttpUtils::parse_json(&body)?;
        log::info!("Loaded {} proxies from controller", response.proxies.len());
        Ok(response)
    }

    /// Makes `member` the active member of `group`.
    ///
    /// Succeeds only on HTTP 200 or 204.
    pub async fn set_active_member(&self, group: &str, member: &str) -> Result<()> {
        let client = match &self.backend {
            Backend::Mock(mock) => return mock.set_active_member(group, member).await,
            Backend::Http { client } => client,
        };

        let url = self.proxy_url(group);
        let request = self.with_auth(client.put(&url).json(&SelectRequest { name: member }));
        let (status, body) = HttpUtils::execute_request(request, "PUT", &url).await?;
        HttpUtils::ensure_status(status, &body, &[200, 204])?;
        log::info!("Selected '{member}' for group '{group}'");
        Ok(())
    }

    /// Measures the delay of `member` in milliseconds.
    ///
    /// The controller tests the named proxy itself, so the request targets the
    /// member; `group` is only used for logging and for the mock dataset.
    pub async fn measure_delay(&self, group: &str, member: &str, test: &DelayTest) -> Result<u32> {
        let client = match &self.backend {
            Backend::Mock(mock) => return mock.measure_delay(group, member, test).await,
            Backend::Http { client } => client,
        };

        let url = format!("{}/delay", self.proxy_url(member));
        let timeout = test.timeout_ms.to_string();
        let request = self.with_auth(
            client
                .get(&url)
                .query(&[("url", test.url.as_str()), ("timeout", timeout.as_str())]),
        );
        let (status, body) = HttpUtils::execute_request(request, "GET", &url).await?;
        HttpUtils::ensure_status(status, &body, &[200])?;
        let response: DelayResponse = HttpUtils::parse_json(&body)?;
        log::debug!("[{group}] {member}: {}ms", response.delay);
        Ok(response.delay)
    }
}

#[async_trait]
impl ProxyApi for ProxyClient {
    async fn fetch_groups(&self) -> Result<ProxiesResponse> {
        ProxyClient::fetch_groups(self).await
    }

    async fn set_active_member(&self, group: &str, member: &str) -> Result<()> {
        ProxyClient::set_active_member(self, group, member).await
    }

    async fn measure_delay(&self, group: &str, member: &str, test: &DelayTest) -> Result<u32> {
        ProxyClient::measure_delay(self, group, member, test).await
    }
}
