//! # proxy-controller-client
//!
//! Client for the external controller API of Clash/Mihomo-style proxy cores.
//!
//! ## Operations
//!
//! | Operation | Endpoint | Success |
//! |-----------|----------|---------|
//! | [`ProxyClient::fetch_groups`] | `GET /proxies` | 200 + JSON body |
//! | [`ProxyClient::set_active_member`] | `PUT /proxies/{group}` | 200 / 204 |
//! | [`ProxyClient::measure_delay`] | `GET /proxies/{member}/delay?url=..&timeout=..` | 200 + `{"delay": ms}` |
//!
//! When a secret is configured every request carries
//! `Authorization: Bearer <secret>`.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls for `https://` controllers.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use proxy_controller_client::{ClientConfig, ProxyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://127.0.0.1:9090")
//!         .with_secret(std::env::var("MIHOMO_SECRET").ok());
//!     let client = ProxyClient::new(config)?;
//!
//!     let response = client.fetch_groups().await?;
//!     for group in response.selectable_groups() {
//!         let proxy = &response.proxies[&group];
//!         println!("{group}: {} ({} members)", proxy.now, proxy.all.len());
//!     }
//!
//!     client.set_active_member("Proxy", "HK-01").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Mock Mode
//!
//! [`ClientConfig::with_mock`] replaces the network with a fixed two-group dataset
//! ("Proxy" / "Auto"), which makes UI code testable without a running core.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProxyError>`](ProxyError):
//!
//! - [`ProxyError::Transport`] / [`ProxyError::Timeout`]: controller unreachable
//! - [`ProxyError::Protocol`]: unexpected HTTP status (body kept for diagnostics)
//! - [`ProxyError::Decode`]: malformed response body
//!
//! Nothing is retried automatically.

mod client;
mod error;
mod http_client;
mod mock;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProxyError, Result};

pub use client::{ClientConfig, DEFAULT_BASE_URL, ProxyClient};
pub use mock::canned_proxies;
pub use traits::ProxyApi;

// Re-export types
pub use types::{DelayHistory, DelayTest, ProxiesResponse, Proxy, ProxyKind};

pub use utils::log_sanitizer;
