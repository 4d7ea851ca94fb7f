//! Generic HTTP client tools
//!
//! Shared request processing for the controller endpoints: sending, logging,
//! status checking and JSON decoding. Each endpoint builds its own
//! `RequestBuilder`; this module only runs it and classifies the outcome.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ProxyError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Creates the HTTP client with bounded timeouts.
///
/// The request timeout bounds every call, so an unreachable controller can never
/// keep the process waiting on exit.
pub fn create_http_client(request_timeout: Duration) -> Result<Client, ProxyError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS).min(request_timeout))
        .timeout(request_timeout)
        .build()
        .map_err(|e| ProxyError::Request {
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (for logging)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - the controller answered (any status)
    /// * `Err(ProxyError::Timeout)` - the request timed out
    /// * `Err(ProxyError::Transport)` - the controller could not be reached
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProxyError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::Timeout {
                    detail: e.to_string(),
                }
            } else if e.is_builder() {
                ProxyError::Request {
                    detail: e.to_string(),
                }
            } else {
                ProxyError::Transport {
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProxyError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                ProxyError::Transport {
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Checks the status code against the accepted ones
    ///
    /// # Returns
    /// * `Ok(())` - status is accepted
    /// * `Err(ProxyError::Protocol)` - anything else, with the body attached
    pub fn ensure_status(
        status_code: u16,
        response_text: &str,
        accepted: &[u16],
    ) -> Result<(), ProxyError> {
        if accepted.contains(&status_code) {
            return Ok(());
        }
        log::warn!(
            "Unexpected status code {status_code}: {}",
            truncate_for_log(response_text)
        );
        Err(ProxyError::Protocol {
            status: status_code,
            body: response_text.to_string(),
        })
    }

    /// Parse JSON response
    ///
    /// # Type Parameters
    /// * `T` - target type
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProxyError::Decode)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, ProxyError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ProxyError::Decode {
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_status_accepts_listed_codes() {
        assert!(HttpUtils::ensure_status(200, "", &[200, 204]).is_ok());
        assert!(HttpUtils::ensure_status(204, "", &[200, 204]).is_ok());
    }

    #[test]
    fn ensure_status_rejects_with_body() {
        let result = HttpUtils::ensure_status(400, r#"{"message":"bad"}"#, &[200, 204]);
        assert!(
            matches!(&result, Err(ProxyError::Protocol { status: 400, body }) if body.contains("bad")),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProxyError> = HttpUtils::parse_json(r#"{"x":42}"#);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProxyError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ProxyError::Decode { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn client_builds_with_short_timeout() {
        assert!(create_http_client(Duration::from_millis(500)).is_ok());
    }
}
