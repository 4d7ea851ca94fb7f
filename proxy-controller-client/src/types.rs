use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============ Proxy ============

/// Kind of a proxy entry as reported by the controller (`type` field).
///
/// Only [`Selector`](Self::Selector) and [`UrlTest`](Self::UrlTest) entries are
/// treated as selectable groups. Everything else (`Shadowsocks`, `Direct`,
/// `Fallback`, ...) is kept verbatim in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProxyKind {
    /// Manual choice group.
    Selector,
    /// Latency-based automatic choice group.
    UrlTest,
    /// Any other proxy or group type.
    Other(String),
}

impl ProxyKind {
    /// Whether entries of this kind show up as selectable groups.
    #[must_use]
    pub fn is_selectable_group(&self) -> bool {
        matches!(self, Self::Selector | Self::UrlTest)
    }

    /// Wire name of the kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Selector => "Selector",
            Self::UrlTest => "URLTest",
            Self::Other(name) => name,
        }
    }

    /// Ordering bucket used when listing groups: manual groups come first.
    fn rank(&self) -> u8 {
        match self {
            Self::Selector => 0,
            Self::UrlTest => 1,
            Self::Other(_) => 2,
        }
    }
}

impl From<String> for ProxyKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Selector" => Self::Selector,
            "URLTest" => Self::UrlTest,
            _ => Self::Other(value),
        }
    }
}

impl From<ProxyKind> for String {
    fn from(value: ProxyKind) -> Self {
        match value {
            ProxyKind::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One latency sample recorded by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayHistory {
    /// Sample timestamp, as sent by the controller (RFC 3339).
    #[serde(default)]
    pub time: String,
    /// Measured delay in milliseconds; `0` means the test failed.
    #[serde(default)]
    pub delay: u32,
}

/// A proxy or proxy group entry from `GET /proxies`.
///
/// For groups, `now` is the active member and `all` the ordered member list.
/// Plain proxies leave both empty. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxy {
    /// Entry name (also the key in the proxies map).
    #[serde(default)]
    pub name: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: ProxyKind,
    /// Active member (groups only).
    #[serde(default)]
    pub now: String,
    /// Ordered member names (groups only).
    #[serde(default)]
    pub all: Vec<String>,
    /// Past latency samples, oldest first.
    #[serde(default)]
    pub history: Vec<DelayHistory>,
}

impl Proxy {
    /// Creates a group entry.
    pub fn group(
        name: impl Into<String>,
        kind: ProxyKind,
        now: impl Into<String>,
        all: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            now: now.into(),
            all: all.iter().map(|s| (*s).to_string()).collect(),
            history: Vec::new(),
        }
    }

    /// Index of the active member inside `all`.
    pub fn active_index(&self) -> Option<usize> {
        self.all.iter().position(|member| *member == self.now)
    }

    /// Index of a member by name.
    pub fn member_index(&self, member: &str) -> Option<usize> {
        self.all.iter().position(|m| m == member)
    }

    /// Latest recorded delay in milliseconds, if the last test succeeded.
    pub fn last_delay(&self) -> Option<u32> {
        self.history
            .last()
            .map(|h| h.delay)
            .filter(|delay| *delay > 0)
    }
}

/// Response body of `GET /proxies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxiesResponse {
    /// All proxies and groups keyed by name.
    #[serde(default)]
    pub proxies: HashMap<String, Proxy>,
}

impl ProxiesResponse {
    /// Names of the selectable groups in display order.
    ///
    /// Only `Selector` and `URLTest` entries are kept. The controller sends an
    /// unordered map, so the list is ordered deterministically: `Selector`
    /// groups first, then `URLTest` groups, each bucket sorted by name.
    pub fn selectable_groups(&self) -> Vec<String> {
        let mut groups: Vec<(u8, &String)> = self
            .proxies
            .iter()
            .filter(|(_, proxy)| proxy.kind.is_selectable_group())
            .map(|(name, proxy)| (proxy.kind.rank(), name))
            .collect();
        groups.sort();
        groups.into_iter().map(|(_, name)| name.clone()).collect()
    }
}

// ============ Requests / responses ============

/// Body of `PUT /proxies/{group}`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SelectRequest<'a> {
    pub name: &'a str,
}

/// Response body of `GET /proxies/{name}/delay`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DelayResponse {
    pub delay: u32,
}

/// Parameters of a latency test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayTest {
    /// URL the controller fetches through the proxy.
    pub url: String,
    /// Timeout in milliseconds.
    pub timeout_ms: u32,
}

impl DelayTest {
    /// Well-known connectivity-check endpoint used when no URL is given.
    pub const DEFAULT_URL: &'static str = "http://www.gstatic.com/generate_204";
    /// Default test timeout.
    pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

    /// Builds test parameters, falling back to the defaults.
    pub fn new(url: Option<&str>, timeout_ms: Option<u32>) -> Self {
        Self {
            url: url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(Self::DEFAULT_URL)
                .to_string(),
            timeout_ms: timeout_ms.unwrap_or(Self::DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Default for DelayTest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
