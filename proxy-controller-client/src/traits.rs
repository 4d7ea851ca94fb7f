use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DelayTest, ProxiesResponse};

/// Controller API Trait
///
/// The three operations the UI needs from a proxy core. [`ProxyClient`](crate::ProxyClient)
/// implements it against a live controller (or the canned mock dataset); tests can
/// plug in their own implementation.
#[async_trait]
pub trait ProxyApi: Send + Sync {
    /// 获取所有代理与代理组（`GET /proxies`）
    async fn fetch_groups(&self) -> Result<ProxiesResponse>;

    /// 切换代理组当前使用的成员（`PUT /proxies/{group}`）
    async fn set_active_member(&self, group: &str, member: &str) -> Result<()>;

    /// 测试成员延迟，返回毫秒数
    async fn measure_delay(&self, group: &str, member: &str, test: &DelayTest) -> Result<u32>;
}
