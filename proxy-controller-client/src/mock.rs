//! Mock 控制器
//!
//! 不发起任何网络请求，返回固定的两组数据，用于在没有代理内核的环境下
//! 调试界面与编写确定性测试。切换成员会修改内存中的数据，
//! 这样「选择 → 重新加载」的完整流程也能跑通。

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::error::{ProxyError, Result};
use crate::types::{DelayTest, ProxiesResponse, Proxy, ProxyKind};

/// Mock 控制器状态
#[derive(Debug)]
pub struct MockController {
    proxies: Mutex<HashMap<String, Proxy>>,
}

impl MockController {
    /// 创建带固定数据集的 Mock 控制器
    pub fn new() -> Self {
        Self {
            proxies: Mutex::new(canned_proxies()),
        }
    }

    pub async fn fetch_groups(&self) -> ProxiesResponse {
        ProxiesResponse {
            proxies: self.proxies.lock().await.clone(),
        }
    }

    pub async fn set_active_member(&self, group: &str, member: &str) -> Result<()> {
        let mut proxies = self.proxies.lock().await;
        let Some(proxy) = proxies.get_mut(group) else {
            return Err(ProxyError::Protocol {
                status: 404,
                body: r#"{"message":"resource not found"}"#.to_string(),
            });
        };
        if proxy.member_index(member).is_none() {
            return Err(ProxyError::Protocol {
                status: 400,
                body: r#"{"message":"Selector update error: proxy not exist"}"#.to_string(),
            });
        }
        proxy.now = member.to_string();
        log::debug!("[mock] {group} -> {member}");
        Ok(())
    }

    /// 延迟由成员名推算，保证结果稳定
    pub async fn measure_delay(&self, group: &str, member: &str, test: &DelayTest) -> Result<u32> {
        let proxies = self.proxies.lock().await;
        let known = proxies
            .get(group)
            .is_some_and(|proxy| proxy.member_index(member).is_some());
        if !known {
            return Err(ProxyError::Protocol {
                status: 404,
                body: r#"{"message":"resource not found"}"#.to_string(),
            });
        }
        let delay = 40 + member.bytes().map(u32::from).sum::<u32>() % 200;
        if delay > test.timeout_ms {
            return Err(ProxyError::Protocol {
                status: 504,
                body: r#"{"message":"Timeout"}"#.to_string(),
            });
        }
        Ok(delay)
    }
}

impl Default for MockController {
    fn default() -> Self {
        Self::new()
    }
}

/// 固定数据集：
/// - "Proxy"（Selector）：Proxy-1 ~ Proxy-3，当前 Proxy-1
/// - "Auto"（URLTest）：Auto-1 ~ Auto-4，当前 Auto-2
pub fn canned_proxies() -> HashMap<String, Proxy> {
    let mut proxies = HashMap::new();
    proxies.insert(
        "Proxy".to_string(),
        Proxy::group(
            "Proxy",
            ProxyKind::Selector,
            "Proxy-1",
            &["Proxy-1", "Proxy-2", "Proxy-3"],
        ),
    );
    proxies.insert(
        "Auto".to_string(),
        Proxy::group(
            "Auto",
            ProxyKind::UrlTest,
            "Auto-2",
            &["Auto-1", "Auto-2", "Auto-3", "Auto-4"],
        ),
    );
    proxies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn select_updates_canned_data() {
        let mock = MockController::new();
        assert!(mock.set_active_member("Proxy", "Proxy-3").await.is_ok());
        let resp = mock.fetch_groups().await;
        assert_eq!(resp.proxies["Proxy"].now, "Proxy-3");
    }

    #[tokio::test]
    async fn select_unknown_member_is_rejected() {
        let mock = MockController::new();
        let result = mock.set_active_member("Proxy", "Nope").await;
        assert!(matches!(result, Err(ProxyError::Protocol { status: 400, .. })));
        let result = mock.set_active_member("Nope", "Proxy-1").await;
        assert!(matches!(result, Err(ProxyError::Protocol { status: 404, .. })));
    }

    #[tokio::test]
    async fn delay_is_deterministic() {
        let mock = MockController::new();
        let test = DelayTest::default();
        let first = mock.measure_delay("Auto", "Auto-1", &test).await;
        let second = mock.measure_delay("Auto", "Auto-1", &test).await;
        assert!(matches!(first, Ok(ms) if (40..240).contains(&ms)));
        assert_eq!(first, second);
    }
}
