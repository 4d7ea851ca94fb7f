use std::collections::HashMap;

use proxy_controller_client::{Proxy, ProxyError};

/// 后台请求完成后回送的消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 代理列表加载成功
    ProxiesLoaded {
        groups: Vec<String>,
        proxies: HashMap<String, Proxy>,
    },
    /// 代理列表加载失败
    LoadFailed(ProxyError),
    /// 切换活动成员完成
    SelectFinished {
        group: String,
        member: String,
        result: Result<(), ProxyError>,
    },
    /// 延迟测试完成
    DelayMeasured {
        member: String,
        result: Result<u32, ProxyError>,
    },
}
