//! 命令执行器
//!
//! 把 Update 返回的 [`Command`] 放到 tokio 运行时上执行，
//! 结果以 [`AppMessage`] 的形式经通道送回主循环。

use std::future::Future;
use std::sync::Arc;

use proxy_controller_client::{DelayTest, ProxyApi};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, BackendMessage, Command};

pub struct CommandExecutor {
    api: Arc<dyn ProxyApi>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
    delay_test: DelayTest,
}

impl CommandExecutor {
    pub fn new(
        api: Arc<dyn ProxyApi>,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
        delay_test: DelayTest,
    ) -> Self {
        Self {
            api,
            runtime,
            tx,
            delay_test,
        }
    }

    /// 执行命令（不阻塞调用方）
    pub fn execute(&self, command: Command) {
        let api = Arc::clone(&self.api);
        match command {
            Command::None => {}
            Command::LoadProxies => self.spawn(async move { load_proxies(api.as_ref()).await }),
            Command::LoadProxiesAfter(delay) => self.spawn(async move {
                tokio::time::sleep(delay).await;
                load_proxies(api.as_ref()).await
            }),
            Command::SelectProxy { group, member } => {
                self.spawn(async move { select_proxy(api.as_ref(), group, member).await });
            }
            Command::MeasureDelay { group, member } => {
                let test = self.delay_test.clone();
                self.spawn(async move { measure_delay(api.as_ref(), group, member, &test).await });
            }
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = task.await;
            // 主循环已退出时接收端被丢弃，结果直接作废
            if tx.send(msg).is_err() {
                log::debug!("UI loop gone, dropping backend result");
            }
        });
    }
}

/// 拉取代理列表
pub async fn load_proxies(api: &dyn ProxyApi) -> AppMessage {
    let msg = match api.fetch_groups().await {
        Ok(response) => {
            let groups = response.selectable_groups();
            BackendMessage::ProxiesLoaded {
                groups,
                proxies: response.proxies,
            }
        }
        Err(err) => BackendMessage::LoadFailed(err),
    };
    AppMessage::Backend(msg)
}

/// 设置活动成员
pub async fn select_proxy(api: &dyn ProxyApi, group: String, member: String) -> AppMessage {
    let result = api.set_active_member(&group, &member).await;
    AppMessage::Backend(BackendMessage::SelectFinished {
        group,
        member,
        result,
    })
}

/// 测速
pub async fn measure_delay(
    api: &dyn ProxyApi,
    group: String,
    member: String,
    test: &DelayTest,
) -> AppMessage {
    let result = api.measure_delay(&group, &member, test).await;
    AppMessage::Backend(BackendMessage::DelayMeasured { member, result })
}
