//! 后台请求结果处理

use std::time::Duration;

use proxy_controller_client::log_sanitizer::truncate_for_log;

use crate::message::{BackendMessage, Command};
use crate::model::{App, DelayResult};

/// 切换成功后等待控制器状态落定的时间
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// 处理后台消息
pub fn update(app: &mut App, msg: BackendMessage) -> Command {
    match msg {
        BackendMessage::ProxiesLoaded { groups, proxies } => {
            log::debug!("Loaded {} selectable groups", groups.len());
            app.loading = false;
            app.last_error = None;
            app.groups = groups;
            app.proxies = proxies;
            // 会话测速结果可能比控制器记录的历史更旧
            app.delays.clear();
            if app.current_group >= app.groups.len() {
                app.current_group = 0;
            }
            app.restore_cursor();
            Command::None
        }

        BackendMessage::LoadFailed(err) => {
            log::warn!("Failed to load proxies: {}", truncate_for_log(&err.to_string()));
            app.loading = false;
            app.last_error = Some(err);
            Command::None
        }

        BackendMessage::SelectFinished {
            group,
            member,
            result,
        } => match result {
            Ok(()) => {
                log::info!("Group {group} now uses {member}");
                Command::LoadProxiesAfter(SETTLE_DELAY)
            }
            Err(err) => {
                log::warn!(
                    "Failed to select {member} in group {group}: {}",
                    truncate_for_log(&err.to_string())
                );
                app.last_error = Some(err);
                Command::None
            }
        },

        BackendMessage::DelayMeasured { member, result } => {
            let delay = match result {
                Ok(ms) => DelayResult::Measured(ms),
                Err(err) => {
                    log::debug!("Delay test for {member} failed: {err}");
                    DelayResult::Failed
                }
            };
            app.delays.insert(member, delay);
            Command::None
        }
    }
}
