//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 用户导航消息
//!         mod backend;            // 后台请求结果
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Command {...}
//!
//!
//!     update() 不做任何 I/O。需要访问控制器时，它返回一个 Command，
//!     由主循环交给 CommandExecutor 在 tokio 运行时上执行：
//!
//!         Command::None                   什么都不做
//!         Command::LoadProxies            拉取代理列表
//!         Command::LoadProxiesAfter(d)    等待 d 后拉取（切换后等控制器落定）
//!         Command::SelectProxy {..}       设置活动成员
//!         Command::MeasureDelay {..}      测速
//!
//!     因此 update() 是纯函数式的状态机：给定 App 和 Message，
//!     结果完全确定，测试时无需终端和网络。
//!
//!
//!     加载中（app.loading == true）只响应 Quit / Resize 与后台结果，
//!     其余按键全部忽略。显示错误横幅时导航同样被忽略，Reload 仍可用。
//!

mod backend;
mod navigation;

use crate::message::{AppMessage, Command};
use crate::model::App;

pub use backend::SETTLE_DELAY;

/// 处理应用消息，更新状态，返回需要执行的副作用
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Command::None
        }

        AppMessage::Reload => {
            if app.loading {
                return Command::None;
            }
            log::debug!("Reload requested");
            app.loading = true;
            Command::LoadProxies
        }

        AppMessage::Resize { width, height } => {
            app.terminal_width = width;
            app.terminal_height = height;
            app.adjust_viewport();
            Command::None
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),

        AppMessage::Backend(backend_msg) => backend::update(app, backend_msg),

        AppMessage::Noop => Command::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxy_controller_client::canned_proxies;

    fn canned_app() -> App {
        App::with_data(vec!["Proxy".into(), "Auto".into()], canned_proxies())
    }

    #[test]
    fn quit_works_while_loading() {
        let mut app = App::new();
        assert_eq!(update(&mut app, AppMessage::Quit), Command::None);
        assert!(app.should_quit);
    }

    #[test]
    fn reload_sets_loading_and_requests_fetch() {
        let mut app = canned_app();
        assert_eq!(update(&mut app, AppMessage::Reload), Command::LoadProxies);
        assert!(app.loading);
    }

    #[test]
    fn reload_is_ignored_while_loading() {
        let mut app = App::new();
        assert_eq!(update(&mut app, AppMessage::Reload), Command::None);
    }

    #[test]
    fn resize_stores_size_and_keeps_cursor_visible() {
        let mut app = canned_app();
        app.current_group = 1;
        app.cursor = 3;
        app.viewport_offset = 0;

        let cmd = update(
            &mut app,
            AppMessage::Resize {
                width: 40,
                height: 5,
            },
        );

        assert!(cmd.is_none());
        assert_eq!((app.terminal_width, app.terminal_height), (40, 5));
        // 5 - 2 组 - 2 = 1 行可见
        assert_eq!(app.viewport_offset, 3);
    }

    #[test]
    fn noop_changes_nothing() {
        let mut app = canned_app();
        let before = (app.current_group, app.cursor, app.viewport_offset);
        assert!(update(&mut app, AppMessage::Noop).is_none());
        assert_eq!(before, (app.current_group, app.cursor, app.viewport_offset));
    }
}
