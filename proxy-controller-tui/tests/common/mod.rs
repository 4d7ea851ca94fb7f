//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;

use proxy_controller_client::{canned_proxies, Proxy, ProxyKind};
use proxy_controller_tui::message::{AppMessage, BackendMessage, Command, NavigationMessage};
use proxy_controller_tui::model::App;
use proxy_controller_tui::update::update;
use ratatui::text::Line;

/// 行的纯文本内容
pub fn line_text(line: &Line<'_>) -> String {
    line.to_string()
}

pub fn texts(lines: &[Line<'_>]) -> Vec<String> {
    lines.iter().map(line_text).collect()
}

/// 模拟一次加载完成（与 Mock 模式相同的 Proxy / Auto 数据集）
pub fn loaded_canned_app() -> App {
    let mut app = App::new();
    update(
        &mut app,
        AppMessage::Backend(BackendMessage::ProxiesLoaded {
            groups: vec!["Proxy".into(), "Auto".into()],
            proxies: canned_proxies(),
        }),
    );
    app
}

/// 单组数据集
pub fn single_group(name: &str, now: &str, members: &[&str]) -> (Vec<String>, HashMap<String, Proxy>) {
    let mut proxies = HashMap::new();
    proxies.insert(
        name.to_string(),
        Proxy::group(name, ProxyKind::Selector, now, members),
    );
    (vec![name.to_string()], proxies)
}

/// 指定尺寸下的单组应用
pub fn single_group_app(members: &[&str], height: u16) -> App {
    let (groups, proxies) = single_group("Proxy", members.first().copied().unwrap_or(""), members);
    let mut app = App::with_data(groups, proxies);
    update(
        &mut app,
        AppMessage::Resize {
            width: 80,
            height,
        },
    );
    app
}

/// n 个成员名：Node-01 .. Node-n
pub fn node_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Node-{i:02}")).collect()
}

pub fn nav(app: &mut App, msg: NavigationMessage) -> Command {
    update(app, AppMessage::Navigation(msg))
}

/// 检查模型不变量
pub fn assert_invariants(app: &App) {
    if !app.groups.is_empty() {
        assert!(app.current_group < app.groups.len(), "group out of range");
    }
    let len = app.current_members().len();
    if len == 0 {
        assert_eq!(app.cursor, 0, "cursor must be 0 without members");
    } else {
        assert!(app.cursor < len, "cursor {} out of {len}", app.cursor);
    }
    let visible = app.visible_rows();
    assert!(app.viewport_offset <= app.cursor, "cursor above viewport");
    if len > 0 {
        assert!(app.cursor < app.viewport_offset + visible, "cursor below viewport");
    }
    assert!(app.viewport_offset <= len.saturating_sub(visible), "offset past end");
}
