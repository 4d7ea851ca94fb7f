use super::{BackendMessage, NavigationMessage};

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 重新拉取代理列表
    Reload,

    /// 终端尺寸变化
    Resize { width: u16, height: u16 },

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 后台请求结果
    Backend(BackendMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
