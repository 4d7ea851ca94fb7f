//! 应用主状态

use std::collections::HashMap;

use proxy_controller_client::{Proxy, ProxyError};

use super::delay::DelayResult;
use super::viewport;

/// 未收到尺寸事件前假定的终端高度
pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;
/// 未收到尺寸事件前假定的终端宽度
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// 应用状态
#[derive(Debug, Clone)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 可切换的代理组名（已排序）
    pub groups: Vec<String>,
    /// 控制器返回的完整代理表（组与节点）
    pub proxies: HashMap<String, Proxy>,
    /// 当前组在 `groups` 中的下标
    pub current_group: usize,
    /// 光标在当前组成员中的下标
    pub cursor: usize,
    /// 成员列表第一可见行
    pub viewport_offset: usize,
    /// 光标所在成员名，用于刷新后恢复位置
    pub last_cursor_member: Option<String>,
    /// 是否正在加载
    pub loading: bool,
    /// 最近一次失败
    pub last_error: Option<ProxyError>,
    /// 终端宽度
    pub terminal_width: u16,
    /// 终端高度
    pub terminal_height: u16,
    /// 本次会话的测速结果（按成员名）
    pub delays: HashMap<String, DelayResult>,
}

impl App {
    /// 创建初始状态：尚无数据，处于加载中
    pub fn new() -> Self {
        Self {
            should_quit: false,
            groups: Vec::new(),
            proxies: HashMap::new(),
            current_group: 0,
            cursor: 0,
            viewport_offset: 0,
            last_cursor_member: None,
            loading: true,
            last_error: None,
            terminal_width: DEFAULT_TERMINAL_WIDTH,
            terminal_height: DEFAULT_TERMINAL_HEIGHT,
            delays: HashMap::new(),
        }
    }

    /// 用已加载的数据创建状态，光标落在第一组的活动成员上
    pub fn with_data(groups: Vec<String>, proxies: HashMap<String, Proxy>) -> Self {
        let mut app = Self {
            groups,
            proxies,
            loading: false,
            ..Self::new()
        };
        app.snap_cursor_to_active();
        app
    }

    /// 当前组名
    pub fn current_group_name(&self) -> Option<&str> {
        self.groups.get(self.current_group).map(String::as_str)
    }

    /// 当前组的代理条目
    pub fn current_proxy(&self) -> Option<&Proxy> {
        self.current_group_name()
            .and_then(|name| self.proxies.get(name))
    }

    /// 当前组的成员列表（组缺失时为空）
    pub fn current_members(&self) -> &[String] {
        self.current_proxy()
            .map(|proxy| proxy.all.as_slice())
            .unwrap_or_default()
    }

    /// 光标所在的成员名
    pub fn cursor_member(&self) -> Option<&str> {
        self.current_members().get(self.cursor).map(String::as_str)
    }

    /// 当前终端下成员列表可见行数
    pub fn visible_rows(&self) -> usize {
        viewport::visible_rows(self.terminal_height, self.groups.len())
    }

    /// 成员列表是否放不下、需要滚动
    pub fn is_scrollable(&self) -> bool {
        self.current_members().len() > self.visible_rows()
    }

    /// 记录光标所在成员名
    pub fn remember_cursor(&mut self) {
        self.last_cursor_member = self.cursor_member().map(str::to_string);
    }

    /// 按视口规则重新计算偏移
    pub fn adjust_viewport(&mut self) {
        let len = self.current_members().len();
        if len == 0 {
            self.cursor = 0;
        }
        self.viewport_offset =
            viewport::adjust(self.viewport_offset, self.cursor, len, self.visible_rows());
    }

    /// 光标移到当前组的活动成员（找不到时为 0），视口回到顶部
    pub fn snap_cursor_to_active(&mut self) {
        self.cursor = self
            .current_proxy()
            .and_then(Proxy::active_index)
            .unwrap_or(0);
        self.viewport_offset = 0;
        self.adjust_viewport();
        self.remember_cursor();
    }

    /// 刷新后恢复光标：优先按记住的成员名，其次活动成员，最后 0
    pub fn restore_cursor(&mut self) {
        let by_name = self
            .last_cursor_member
            .as_deref()
            .and_then(|name| self.current_proxy().and_then(|p| p.member_index(name)));
        let by_active = self.current_proxy().and_then(Proxy::active_index);

        self.cursor = by_name.or(by_active).unwrap_or(0);
        self.adjust_viewport();
        self.remember_cursor();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
