//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod delay;          // 测速结果
//!         pub mod viewport;   // 视口计算
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     App {
//!         should_quit,            // 是否退出
//!         groups,                 // 可切换的组名：Selector 在前，URLTest 在后，各自按名称排序
//!         proxies,                // 控制器返回的完整代理表
//!         current_group,          // 当前组下标
//!         cursor,                 // 当前组内光标
//!         viewport_offset,        // 成员列表第一可见行
//!         last_cursor_member,     // 光标所在成员名（刷新后按名字恢复）
//!         loading,                // 加载中
//!         last_error,             // 最近一次错误
//!         terminal_width,
//!         terminal_height,
//!         delays,                 // 测速结果
//!     }
//!
//!     不变量（groups 非空时）：
//!         · current_group < groups.len()
//!         · 成员非空时 cursor < 成员数；为空时 cursor == 0
//!         · viewport_offset <= cursor < viewport_offset + visible_rows
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、视口（viewport.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每个组名占一行，底部再留 2 行（空行 + 帮助行），其余行给当前组的成员：
//!
//!         visible_rows = max(1, terminal_height - groups.len() - 2)
//!
//!     光标移出视口时滚动，随后把偏移夹到 [0, max(0, 成员数 - visible_rows)]。
//!

mod app;
mod delay;
pub mod viewport;

pub use app::{App, DEFAULT_TERMINAL_HEIGHT, DEFAULT_TERMINAL_WIDTH};
pub use delay::DelayResult;
