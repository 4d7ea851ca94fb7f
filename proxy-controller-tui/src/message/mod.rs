//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event ─→ Update 之间的桥梁。
//! 键盘、终端尺寸变化与后台请求的结果都被翻译成 Message，
//! Update 层只认 Message，不关心它从哪里来。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 顶层消息 AppMessage
//!         mod navigation;     // 用户导航消息
//!         mod backend;        // 后台请求完成消息
//!         mod command;        // Update 返回给主循环的副作用描述
//!
//!
//! 消息流向：
//!
//!     按键 ──▶ AppMessage::Navigation(..) ──▶ update() ──▶ Command
//!                                                            │
//!                       ┌────────────────────────────────────┘
//!                       ▼
//!               CommandExecutor（tokio 任务）
//!                       │ 完成后
//!                       ▼
//!     AppMessage::Backend(..) ──▶ mpsc 通道 ──▶ 主循环 ──▶ update()
//!

mod app;
mod backend;
mod command;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use command::Command;
pub use navigation::NavigationMessage;
