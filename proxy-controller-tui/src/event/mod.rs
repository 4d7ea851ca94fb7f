//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 负责从终端读取原始事件（crossterm::event::Event），
//! 再翻译成 Message 交给 Update 层。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 轮询与翻译
//!         pub mod keymap;     // 快捷键表
//!
//!
//!     按键表：
//!
//!         ← / h       上一组              → / l       下一组
//!         ↑ / k       上移                ↓ / j       下移
//!         Enter       设为活动成员        t           测速
//!         r           刷新                q / Ctrl+C  退出
//!
//!     只处理 Press 事件；终端尺寸变化翻译为 AppMessage::Resize。
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
