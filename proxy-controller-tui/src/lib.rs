//! Proxy Controller TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与控制器访问 (`backend/`)
//!
//! Update 与 View 都不做 I/O，可以脱离终端和网络直接测试。

pub mod app;
pub mod backend;
pub mod event;
pub mod i18n;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;
