//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 入口：render() / build_lines()
//!         mod pages;          // 组列表页、状态横幅
//!         mod components;     // 帮助行
//!         pub mod theme;      // 配色
//!
//!
//!     渲染分两步：
//!
//!         build_lines(&App, &ViewContext) -> Vec<Line>
//!             纯函数，给定状态与上下文，输出完全确定，行数不超过终端高度；
//!
//!         render(&App, &ViewContext, &mut Frame)
//!             把 build_lines 的结果作为 Paragraph 画到整个终端区域。
//!
//!     正常布局（高 24，两组，当前组 Proxy）：
//!
//!         ┌──────────────────────────────────────────────┐
//!         │   Proxy                                      │ ◀ 当前组（高亮）
//!         │>> Proxy-1                                    │ ◀ 光标 + 活动成员
//!         │   Proxy-2                                    │
//!         │   Proxy-3                                    │
//!         │                                              │ ◀ 空行把其余组推到底部
//!         │   ...                                        │
//!         │   Auto                                       │
//!         │ [←h]Prev [→l]Next  ...  [r]Reload  [q]Quit   │ ◀ 帮助行始终在最后
//!         └──────────────────────────────────────────────┘
//!
//!     配色 (ThemeColors) 与文本 (Translations) 通过 ViewContext 显式传入。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use crate::i18n::{self, Language, Translations};

pub use layout::{build_lines, render};
pub use theme::{Theme, ThemeColors};

/// 渲染上下文：配色与文本
#[derive(Clone, Copy)]
pub struct ViewContext {
    pub colors: ThemeColors,
    pub texts: &'static Translations,
}

impl ViewContext {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            colors: theme.colors(),
            texts: i18n::translations(language),
        }
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new(Theme::default(), Language::default())
    }
}
