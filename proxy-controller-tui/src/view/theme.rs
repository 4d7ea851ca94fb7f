//! 主题配色
//!
//! 配色是常量表，通过 `ViewContext` 显式传入渲染函数。

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 从名称解析（"dark" / "light"）
    pub fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors::dark(),
            Theme::Light => ThemeColors::light(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// 普通文本
    pub fg: Color,
    /// 组名
    pub group: Color,
    /// 当前组背景
    pub selected_bg: Color,
    /// 当前组文字
    pub selected_fg: Color,
    /// 光标标记
    pub cursor: Color,
    /// 活动成员标记
    pub active: Color,
    /// 延迟良好
    pub success: Color,
    /// 延迟偏高
    pub warning: Color,
    /// 错误与超时
    pub error: Color,
    /// 帮助、分隔线等次要信息
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题（256 色）
    pub fn dark() -> Self {
        Self {
            fg: Color::Indexed(252),
            group: Color::Indexed(147),
            selected_bg: Color::Indexed(57),
            selected_fg: Color::Indexed(231),
            cursor: Color::Indexed(45),
            active: Color::Indexed(86),
            success: Color::Indexed(86),
            warning: Color::Indexed(214),
            error: Color::Indexed(203),
            muted: Color::Indexed(244),
        }
    }

    /// 浅色主题（256 色）
    pub fn light() -> Self {
        Self {
            fg: Color::Indexed(236),
            group: Color::Indexed(61),
            selected_bg: Color::Indexed(153),
            selected_fg: Color::Indexed(16),
            cursor: Color::Indexed(25),
            active: Color::Indexed(28),
            success: Color::Indexed(28),
            warning: Color::Indexed(130),
            error: Color::Indexed(160),
            muted: Color::Indexed(242),
        }
    }

    pub fn group_style(&self, current: bool) -> Style {
        if current {
            Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.group)
        }
    }

    pub fn member_style(&self, under_cursor: bool) -> Style {
        let style = Style::default().fg(self.fg);
        if under_cursor {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn cursor_style(&self) -> Style {
        Style::default().fg(self.cursor).add_modifier(Modifier::BOLD)
    }

    pub fn active_style(&self) -> Style {
        Style::default().fg(self.active)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// 按延迟高低着色
    pub fn delay_style(&self, ms: u32) -> Style {
        let color = match ms {
            0..=299 => self.success,
            300..=799 => self.warning,
            _ => self.error,
        };
        Style::default().fg(color)
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Theme::default().colors()
    }
}
