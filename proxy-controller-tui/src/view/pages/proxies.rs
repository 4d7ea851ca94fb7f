//! 代理组列表页
//!
//! 每个组一行，当前组下展开视口内的成员，随后用空行把其余组推向底部。

use proxy_controller_client::Proxy;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, DelayResult};
use crate::view::ViewContext;

/// 生成组列表（不含帮助行），同时返回焦点行（光标行，无成员时为当前组行）的下标
pub fn render(app: &App, ctx: &ViewContext) -> (Vec<Line<'static>>, usize) {
    let height = usize::from(app.terminal_height);
    let members = app.current_members();
    let active = app.current_proxy().map(|proxy| proxy.now.as_str());
    let scrollable = app.is_scrollable();

    let start = app.viewport_offset.min(members.len());
    let end = (start + app.visible_rows()).min(members.len());
    let padding = height.saturating_sub(app.groups.len() + (end - start) + 1);

    let name_width = app
        .groups
        .iter()
        .map(|group| group.width())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(height);
    let mut focus = 0;

    for (index, group) in app.groups.iter().enumerate() {
        let is_current = index == app.current_group;
        if is_current {
            focus = lines.len();
        }
        lines.push(group_line(group, name_width, is_current, ctx));

        if !is_current {
            continue;
        }

        for (row, member) in members[start..end].iter().enumerate() {
            let position = start + row;
            let row = MemberRow {
                name: member,
                position,
                total: members.len(),
                is_cursor: position == app.cursor,
                is_active: active == Some(member.as_str()),
                show_position: scrollable,
            };
            if row.is_cursor {
                focus = lines.len();
            }
            lines.push(member_line(&row, app, ctx));
        }

        lines.extend(std::iter::repeat(Line::default()).take(padding));
    }

    (lines, focus)
}

/// 组名两侧各留 3 个空格，并补齐到统一显示宽度
fn group_line(group: &str, name_width: usize, is_current: bool, ctx: &ViewContext) -> Line<'static> {
    let fill = " ".repeat(name_width.saturating_sub(group.width()));
    Line::styled(
        format!("   {group}{fill}   "),
        ctx.colors.group_style(is_current),
    )
}

struct MemberRow<'a> {
    name: &'a str,
    position: usize,
    total: usize,
    is_cursor: bool,
    is_active: bool,
    show_position: bool,
}

fn member_line(row: &MemberRow<'_>, app: &App, ctx: &ViewContext) -> Line<'static> {
    let colors = &ctx.colors;
    let name = row.name.to_string();

    // 标记：光标+活动 ">> "，仅光标 ">  "，仅活动 " > "
    let mut spans = match (row.is_cursor, row.is_active) {
        (true, true) => vec![
            Span::styled(">> ", colors.cursor_style()),
            Span::styled(name, colors.active_style().add_modifier(Modifier::BOLD)),
        ],
        (true, false) => vec![
            Span::styled(">  ", colors.cursor_style()),
            Span::styled(name, colors.member_style(true)),
        ],
        (false, true) => vec![
            Span::raw(" "),
            Span::styled(">", colors.active_style()),
            Span::raw(" "),
            Span::styled(name, colors.active_style()),
        ],
        (false, false) => vec![
            Span::raw("   "),
            Span::styled(name, colors.member_style(false)),
        ],
    };

    if row.is_cursor && row.show_position {
        spans.push(Span::styled(
            format!(" ({}/{})", row.position + 1, row.total),
            colors.muted_style(),
        ));
    }

    if let Some(delay) = delay_span(row.name, app, ctx) {
        spans.push(delay);
    }

    Line::from(spans)
}

/// 延迟后缀：优先本次会话的测速结果，其次控制器记录的最近一次延迟
fn delay_span(member: &str, app: &App, ctx: &ViewContext) -> Option<Span<'static>> {
    let colors = &ctx.colors;
    match app.delays.get(member) {
        Some(DelayResult::Testing) => Some(Span::styled(
            format!("  {}", ctx.texts.delay.testing),
            colors.muted_style(),
        )),
        Some(DelayResult::Measured(ms)) => Some(latency(*ms, ctx)),
        Some(DelayResult::Failed) => Some(Span::styled(
            format!("  {}", ctx.texts.delay.failed),
            colors.error_style(),
        )),
        None => app
            .proxies
            .get(member)
            .and_then(Proxy::last_delay)
            .map(|ms| latency(ms, ctx)),
    }
}

fn latency(ms: u32, ctx: &ViewContext) -> Span<'static> {
    Span::styled(format!("  {ms}ms"), ctx.colors.delay_style(ms))
}
