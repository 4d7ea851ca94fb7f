//! 加载中 / 错误 / 无组 时的状态横幅

use proxy_controller_client::ProxyError;
use ratatui::{
    style::{Modifier, Style},
    text::Line,
};

use crate::view::ViewContext;

const SEPARATOR: &str = "═══════════════════════════════════════";

fn separator(ctx: &ViewContext) -> Line<'static> {
    Line::styled(SEPARATOR, ctx.colors.muted_style())
}

fn header(text: &str, ctx: &ViewContext) -> Line<'static> {
    Line::styled(
        format!("  {text}"),
        Style::default()
            .fg(ctx.colors.group)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn loading(ctx: &ViewContext) -> Vec<Line<'static>> {
    vec![separator(ctx), header(ctx.texts.banner.loading, ctx)]
}

pub fn error(err: &ProxyError, ctx: &ViewContext) -> Vec<Line<'static>> {
    vec![
        separator(ctx),
        Line::styled(
            format!("  {}", ctx.texts.banner.error_title),
            ctx.colors.error_style(),
        ),
        Line::raw(format!("  {err}")),
        Line::styled(
            format!("  {}", ctx.texts.banner.retry_hint),
            ctx.colors.muted_style(),
        ),
    ]
}

pub fn empty(ctx: &ViewContext) -> Vec<Line<'static>> {
    vec![
        separator(ctx),
        header(ctx.texts.banner.no_groups, ctx),
        Line::styled(
            format!("  {}", ctx.texts.banner.refresh_hint),
            ctx.colors.muted_style(),
        ),
    ]
}
