use ratatui::{text::Line, widgets::Paragraph, Frame};

use crate::model::App;

use super::components::helpbar;
use super::pages::{banner, proxies};
use super::ViewContext;

/// 渲染整个界面
pub fn render(app: &App, ctx: &ViewContext, frame: &mut Frame) {
    let lines = build_lines(app, ctx);
    frame.render_widget(Paragraph::new(lines), frame.area());
}

/// 生成界面的全部行，行数不超过终端高度
///
/// 优先级：加载中 > 错误 > 无组 > 组列表。
pub fn build_lines(app: &App, ctx: &ViewContext) -> Vec<Line<'static>> {
    let height = usize::from(app.terminal_height);

    let mut lines = if app.loading {
        banner::loading(ctx)
    } else if let Some(err) = &app.last_error {
        banner::error(err, ctx)
    } else if app.groups.is_empty() {
        banner::empty(ctx)
    } else {
        let (body, focus) = proxies::render(app, ctx);
        let mut lines = fit_window(body, focus, height.saturating_sub(1));
        lines.push(helpbar::help_line(app, ctx));
        lines
    };

    lines.truncate(height);
    lines
}

/// 内容超出预算时，保留包含 `focus` 行的连续窗口
fn fit_window(mut lines: Vec<Line<'static>>, focus: usize, budget: usize) -> Vec<Line<'static>> {
    if lines.len() <= budget {
        return lines;
    }

    let start = (focus + 1)
        .saturating_sub(budget)
        .min(lines.len() - budget);
    lines.drain(..start);
    lines.truncate(budget);
    lines
}
