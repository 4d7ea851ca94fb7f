//! 底部帮助行

use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::ViewContext;

/// 低于此高度时使用精简帮助
pub const FULL_HELP_MIN_HEIGHT: u16 = 10;

/// 根据终端尺寸选择帮助文本
pub fn help_text(app: &App, ctx: &ViewContext) -> &'static str {
    let help = &ctx.texts.help;
    let too_narrow = usize::from(app.terminal_width) < help.full.width();
    if too_narrow || app.terminal_height < FULL_HELP_MIN_HEIGHT {
        help.compact
    } else {
        help.full
    }
}

pub fn help_line(app: &App, ctx: &ViewContext) -> Line<'static> {
    Line::styled(help_text(app, ctx), ctx.colors.muted_style())
}
