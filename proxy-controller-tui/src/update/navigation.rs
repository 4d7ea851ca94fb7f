//! 导航消息处理

use crate::message::{Command, NavigationMessage};
use crate::model::{App, DelayResult};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Command {
    // 加载中或错误横幅遮住列表时忽略所有导航，只能 r 重试或 q 退出
    if app.loading || app.last_error.is_some() {
        return Command::None;
    }

    match msg {
        NavigationMessage::CursorUp => {
            if app.cursor > 0 {
                app.cursor -= 1;
                app.adjust_viewport();
                app.remember_cursor();
            }
            Command::None
        }

        NavigationMessage::CursorDown => {
            if app.cursor + 1 < app.current_members().len() {
                app.cursor += 1;
                app.adjust_viewport();
                app.remember_cursor();
            }
            Command::None
        }

        NavigationMessage::GroupPrev => {
            if app.current_group > 0 {
                app.current_group -= 1;
                app.snap_cursor_to_active();
            }
            Command::None
        }

        NavigationMessage::GroupNext => {
            if app.current_group + 1 < app.groups.len() {
                app.current_group += 1;
                app.snap_cursor_to_active();
            }
            Command::None
        }

        NavigationMessage::Commit => match cursor_target(app) {
            Some((group, member)) => {
                log::info!("Selecting {member} in group {group}");
                Command::SelectProxy { group, member }
            }
            None => Command::None,
        },

        NavigationMessage::TestDelay => match cursor_target(app) {
            Some((group, member)) => {
                app.delays.insert(member.clone(), DelayResult::Testing);
                Command::MeasureDelay { group, member }
            }
            None => Command::None,
        },
    }
}

/// 当前组名与光标所在成员名
fn cursor_target(app: &App) -> Option<(String, String)> {
    let group = app.current_group_name()?;
    let member = app.cursor_member()?;
    Some((group.to_string(), member.to_string()))
}
