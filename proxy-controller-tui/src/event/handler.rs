//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::{matches_any, DefaultKeymap};
use crate::message::{AppMessage, NavigationMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(&key_event),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: &KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    let table: [(&[_], AppMessage); 8] = [
        (DefaultKeymap::QUIT, AppMessage::Quit),
        (DefaultKeymap::RELOAD, AppMessage::Reload),
        (DefaultKeymap::GROUP_PREV, nav(NavigationMessage::GroupPrev)),
        (DefaultKeymap::GROUP_NEXT, nav(NavigationMessage::GroupNext)),
        (DefaultKeymap::CURSOR_UP, nav(NavigationMessage::CursorUp)),
        (DefaultKeymap::CURSOR_DOWN, nav(NavigationMessage::CursorDown)),
        (DefaultKeymap::COMMIT, nav(NavigationMessage::Commit)),
        (DefaultKeymap::TEST_DELAY, nav(NavigationMessage::TestDelay)),
    ];

    table
        .into_iter()
        .find(|(bindings, _)| matches_any(bindings, key))
        .map_or(AppMessage::Noop, |(_, msg)| msg)
}

fn nav(msg: NavigationMessage) -> AppMessage {
    AppMessage::Navigation(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn is_nav(msg: AppMessage, expected: NavigationMessage) -> bool {
        matches!(msg, AppMessage::Navigation(m) if m == expected)
    }

    #[test]
    fn vim_keys_and_arrows_map_to_the_same_messages() {
        for (a, b, expected) in [
            (KeyCode::Char('h'), KeyCode::Left, NavigationMessage::GroupPrev),
            (KeyCode::Char('l'), KeyCode::Right, NavigationMessage::GroupNext),
            (KeyCode::Char('k'), KeyCode::Up, NavigationMessage::CursorUp),
            (KeyCode::Char('j'), KeyCode::Down, NavigationMessage::CursorDown),
        ] {
            assert!(is_nav(handle_event(press(a)), expected));
            assert!(is_nav(handle_event(press(b)), expected));
        }
    }

    #[test]
    fn action_keys() {
        assert!(is_nav(handle_event(press(KeyCode::Enter)), NavigationMessage::Commit));
        assert!(is_nav(
            handle_event(press(KeyCode::Char('t'))),
            NavigationMessage::TestDelay
        ));
        assert!(matches!(handle_event(press(KeyCode::Char('r'))), AppMessage::Reload));
        assert!(matches!(handle_event(press(KeyCode::Char('q'))), AppMessage::Quit));
    }

    #[test]
    fn ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(event), AppMessage::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event), AppMessage::Noop));
    }

    #[test]
    fn resize_carries_new_size() {
        assert!(matches!(
            handle_event(Event::Resize(100, 30)),
            AppMessage::Resize {
                width: 100,
                height: 30
            }
        ));
    }

    #[test]
    fn unbound_keys_are_noop() {
        assert!(matches!(handle_event(press(KeyCode::Char('x'))), AppMessage::Noop));
    }
}
