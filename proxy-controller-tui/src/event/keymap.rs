//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 任一绑定匹配即可
pub fn matches_any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|binding| binding.matches(key))
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Char('q')),
        KeyBinding::ctrl(KeyCode::Char('c')),
    ];
    pub const RELOAD: &'static [KeyBinding] = &[KeyBinding::key(KeyCode::Char('r'))];

    // 组切换
    pub const GROUP_PREV: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Left),
        KeyBinding::key(KeyCode::Char('h')),
    ];
    pub const GROUP_NEXT: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Right),
        KeyBinding::key(KeyCode::Char('l')),
    ];

    // 成员导航
    pub const CURSOR_UP: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const CURSOR_DOWN: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];

    // 操作
    pub const COMMIT: &'static [KeyBinding] = &[KeyBinding::key(KeyCode::Enter)];
    pub const TEST_DELAY: &'static [KeyBinding] = &[KeyBinding::key(KeyCode::Char('t'))];
}
