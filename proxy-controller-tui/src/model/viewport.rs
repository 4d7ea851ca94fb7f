//! 视口计算
//!
//! 成员列表可见行数由终端高度决定：
//!     visible_rows = max(1, 终端高度 - 组数 - FOOTER_ROWS)

/// 底部保留行数：分隔空行 + 帮助行
pub const FOOTER_ROWS: usize = 2;

/// 当前组成员列表可见的行数（至少 1 行）
pub fn visible_rows(terminal_height: u16, group_count: usize) -> usize {
    usize::from(terminal_height)
        .saturating_sub(group_count)
        .saturating_sub(FOOTER_ROWS)
        .max(1)
}

/// 调整视口偏移，使光标始终可见
///
/// 结果满足 `offset <= cursor <= offset + visible - 1`
/// 且 `offset <= max(0, len - visible)`（`cursor < len` 时）。
pub fn adjust(offset: usize, cursor: usize, len: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    let mut offset = offset;

    if cursor < offset {
        offset = cursor;
    } else if cursor >= offset + visible {
        offset = cursor + 1 - visible;
    }

    offset.min(len.saturating_sub(visible))
}
