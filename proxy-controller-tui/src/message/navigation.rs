/// 导航消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 光标上移
    CursorUp,
    /// 光标下移
    CursorDown,
    /// 上一组
    GroupPrev,
    /// 下一组
    GroupNext,
    /// 把光标所在成员设为当前组的活动成员
    Commit,
    /// 测试光标所在成员的延迟
    TestDelay,
}
