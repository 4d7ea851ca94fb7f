//! 延迟测试结果

/// 单个成员的测速状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayResult {
    /// 测速中
    Testing,
    /// 测速成功（毫秒）
    Measured(u32),
    /// 测速失败（超时或控制器报错）
    Failed,
}
