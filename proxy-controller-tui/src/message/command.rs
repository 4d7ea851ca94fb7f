use std::time::Duration;

/// Update 产生的副作用，由主循环交给执行器
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 无副作用
    None,
    /// 拉取代理列表
    LoadProxies,
    /// 等待一段时间后再拉取（等控制器状态落定）
    LoadProxiesAfter(Duration),
    /// 设置活动成员
    SelectProxy { group: String, member: String },
    /// 测试成员延迟
    MeasureDelay { group: String, member: String },
}

impl Command {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
