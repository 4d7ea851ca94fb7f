//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//! 文本按出现的位置分类：状态横幅 `banner.*`、帮助行 `help.*`、测速标记 `delay.*`。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 加载/错误/空列表横幅
    pub banner: BannerTexts,
    /// 底部帮助行
    pub help: HelpTexts,
    /// 成员延迟标记
    pub delay: DelayTexts,
}

pub struct BannerTexts {
    pub loading: &'static str,
    pub error_title: &'static str,
    pub retry_hint: &'static str,
    pub no_groups: &'static str,
    pub refresh_hint: &'static str,
}

pub struct HelpTexts {
    /// 完整按键提示
    pub full: &'static str,
    /// 窄/矮终端下的精简提示
    pub compact: &'static str,
}

pub struct DelayTexts {
    pub testing: &'static str,
    pub failed: &'static str,
}
