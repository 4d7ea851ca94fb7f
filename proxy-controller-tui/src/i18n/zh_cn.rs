//! 简体中文翻译 (zh-CN)

use super::keys::{BannerTexts, DelayTexts, HelpTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    banner: BannerTexts {
        loading: "正在加载代理...",
        error_title: "错误",
        retry_hint: "按 [r] 重试，[q] 退出",
        no_groups: "没有可切换的代理组",
        refresh_hint: "按 [r] 刷新，[q] 退出",
    },
    help: HelpTexts {
        full: " [←h]上一组 [→l]下一组  [↑k]上移 [↓j]下移  [Ent]选择  [t]测速  [r]刷新  [q]退出",
        compact: " h/l:切组 j/k:移动 enter:选择 r:刷新 q:退出",
    },
    delay: DelayTexts {
        testing: "测速中...",
        failed: "超时",
    },
};
