//! 英文翻译 (en-US)

use super::keys::{BannerTexts, DelayTexts, HelpTexts, Translations};

pub const TRANSLATIONS: Translations = Translations {
    banner: BannerTexts {
        loading: "Loading proxies...",
        error_title: "Error",
        retry_hint: "Press [r] retry, [q] quit",
        no_groups: "No proxy groups found",
        refresh_hint: "Press [r] refresh, [q] quit",
    },
    help: HelpTexts {
        full: " [←h]Prev [→l]Next  [↑k]Up [↓j]Down  [Ent]Select  [t]Test  [r]Reload  [q]Quit",
        compact: " h/l:group j/k:move enter:select r:reload q:quit",
    },
    delay: DelayTexts {
        testing: "testing...",
        failed: "timeout",
    },
};
