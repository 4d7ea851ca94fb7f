//! 配置服务
//!
//! 配置全部来自环境变量，没有配置文件与命令行参数。

use std::path::PathBuf;

use anyhow::{bail, Result};
use proxy_controller_client::{ClientConfig, DelayTest};

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 控制器地址
pub const ENV_URL: &str = "MIHOMO_URL";
/// 控制器密钥
pub const ENV_SECRET: &str = "MIHOMO_SECRET";
/// "1" 启用 Mock 模式
pub const ENV_MOCK: &str = "MOCK_CLASH";
/// dark / light
pub const ENV_THEME: &str = "PROXY_TUI_THEME";
/// en-US / zh-CN
pub const ENV_LANG: &str = "PROXY_TUI_LANG";
/// 日志文件路径，未设置时不记录日志
pub const ENV_LOG_FILE: &str = "PROXY_TUI_LOG";
/// 测速 URL
pub const ENV_DELAY_URL: &str = "PROXY_TUI_DELAY_URL";
/// 测速超时（毫秒）
pub const ENV_DELAY_TIMEOUT: &str = "PROXY_TUI_DELAY_TIMEOUT";

/// 应用配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub theme: Theme,
    pub language: Language,
    pub log_file: Option<PathBuf>,
    pub delay_test: DelayTest,
    /// 加载时被忽略的无效取值，日志初始化后再输出
    pub notices: Vec<String>,
}

impl AppConfig {
    /// 从任意键值来源构建配置（测试时可传入闭包）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut notices = Vec::new();

        let base_url = get(ENV_URL).unwrap_or_default();
        let trimmed = base_url.trim();
        if !trimmed.is_empty() && !trimmed.starts_with("http://") && !trimmed.starts_with("https://")
        {
            bail!("{ENV_URL} must start with http:// or https://, got {trimmed:?}");
        }

        let mock = get(ENV_MOCK).is_some_and(|value| matches!(value.trim(), "1" | "true"));
        let client = ClientConfig::new(base_url)
            .with_secret(get(ENV_SECRET))
            .with_mock(mock);

        let theme = match get(ENV_THEME) {
            Some(name) => Theme::from_name(&name).unwrap_or_else(|| {
                notices.push(format!("Unknown {ENV_THEME} {name:?}, using dark"));
                Theme::default()
            }),
            None => Theme::default(),
        };

        let language = match get(ENV_LANG) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|| {
                notices.push(format!("Unknown {ENV_LANG} {code:?}, using en-US"));
                Language::default()
            }),
            None => Language::default(),
        };

        let timeout_ms = get(ENV_DELAY_TIMEOUT).and_then(|raw| match raw.trim().parse::<u32>() {
            Ok(ms) if ms > 0 => Some(ms),
            _ => {
                notices.push(format!(
                    "Invalid {ENV_DELAY_TIMEOUT} {raw:?}, using {} ms",
                    DelayTest::DEFAULT_TIMEOUT_MS
                ));
                None
            }
        });
        let delay_test = DelayTest::new(get(ENV_DELAY_URL).as_deref(), timeout_ms);

        Ok(Self {
            client,
            theme,
            language,
            log_file: get(ENV_LOG_FILE).map(PathBuf::from),
            delay_test,
            notices,
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 从进程环境变量读取配置
pub struct EnvConfigService;

impl ConfigService for EnvConfigService {
    fn load(&self) -> Result<AppConfig> {
        AppConfig::from_lookup(|key| std::env::var(key).ok())
    }
}
