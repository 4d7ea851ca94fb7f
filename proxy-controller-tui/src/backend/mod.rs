//!
//! src/backend/mod.rs
//! Backend 层：配置与控制器访问
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 环境变量配置
//!         mod executor;           // Command -> tokio 任务 -> AppMessage
//!
//!
//!     执行器持有 Arc<dyn ProxyApi>：
//!         · 正常运行时是 ProxyClient（HTTP 或 Mock 模式）
//!         · 测试时可以换成任意实现了 ProxyApi 的假对象
//!

mod config_service;
mod executor;

pub use config_service::{
    AppConfig, ConfigService, EnvConfigService, ENV_DELAY_TIMEOUT, ENV_DELAY_URL, ENV_LANG,
    ENV_LOG_FILE, ENV_MOCK, ENV_SECRET, ENV_THEME, ENV_URL,
};
pub use executor::{load_proxies, measure_delay, select_proxy, CommandExecutor};
