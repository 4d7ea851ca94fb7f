//! Proxy Controller TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     EnvConfigService.load()     // 读取环境变量配置
//!     init_logging()              // 设置了 PROXY_TUI_LOG 才写日志文件
//!     tokio 运行时 + ProxyClient  // 后台请求都在运行时上执行
//!     init_terminal()             // 初始化终端；失败时以非零状态退出
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!     runtime.shutdown_timeout()  // 放弃仍未完成的请求
//!
//! }

use std::sync::Arc;

use anyhow::{Context, Result};
use proxy_controller_client::ProxyClient;
use tokio::sync::mpsc;

use proxy_controller_tui::app;
use proxy_controller_tui::backend::{CommandExecutor, ConfigService, EnvConfigService};
use proxy_controller_tui::model::App;
use proxy_controller_tui::util::{init_logging, init_terminal, restore_terminal};
use proxy_controller_tui::view::ViewContext;

fn main() -> Result<(), anyhow::Error> {
    // 1. 配置与日志
    let config = EnvConfigService.load()?;
    let _log_guard = init_logging(config.log_file.as_deref())?;
    for notice in &config.notices {
        log::warn!("{notice}");
    }
    // 2. 异步运行时与控制器客户端
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let client = ProxyClient::new(config.client.clone())?;
    log::info!(
        "Starting with controller {} (mock: {}, auth: {}, language: {})",
        client.config().base_url,
        client.is_mock(),
        client.config().secret.is_some(),
        config.language.code()
    );
    let (tx, mut rx) = mpsc::unbounded_channel();
    let executor = CommandExecutor::new(
        Arc::new(client),
        runtime.handle().clone(),
        tx,
        config.delay_test.clone(),
    );
    let ctx = ViewContext::new(config.theme, config.language);

    // 3. 初始化终端
    let mut terminal = init_terminal().context("terminal not available")?;

    // 4. 运行主循环
    let mut app = App::new();
    let result = app::run(&mut terminal, &mut app, &ctx, &executor, &mut rx);

    // 5. 恢复终端（无论成功失败都执行），再放弃未完成的请求
    let restored = restore_terminal(&mut terminal);
    app::shutdown(restored, runtime, app::SHUTDOWN_TIMEOUT)?;

    // 6. 返回结果
    result
}
