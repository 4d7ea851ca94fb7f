//!
//! app.rs
//! 应用主循环
//!
//!
//! 启动时先用真实终端尺寸发出一次 Resize，再发起首次加载（此时 App.loading == true）。
//!
//! 主循环大约每 50 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, &ctx, f))    // 渲染 UI
//!     if app.should_quit { break }                        // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {                 // 轮询输入，在此最多等待 50ms
//!         let msg = handle_event(event);                      // 翻译为消息
//!         dispatch(msg)                                       // update + 执行返回的 Command
//!     }
//!     while let Ok(msg) = rx.try_recv() {                 // 取出后台任务送回的结果
//!         dispatch(msg)
//!     }
//! }
//!
//! 状态只在这个循环里被修改；后台任务从不直接接触 App。

use std::time::Duration;

use anyhow::Result;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CommandExecutor;
use crate::event;
use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::update;
use crate::util::{terminal_size, Term};
use crate::view::{self, ViewContext};

/// 输入轮询间隔，同时决定后台结果最迟多久被处理
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 退出时等待后台任务的上限
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    ctx: &ViewContext,
    executor: &CommandExecutor,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let (width, height) = terminal_size(terminal)?;
    dispatch(app, executor, AppMessage::Resize { width, height });
    executor.execute(Command::LoadProxies);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, ctx, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event);
            dispatch(app, executor, msg);
        }

        // 4. 处理后台结果
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, executor, msg);
        }
    }

    Ok(())
}

/// 更新状态并执行产生的副作用
fn dispatch(app: &mut App, executor: &CommandExecutor, msg: AppMessage) {
    let command = update::update(app, msg);
    executor.execute(command);
}

/// 收尾：无论终端是否恢复成功，都先在限定时间内关闭运行时，再返回恢复结果
pub fn shutdown(restored: Result<()>, runtime: Runtime, timeout: Duration) -> Result<()> {
    runtime.shutdown_timeout(timeout);
    log::info!("Exited");
    restored
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use anyhow::anyhow;

    use super::*;

    #[test]
    fn shutdown_is_bounded_even_when_restore_failed() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime");
        // 模拟卡住的阻塞请求
        runtime.spawn_blocking(|| std::thread::sleep(Duration::from_secs(10)));

        let started = Instant::now();
        let result = shutdown(Err(anyhow!("restore failed")), runtime, SHUTDOWN_TIMEOUT);

        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(result.is_err_and(|e| e.to_string() == "restore failed"));
    }
}
