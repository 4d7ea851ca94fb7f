//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     mod terminal;       // 终端初始化和恢复
//!     mod logging;        // 文件日志
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲与回显，每个按键立即生效
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复原有内容
//!
//!     无论程序是正常退出还是发生错误，都必须调用 restore_terminal()；
//!     panic 时由 init_terminal() 安装的钩子负责恢复。
//!
//!     终端被 TUI 占用期间不能向 stdout/stderr 写任何东西，
//!     因此日志只写文件（见 logging.rs）。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, terminal_size, Term};
