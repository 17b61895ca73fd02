//! catlog - 按分类输出的轻量日志库
//!
//! 每个 Logger 有自己的分类名和输出配置，级别、全局日志文件和事件流在进程内共享。
//!
//! ## 模块
//!
//! - **level**: 日志级别及其排序
//! - **color**: 逻辑颜色到 ANSI 编号 / CSS 颜色名的映射
//! - **formatter**: 消息格式化（时间戳、级别、分类、颜色装饰）与 printf 风格代入
//! - **appender**: 控制台、文件、远端三种输出
//! - **dispatcher**: 把一条消息分发到各个输出并发布事件
//! - **context**: 全局级别、全局日志文件、事件流以及外部能力的注入点
//! - **logger**: 按分类输出的日志器
//!
//! ## 快速开始
//!
//! ```no_run
//! use catlog::{Color, LogLevel, LoggerConfig};
//!
//! fn main() -> catlog::Result<()> {
//!     catlog::set_log_level(LogLevel::Info);
//!
//!     let logger = catlog::create("daemon", LoggerConfig {
//!         color: Color::Cyan,
//!         filename: Some("debug.log".into()),
//!         ..Default::default()
//!     });
//!
//!     logger.info("application started")?;
//!     catlog::error!(logger, "connection failed after %d retries", 3)?;
//!     Ok(())
//! }
//! ```
//!
//! 环境变量 `LOG`（不区分大小写）会覆盖全局级别，但不会修改全局状态。

pub mod appender;
pub mod color;
pub mod context;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod formatter;
pub mod global;
pub mod level;
pub mod logger;
mod macros;

#[cfg(test)]
mod testing;

// 重新导出主要的公共 API
pub use appender::{
    ConsoleStream, ConsoleWriter, FileOpener, RemotePayload, RemoteTransport, ReqwestTransport,
    StdConsole, StdFileOpener,
};
pub use color::{Color, ConcreteColor, TargetKind};
pub use context::{EnvSource, LogContext, ProcessEnv, DEFAULT_LEVEL_ENV};
pub use error::{LogError, Result};
pub use event::{EventStream, ListenerId, LogEvent};
pub use formatter::{sprintf, FormatArg, FormattedMessage, MessageFormatter};
pub use global::{
    clear_logfile, create, events, global_context, log_level, set_log_level, set_logfile,
};
pub use level::{should_emit, LogLevel};
pub use logger::{Logger, LoggerConfig};
