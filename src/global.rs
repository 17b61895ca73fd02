//! 全局日志上下文单例
//!
//! 提供便捷的全局函数，无需手动创建和传递 `LogContext`

use crate::context::LogContext;
use crate::event::EventStream;
use crate::level::LogLevel;
use crate::logger::{Logger, LoggerConfig};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::Arc;

/// 全局 LogContext 单例，生命周期与进程相同
static GLOBAL_CONTEXT: Lazy<Arc<LogContext>> = Lazy::new(|| Arc::new(LogContext::default()));

/// 获取全局上下文
pub fn global_context() -> Arc<LogContext> {
    Arc::clone(&GLOBAL_CONTEXT)
}

/// 创建使用全局上下文的 Logger
///
/// # 示例
///
/// ```no_run
/// use catlog::{Color, LoggerConfig};
///
/// let logger = catlog::create("daemon", LoggerConfig {
///     color: Color::Magenta,
///     show_timestamp: false,
///     ..Default::default()
/// });
/// logger.info("started").unwrap();
/// ```
pub fn create(category: impl Into<String>, config: LoggerConfig) -> Logger {
    Logger::new(category, config)
}

/// 设置全局日志级别
pub fn set_log_level(level: LogLevel) {
    GLOBAL_CONTEXT.set_level(level);
}

/// 获取全局日志级别（不含环境变量覆盖）
pub fn log_level() -> LogLevel {
    GLOBAL_CONTEXT.level()
}

/// 设置全局日志文件
pub fn set_logfile(path: impl Into<PathBuf>) {
    GLOBAL_CONTEXT.set_logfile(path);
}

/// 取消全局日志文件，已经打开文件的 Logger 不受影响
pub fn clear_logfile() {
    GLOBAL_CONTEXT.clear_logfile();
}

/// 全局事件流
///
/// # 示例
///
/// ```no_run
/// catlog::events().on(|event| {
///     eprintln!("{} [{}] {}", event.category, event.level, event.message);
/// });
/// ```
pub fn events() -> &'static EventStream {
    GLOBAL_CONTEXT.events()
}
