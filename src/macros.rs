//! 日志宏模块
//!
//! 提供 printf 风格的日志宏，级别被过滤时不做参数代入
//!
//! # 示例
//!
//! ```ignore
//! use catlog::{create, LoggerConfig};
//!
//! let logger = create("daemon", LoggerConfig::default());
//!
//! catlog::info!(logger, "application started")?;
//! catlog::error!(logger, "boom %d", 5)?;
//! catlog::warn!(logger, "user %s retried %d times", "alice", 3)?;
//! ```

/// 记录 DEBUG 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.emitf(
            $crate::LogLevel::Debug,
            $fmt,
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}

/// `debug!` 的别名
#[macro_export]
macro_rules! log {
    ($logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::debug!($logger, $fmt $(, $arg)*)
    };
}

/// 记录 INFO 级别日志
#[macro_export]
macro_rules! info {
    ($logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.emitf(
            $crate::LogLevel::Info,
            $fmt,
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}

/// 记录 WARN 级别日志
#[macro_export]
macro_rules! warn {
    ($logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.emitf(
            $crate::LogLevel::Warn,
            $fmt,
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}

/// 记录 ERROR 级别日志
#[macro_export]
macro_rules! error {
    ($logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.emitf(
            $crate::LogLevel::Error,
            $fmt,
            &[$($crate::FormatArg::from($arg)),*],
        )
    };
}
