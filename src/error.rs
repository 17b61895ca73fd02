use std::path::PathBuf;
use thiserror::Error;

/// 日志统一错误类型
#[derive(Error, Debug)]
pub enum LogError {
    /// 日志文件无法打开，该实例的文件输出不可用
    #[error("log file sink unavailable: {}: {}", .path.display(), .reason)]
    SinkUnavailable { path: PathBuf, reason: String },

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("invalid logger config: {0}")]
    Config(#[from] json5::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

pub type Result<T> = std::result::Result<T, LogError>;
