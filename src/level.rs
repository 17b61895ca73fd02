use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 日志级别
///
/// 按严重程度递增排列，`None` 是哨兵值，作为阈值时屏蔽所有真实级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// 调试信息
    Debug,
    /// 一般信息
    Info,
    /// 警告信息
    Warn,
    /// 错误信息
    Error,
    /// 不输出任何日志
    None,
}

impl LogLevel {
    /// 所有级别，按 rank 排列
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::None,
    ];

    /// 级别在固定序列中的位置
    pub fn rank(self) -> usize {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
            LogLevel::None => 4,
        }
    }

    /// 级别名称，同时也是级别的字符串常量
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::None => "NONE",
        }
    }
}

/// 判断 `candidate` 级别在阈值 `threshold` 下是否应该输出
pub fn should_emit(candidate: LogLevel, threshold: LogLevel) -> bool {
    candidate.rank() >= threshold.rank()
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "NONE" => Ok(LogLevel::None),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
