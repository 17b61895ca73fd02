use crate::color::{Color, TargetKind};
use crate::context::LogContext;
use crate::dispatcher::{Dispatch, SinkDispatcher};
use crate::error::Result;
use crate::formatter::{sprintf, FormatArg, MessageFormatter};
use crate::level::{should_emit, LogLevel};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::path::PathBuf;
use std::sync::Arc;

/// Logger 配置
///
/// 未给出的字段使用默认值，可以用结构体更新语法或 JSON5 片段覆盖部分字段
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// 是否启用颜色输出
    #[default = true]
    pub use_colors: bool,

    /// 分类名使用的颜色
    #[default(Color::Default)]
    pub color: Color,

    /// 是否输出时间戳
    #[default = true]
    pub show_timestamp: bool,

    /// 是否输出级别
    #[default = true]
    pub show_level: bool,

    /// 日志文件，未设置时使用全局日志文件
    pub filename: Option<PathBuf>,

    /// 打开文件时追加，false 时截断
    #[default = true]
    pub append_on_open: bool,

    /// 是否发送到远端日志收集服务
    pub use_remote_sink: bool,

    /// 远端日志收集服务地址
    pub remote_url: Option<String>,

    /// 控制台输出目标
    pub target: TargetKind,
}

impl LoggerConfig {
    /// 从 JSON5 字符串创建配置，缺省字段使用默认值
    ///
    /// # 示例
    ///
    /// ```
    /// let config = catlog::LoggerConfig::from_json("{ show_timestamp: false }").unwrap();
    /// assert!(!config.show_timestamp);
    /// assert!(config.use_colors);
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    fn remote_endpoint(&self) -> Option<&str> {
        if self.use_remote_sink {
            self.remote_url.as_deref().filter(|url| !url.is_empty())
        } else {
            None
        }
    }
}

/// 按分类输出的日志器
///
/// 负责级别过滤，并把消息交给格式化器和分发器。文件句柄在第一次写入时打开，
/// 归该实例独占。
pub struct Logger {
    category: String,
    config: LoggerConfig,
    context: Arc<LogContext>,
    formatter: MessageFormatter,
    dispatcher: SinkDispatcher,
}

impl Logger {
    /// 使用全局上下文创建 Logger
    pub fn new(category: impl Into<String>, config: LoggerConfig) -> Self {
        Self::with_context(category, config, crate::global::global_context())
    }

    /// 使用指定上下文创建 Logger
    pub fn with_context(
        category: impl Into<String>,
        config: LoggerConfig,
        context: Arc<LogContext>,
    ) -> Self {
        Self {
            category: category.into(),
            formatter: MessageFormatter::new(config.target),
            dispatcher: SinkDispatcher::new(Arc::clone(&context)),
            config,
            context,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// 该级别当前是否会输出
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && should_emit(level, self.context.effective_level())
    }

    /// 记录日志，被过滤时没有任何副作用
    pub fn emit(&self, level: LogLevel, message: impl Into<String>) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.write(level, &message.into())
    }

    /// 按 printf 风格代入参数后记录日志，被过滤时不做代入
    pub fn emitf(&self, level: LogLevel, fmt: &str, args: &[FormatArg]) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.write(level, &sprintf(fmt, args))
    }

    /// 记录 DEBUG 级别日志
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Debug, message)
    }

    /// `debug` 的别名
    pub fn log(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Debug, message)
    }

    /// 记录 INFO 级别日志
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Info, message)
    }

    /// 记录 WARN 级别日志
    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Warn, message)
    }

    /// 记录 ERROR 级别日志
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.emit(LogLevel::Error, message)
    }

    fn write(&self, level: LogLevel, message: &str) -> Result<()> {
        let now = Utc::now();
        let formatted = self
            .formatter
            .format(&self.category, level, message, &self.config, now);

        // 全局日志文件在写入时读取，设置后对已有实例同样生效
        let file_path = match &self.config.filename {
            Some(path) => Some(path.clone()),
            None => self.context.logfile(),
        };

        self.dispatcher.dispatch(&Dispatch {
            category: &self.category,
            level,
            message,
            formatted: &formatted,
            timestamp: now,
            file_path: file_path.as_deref(),
            append: self.config.append_on_open,
            remote_url: self.config.remote_endpoint(),
        })
    }
}
