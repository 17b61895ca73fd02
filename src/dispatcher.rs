use crate::appender::{ConsoleStream, ConsoleWriter, FileAppender, RemoteAppender, RemotePayload};
use crate::context::LogContext;
use crate::error::Result;
use crate::event::LogEvent;
use crate::formatter::FormattedMessage;
use crate::level::LogLevel;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;

/// 一次写入需要分发的内容
pub struct Dispatch<'a> {
    pub category: &'a str,
    pub level: LogLevel,
    /// 代入参数后的原始消息，用于事件和远端请求
    pub message: &'a str,
    pub formatted: &'a FormattedMessage,
    pub timestamp: DateTime<Utc>,
    /// 实例配置的文件，或者全局日志文件
    pub file_path: Option<&'a Path>,
    pub append: bool,
    /// 未启用远端输出或没有配置 URL 时为 None
    pub remote_url: Option<&'a str>,
}

/// 把格式化好的消息写到文件、控制台、远端，并发布事件
pub struct SinkDispatcher {
    context: Arc<LogContext>,
    console: Arc<dyn ConsoleWriter>,
    file: FileAppender,
    remote: RemoteAppender,
}

impl SinkDispatcher {
    pub fn new(context: Arc<LogContext>) -> Self {
        let console = context.console();
        Self {
            file: FileAppender::new(context.file_opener()),
            remote: RemoteAppender::new(context.transport(), Arc::clone(&console)),
            console,
            context,
        }
    }

    pub fn dispatch(&self, dispatch: &Dispatch<'_>) -> Result<()> {
        // 文件只写不带装饰的文本
        self.file
            .append(dispatch.file_path, dispatch.append, &dispatch.formatted.raw_text)?;

        self.console.write_line(
            ConsoleStream::for_level(dispatch.level),
            &dispatch.formatted.display_text,
            &dispatch.formatted.styles,
        )?;

        if let Some(url) = dispatch.remote_url {
            self.remote.send(
                url,
                RemotePayload::new(dispatch.level, dispatch.message, dispatch.timestamp),
            );
        }

        self.context.events().emit(&LogEvent {
            category: dispatch.category.to_string(),
            level: dispatch.level,
            message: dispatch.message.to_string(),
        });

        Ok(())
    }

    pub fn file_is_open(&self) -> bool {
        self.file.is_open()
    }
}
