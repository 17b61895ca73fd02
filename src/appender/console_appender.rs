use crate::level::LogLevel;
use std::io::{self, Write};

/// 控制台输出流
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

impl ConsoleStream {
    /// ERROR 级别输出到标准错误，其他级别输出到标准输出
    pub fn for_level(level: LogLevel) -> Self {
        if level == LogLevel::Error {
            ConsoleStream::Stderr
        } else {
            ConsoleStream::Stdout
        }
    }
}

/// 控制台写入能力
///
/// `styles` 与文本中的 `%c` 占位符一一对应，终端目标下为空
pub trait ConsoleWriter: Send + Sync {
    fn write_line(&self, stream: ConsoleStream, text: &str, styles: &[String]) -> io::Result<()>;
}

/// 标准输出/标准错误
///
/// 样式参数需要支持 `%c` 的控制台才能渲染，这里只输出文本
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl ConsoleWriter for StdConsole {
    fn write_line(&self, stream: ConsoleStream, text: &str, _styles: &[String]) -> io::Result<()> {
        match stream {
            ConsoleStream::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{}", text)?;
                stdout.flush()
            }
            ConsoleStream::Stderr => {
                let mut stderr = io::stderr().lock();
                writeln!(stderr, "{}", text)?;
                stderr.flush()
            }
        }
    }
}
