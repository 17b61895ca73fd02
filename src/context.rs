use crate::appender::{ConsoleWriter, FileOpener, RemoteTransport, ReqwestTransport, StdConsole, StdFileOpener};
use crate::event::EventStream;
use crate::level::LogLevel;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// 覆盖日志级别的环境变量名
pub const DEFAULT_LEVEL_ENV: &str = "LOG";

/// 读取环境变量的能力
pub trait EnvSource: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// 进程环境变量
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// 日志上下文
///
/// 保存所有 Logger 共享的可变状态（全局级别、全局日志文件、事件流），
/// 以及控制台、文件、HTTP、环境变量这些外部能力。进程内默认有一个全局实例，
/// 测试中可以构造独立的上下文并注入桩实现。
pub struct LogContext {
    level: RwLock<LogLevel>,
    logfile: RwLock<Option<PathBuf>>,
    events: EventStream,
    level_env: String,
    env: Arc<dyn EnvSource>,
    console: Arc<dyn ConsoleWriter>,
    file_opener: Arc<dyn FileOpener>,
    transport: Arc<dyn RemoteTransport>,
}

impl Default for LogContext {
    fn default() -> Self {
        Self {
            level: RwLock::new(LogLevel::Debug),
            logfile: RwLock::new(None),
            events: EventStream::new(),
            level_env: DEFAULT_LEVEL_ENV.to_string(),
            env: Arc::new(ProcessEnv),
            console: Arc::new(StdConsole),
            file_opener: Arc::new(StdFileOpener),
            transport: Arc::new(ReqwestTransport::default()),
        }
    }
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, env: impl EnvSource + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// 修改覆盖级别使用的环境变量名
    pub fn with_level_env(mut self, name: impl Into<String>) -> Self {
        self.level_env = name.into();
        self
    }

    pub fn with_console(mut self, console: Arc<dyn ConsoleWriter>) -> Self {
        self.console = console;
        self
    }

    pub fn with_file_opener(mut self, opener: Arc<dyn FileOpener>) -> Self {
        self.file_opener = opener;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn RemoteTransport>) -> Self {
        self.transport = transport;
        self
    }

    /// 设置全局日志级别，对之后的所有调用生效
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// 设置全局日志文件，未单独配置文件的 Logger 会写入该文件
    pub fn set_logfile(&self, path: impl Into<PathBuf>) {
        *self.logfile.write().unwrap_or_else(PoisonError::into_inner) = Some(path.into());
    }

    pub fn clear_logfile(&self) {
        *self.logfile.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn logfile(&self) -> Option<PathBuf> {
        self.logfile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 过滤使用的级别
    ///
    /// 环境变量优先（不区分大小写，空值忽略），否则使用全局级别。
    /// 无法识别的环境变量值按 NONE 处理，即不输出。
    pub fn effective_level(&self) -> LogLevel {
        match self.env.var(&self.level_env) {
            Some(value) if !value.trim().is_empty() => value.parse().unwrap_or(LogLevel::None),
            _ => self.level(),
        }
    }

    pub fn events(&self) -> &EventStream {
        &self.events
    }

    pub fn console(&self) -> Arc<dyn ConsoleWriter> {
        Arc::clone(&self.console)
    }

    pub fn file_opener(&self) -> Arc<dyn FileOpener> {
        Arc::clone(&self.file_opener)
    }

    pub fn transport(&self) -> Arc<dyn RemoteTransport> {
        Arc::clone(&self.transport)
    }
}
