use crate::error::{LogError, Result};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// 打开日志文件的能力
pub trait FileOpener: Send + Sync {
    /// 打开文件，`append` 为 false 时截断已有内容
    fn open(&self, path: &Path, append: bool) -> io::Result<Box<dyn Write + Send>>;
}

/// 基于 std::fs 的文件打开器
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileOpener;

impl FileOpener for StdFileOpener {
    fn open(&self, path: &Path, append: bool) -> io::Result<Box<dyn Write + Send>> {
        // 确保父目录存在
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).ok();
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        Ok(Box::new(options.open(path)?))
    }
}

enum FileState {
    Closed,
    Open(Box<dyn Write + Send>),
}

/// 文件输出器
///
/// 文件在第一次需要写入时打开，之后在实例生命周期内一直持有。
/// 打开失败只影响触发打开的那次写入，之后的写入按当时的路径重新尝试
pub struct FileAppender {
    opener: Arc<dyn FileOpener>,
    state: Mutex<FileState>,
}

impl FileAppender {
    pub fn new(opener: Arc<dyn FileOpener>) -> Self {
        Self {
            opener,
            state: Mutex::new(FileState::Closed),
        }
    }

    /// 是否已经持有文件句柄
    pub fn is_open(&self) -> bool {
        matches!(self.state.lock().as_deref(), Ok(FileState::Open(_)))
    }

    /// 写入一行
    ///
    /// `path` 为 None 且尚未打开时什么也不做
    pub fn append(&self, path: Option<&Path>, append: bool, line: &str) -> Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| LogError::Lock(e.to_string()))?;

        if let Some(path) = path.filter(|_| matches!(*state, FileState::Closed)) {
            let writer = self.opener.open(path, append).map_err(|e| {
                tracing::warn!(path = %path.display(), error = %e, "failed to open log file");
                LogError::SinkUnavailable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?;
            tracing::debug!(path = %path.display(), append, "log file opened");
            *state = FileState::Open(writer);
        }

        if let FileState::Open(writer) = &mut *state {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        Ok(())
    }
}
