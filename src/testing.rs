//! 单元测试用的桩实现

use crate::appender::{ConsoleStream, ConsoleWriter, FileOpener, RemotePayload, RemoteTransport};
use crossbeam::channel::{unbounded, Receiver, Sender};
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// 轮询直到条件成立，最多等待 5 秒
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    condition()
}

/// 记录所有输出的控制台
#[derive(Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<(ConsoleStream, String, Vec<String>)>>,
}

impl MemoryConsole {
    pub fn lines(&self) -> Vec<(ConsoleStream, String, Vec<String>)> {
        self.lines.lock().unwrap().clone()
    }
}

impl ConsoleWriter for MemoryConsole {
    fn write_line(&self, stream: ConsoleStream, text: &str, styles: &[String]) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap()
            .push((stream, text.to_string(), styles.to_vec()));
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// 统计打开次数的内存文件系统
#[derive(Default)]
pub struct CountingOpener {
    opens: AtomicUsize,
    files: Mutex<HashMap<PathBuf, SharedBuffer>>,
    denied: Mutex<HashSet<PathBuf>>,
}

impl CountingOpener {
    /// 之后打开该路径都返回 PermissionDenied
    pub fn deny(&self, path: &Path) {
        self.denied.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn contents(&self, path: &Path) -> String {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|buf| String::from_utf8_lossy(&buf.0.lock().unwrap()).into_owned())
            .unwrap_or_default()
    }
}

impl FileOpener for CountingOpener {
    fn open(&self, path: &Path, append: bool) -> io::Result<Box<dyn Write + Send>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        if self.denied.lock().unwrap().contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        let mut files = self.files.lock().unwrap();
        let buffer = files.entry(path.to_path_buf()).or_default().clone();
        if !append {
            buffer.0.lock().unwrap().clear();
        }
        Ok(Box::new(buffer))
    }
}

/// 把请求转发到 channel 的传输桩
pub struct StubTransport {
    outcome: Result<u16, String>,
    sent: Sender<(String, RemotePayload)>,
}

impl StubTransport {
    pub fn with_status(status: u16) -> (Self, Receiver<(String, RemotePayload)>) {
        let (sent, received) = unbounded();
        (
            Self {
                outcome: Ok(status),
                sent,
            },
            received,
        )
    }

    pub fn failing() -> Self {
        let (sent, _) = unbounded();
        Self {
            outcome: Err("connection refused".to_string()),
            sent,
        }
    }
}

#[async_trait::async_trait]
impl RemoteTransport for StubTransport {
    async fn post_json(&self, url: &str, payload: &RemotePayload) -> anyhow::Result<u16> {
        let _ = self.sent.send((url.to_string(), payload.clone()));
        self.outcome.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

/// 不读取任何环境变量，避免测试受 LOG 影响
pub fn no_env(_: &str) -> Option<String> {
    None
}
