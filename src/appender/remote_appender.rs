use crate::appender::console_appender::{ConsoleStream, ConsoleWriter};
use crate::level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// 远端日志收集服务的请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePayload {
    /// 自 Unix 纪元以来的秒数（带毫秒小数）
    pub timestamp: f64,
    pub short_message: String,
    pub long_message: String,
    pub level: LogLevel,
}

impl RemotePayload {
    pub fn new(level: LogLevel, message: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: timestamp.timestamp_millis() as f64 / 1000.0,
            short_message: message.to_string(),
            long_message: message.to_string(),
            level,
        }
    }
}

/// 以 JSON 形式 POST 的能力，返回 HTTP 状态码
#[async_trait::async_trait]
pub trait RemoteTransport: Send + Sync {
    async fn post_json(&self, url: &str, payload: &RemotePayload) -> anyhow::Result<u16>;
}

/// 基于 reqwest 的 HTTP 传输
///
/// client 在第一次发送时创建，创建失败作为发送失败报告
pub struct ReqwestTransport {
    timeout: Duration,
    client: OnceCell<reqwest::Client>,
}

impl ReqwestTransport {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            client: OnceCell::new(),
        }
    }

    fn client(&self) -> anyhow::Result<&reqwest::Client> {
        self.client.get_or_try_init(|| {
            // 发送任务可能跑在不同的 runtime 上，不复用连接
            let client = reqwest::Client::builder()
                .timeout(self.timeout)
                .pool_max_idle_per_host(0)
                .build()?;
            Ok(client)
        })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

#[async_trait::async_trait]
impl RemoteTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, payload: &RemotePayload) -> anyhow::Result<u16> {
        let resp = self.client()?.post(url).json(payload).send().await?;
        Ok(resp.status().as_u16())
    }
}

/// 远端输出器
///
/// 发送是 fire-and-forget：请求在独立任务中完成，调用方不等待结果，
/// 与后续日志调用之间的完成顺序不做保证。失败只在控制台输出诊断信息。
pub struct RemoteAppender {
    transport: Arc<dyn RemoteTransport>,
    console: Arc<dyn ConsoleWriter>,
}

impl RemoteAppender {
    pub fn new(transport: Arc<dyn RemoteTransport>, console: Arc<dyn ConsoleWriter>) -> Self {
        Self { transport, console }
    }

    pub fn send(&self, url: &str, payload: RemotePayload) {
        let transport = Arc::clone(&self.transport);
        let console = Arc::clone(&self.console);
        let url = url.to_string();

        spawn_detached(async move {
            let failure = match transport.post_json(&url, &payload).await {
                Ok(status) if (200..300).contains(&status) => return,
                Ok(status) => format!("unexpected status {}", status),
                Err(e) => e.to_string(),
            };

            tracing::warn!(url = %url, error = %failure, "remote log sink communication failed");
            let diagnostic = format!("Remote log sink communication failed ({}): {}", url, failure);
            let _ = console.write_line(ConsoleStream::Stderr, &diagnostic, &[]);
        });
    }
}

/// 不在 tokio runtime 中调用时，发送任务统一交给这个后台 runtime
static BACKGROUND_RUNTIME: Lazy<Option<Runtime>> = Lazy::new(|| {
    match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name(BACKGROUND_THREAD_NAME)
        .enable_all()
        .build()
    {
        Ok(runtime) => Some(runtime),
        Err(e) => {
            tracing::warn!(error = %e, "failed to build runtime for remote log sink");
            None
        }
    }
});

const BACKGROUND_THREAD_NAME: &str = "catlog-remote";

/// 在当前 tokio runtime 上启动任务，不在 runtime 中时交给后台 runtime
fn spawn_detached<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.spawn(future);
    } else if let Some(runtime) = BACKGROUND_RUNTIME.as_ref() {
        runtime.spawn(future);
    }
}
