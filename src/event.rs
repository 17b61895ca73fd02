use crate::level::LogLevel;
use crossbeam::channel::{unbounded, Receiver};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// 每次被接受的日志写入都会发布一个事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub category: String,
    pub level: LogLevel,
    pub message: String,
}

/// 监听器 ID，用于取消订阅
pub type ListenerId = u64;

type Listener = Arc<dyn Fn(&LogEvent) + Send + Sync>;

/// 日志事件流
///
/// 没有监听器是合法的，此时发布几乎没有开销
#[derive(Default)]
pub struct EventStream {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(ListenerId, Listener)>>,
}

impl EventStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册监听器
    ///
    /// # 示例
    ///
    /// ```ignore
    /// let id = catlog::events().on(|event| {
    ///     println!("{} {} {}", event.category, event.level, event.message);
    /// });
    /// ```
    pub fn on<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&LogEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// 取消订阅，返回监听器是否存在
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// 以 channel 的形式订阅
    pub fn subscribe(&self) -> (ListenerId, Receiver<LogEvent>) {
        let (sender, receiver) = unbounded();
        let id = self.on(move |event| {
            let _ = sender.send(event.clone());
        });
        (id, receiver)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// 发布事件
    ///
    /// 回调在锁外执行，监听器内部可以继续打日志或修改订阅
    pub fn emit(&self, event: &LogEvent) {
        let listeners: Vec<Listener> = {
            let guard = self
                .listeners
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if guard.is_empty() {
                return;
            }
            guard.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        for listener in listeners {
            listener(event);
        }
    }
}
