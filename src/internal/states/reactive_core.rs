//! # ReactiveProperty — 响应式属性内核
//!
//! 基于 [`tokio::sync::watch`] 的共享状态容器：一处写、多处读，
//! 每次写入都会唤醒所有监听者。任务追踪器的任务列表即存放于此。
//!
//! 写入统一走 `send_if_modified`，修改与通知在同一次加锁内完成，
//! 多个任务并发修改时不会丢失更新。

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tokio::sync::watch::Ref;
use tokio::sync::watch::error::RecvError;

// ──────────────────────────── Error ────────────────────────────

/// 响应式属性统一错误类型
#[derive(Debug, Error)]
pub enum ReactivePropertyError {
    /// 属性已被销毁（所有持有者都已释放）
    #[error("属性已被销毁")]
    Destroyed,

    /// watch 通道接收失败
    #[error("接收失败: {0}")]
    RecvError(#[from] RecvError),
}

// ──────────────────────────── Inner ────────────────────────────

#[derive(Debug)]
pub(crate) struct Inner<T> {
    pub(crate) sender: watch::Sender<Option<T>>,
}

impl<T> Drop for Inner<T> {
    fn drop(&mut self) {
        let _ = self.sender.send(None);
    }
}

// ──────────────────────────── ReactiveProperty ────────────────────────────

/// 响应式属性内核：提供 new / update / update_field / get_current / watch 等基础能力。
///
/// Clone 只复制句柄，所有副本共享同一个值。
#[derive(Clone, Debug)]
pub struct ReactiveProperty<T: Clone + Send + Sync> {
    pub(crate) inner: Arc<Inner<T>>,
    pub(crate) cache_receiver: watch::Receiver<Option<T>>,
}

impl<T> ReactiveProperty<T>
where
    T: Clone + Send + Sync,
{
    /// 创建一个新的响应式属性。
    pub fn new(value: T) -> Self {
        let (sender, cache_receiver) = watch::channel(Some(value));
        Self {
            inner: Arc::new(Inner { sender }),
            cache_receiver,
        }
    }

    /// 整体替换属性的值，所有监听者都会收到通知。
    pub fn update(&self, new_value: T) -> &Self {
        self.inner.sender.send_replace(Some(new_value));
        self
    }

    /// 使用闭包原地修改属性。
    ///
    /// 闭包返回 `true` 表示确实发生了修改，此时才会通知监听者；
    /// 返回值即闭包的返回值。
    pub fn update_field<F>(&self, updater: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        self.inner.sender.send_if_modified(|slot| match slot.as_mut() {
            Some(value) => updater(value),
            None => false,
        })
    }

    /// 获取当前属性值的快照（会 clone）。
    pub fn get_current(&self) -> Option<T> {
        self.cache_receiver.borrow().as_ref().cloned()
    }

    /// 获取当前属性值的只读借用（零拷贝）。
    ///
    /// 持有期间会阻塞写入方，不要跨 `.await` 持有。
    pub fn get_current_borrow(&'_ self) -> Ref<'_, Option<T>> {
        self.cache_receiver.borrow()
    }

    /// 对当前值应用转换函数，避免 clone 整个值。
    pub fn map<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.cache_receiver.borrow().as_ref().map(f)
    }

    /// 创建一个监听器，用于异步监听属性值的变化。
    ///
    /// 监听器不持有属性本身：所有属性句柄释放后，`changed()` 返回错误。
    pub fn watch(&self) -> PropertyWatcher<T> {
        PropertyWatcher {
            receiver: self.inner.sender.subscribe(),
        }
    }

    /// 挂起直到当前值满足 `predicate`；当前值已满足时立即返回。
    pub async fn wait_until<F>(&self, mut predicate: F) -> Result<(), ReactivePropertyError>
    where
        F: FnMut(&T) -> bool,
    {
        let mut receiver = self.inner.sender.subscribe();
        let satisfied = receiver
            .wait_for(|slot| match slot {
                Some(value) => predicate(value),
                None => true,
            })
            .await?;
        if satisfied.is_some() {
            Ok(())
        } else {
            Err(ReactivePropertyError::Destroyed)
        }
    }
}

// ──────────────────────────── PropertyWatcher ────────────────────────────

/// 属性监听器，用于异步接收属性值的变化。
pub struct PropertyWatcher<T> {
    receiver: watch::Receiver<Option<T>>,
}

impl<T> PropertyWatcher<T>
where
    T: Clone + Send + Sync,
{
    /// 异步等待属性值的变化，返回新值。
    pub async fn changed(&mut self) -> Result<T, ReactivePropertyError> {
        self.receiver.changed().await?;
        match self.receiver.borrow_and_update().as_ref() {
            None => Err(ReactivePropertyError::Destroyed),
            Some(value) => Ok(value.clone()),
        }
    }

    /// 同步获取当前值的克隆。
    pub fn borrow(&self) -> Option<T> {
        self.receiver.borrow().clone()
    }
}
