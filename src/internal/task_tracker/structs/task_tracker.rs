//! 下载任务追踪器
//!
//! 持有唯一一份任务列表，并提供仅有的几个修改入口：
//! [`create_task`](TaskTracker::create_task)、[`update_status`](TaskTracker::update_status)、
//! [`remove_task`](TaskTracker::remove_task)。其余组件只能读取快照或监听变化。
//!
//! ## 状态机
//!
//! ```text
//! pending --成功--> succeeded --延迟--> [移除]
//! pending --失败--> failed              （保留，直到用户手动移除）
//! ```
//!
//! 任何输入都不会让追踪器报错：找不到的任务一律静默忽略，
//! 因为网络结果可能在用户关闭任务之后才返回。

use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::internal::states::reactive_core::{PropertyWatcher, ReactivePropertyError};
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

use super::download_task::DownloadTask;
use super::task_id::TaskId;
use super::task_status::TaskStatus;
use super::tracker_config::TrackerConfig;

/// 任务列表监听器，每次列表变化后返回新的快照（新任务在前）。
pub type TaskWatcher = PropertyWatcher<Vec<DownloadTask>>;

/// 下载任务追踪器。Clone 只复制句柄，所有副本共享同一个任务列表。
#[derive(Clone, Debug)]
pub struct TaskTracker {
    tasks: UnlockReactiveProperty<Vec<DownloadTask>>,
    config: TrackerConfig,
}

impl Default for TaskTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl TaskTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tasks: UnlockReactiveProperty::new(Vec::new()),
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// 新建一个 `Pending` 任务并插入列表头部，返回其标识。
    pub fn create_task(&self, label: &str) -> TaskId {
        let task = DownloadTask::pending(label, &self.config.pending_message);
        let id = task.id;
        self.tasks.update_field(|tasks| {
            tasks.insert(0, task);
            true
        });
        debug!(task = %id, label, "下载任务已创建");
        id
    }

    /// 把任务置为终态并替换状态文本。
    ///
    /// - 任务不存在（已被移除）：静默忽略；
    /// - 任务已处于终态：忽略，状态不会回退或改写；
    /// - `status` 为 `Pending`：属于误用，记录警告后忽略。
    ///
    /// 置为 `Succeeded` 时会安排一次延迟移除。
    pub fn update_status(&self, id: TaskId, status: TaskStatus, message: &str) {
        if !status.is_terminal() {
            warn!(task = %id, "忽略无效的状态更新：只能更新为终态");
            return;
        }

        let applied = self.tasks.update_field(|tasks| {
            match tasks.iter_mut().find(|t| t.id == id && !t.status.is_terminal()) {
                Some(task) => {
                    task.status = status;
                    task.message = message.to_string();
                    true
                }
                None => false,
            }
        });

        if !applied {
            debug!(task = %id, "任务已移除或已结束，忽略状态更新");
            return;
        }
        debug!(task = %id, ?status, message, "任务状态已更新");

        if status == TaskStatus::Succeeded {
            self.schedule_removal(id);
        }
    }

    /// 移除任务；任务不存在时什么也不做，可重复调用。
    pub fn remove_task(&self, id: TaskId) {
        let removed = self.tasks.update_field(|tasks| {
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            tasks.len() != before
        });
        if removed {
            debug!(task = %id, "任务已移除");
        }
    }

    /// 移除所有已结束（成功或失败）的任务，返回移除数量。
    pub fn clear_finished(&self) -> usize {
        let mut removed = 0;
        self.tasks.update_field(|tasks| {
            let before = tasks.len();
            tasks.retain(|t| !t.status.is_terminal());
            removed = before - tasks.len();
            removed > 0
        });
        removed
    }

    /// 任务列表快照，新任务在前。
    pub fn list_tasks(&self) -> Vec<DownloadTask> {
        self.tasks.get_current().unwrap_or_default()
    }

    pub fn get_task(&self, id: TaskId) -> Option<DownloadTask> {
        self.tasks
            .get_current_borrow()
            .as_ref()
            .and_then(|tasks| tasks.iter().find(|t| t.id == id).cloned())
    }

    /// 订阅任务列表的变化。
    pub fn watch(&self) -> TaskWatcher {
        self.tasks.watch()
    }

    /// 挂起直到列表中没有 `Pending` 任务。
    pub async fn wait_until_settled(&self) -> Result<(), ReactivePropertyError> {
        self.tasks
            .wait_until(|tasks| tasks.iter().all(|t| t.status.is_terminal()))
            .await
    }

    /// 成功任务的延迟移除。
    ///
    /// 定时器只调用 `remove_task`：用户提前关闭时它就是空操作，
    /// 标识不会复用，因此也不会误删或“复活”任何任务。
    fn schedule_removal(&self, id: TaskId) {
        let Ok(handle) = Handle::try_current() else {
            warn!(task = %id, "当前没有 tokio 运行时，跳过自动移除");
            return;
        };

        let tracker = self.clone();
        let delay = self.config.removal_delay;
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            tracker.remove_task(id);
        });
    }
}
