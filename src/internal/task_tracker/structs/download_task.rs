use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::task_id::TaskId;
use super::task_status::TaskStatus;

/// 一次用户发起的下载，从发起一直跟踪到完成或被关闭。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadTask {
    pub id: TaskId,
    /// 报表名称，创建后不变
    pub label: String,
    pub status: TaskStatus,
    /// 状态说明，每次状态变化时整体替换
    pub message: String,
    /// 仅用于展示
    pub created_at: DateTime<Local>,
}

impl DownloadTask {
    pub(crate) fn pending(label: &str, message: &str) -> Self {
        Self {
            id: TaskId::new(),
            label: label.to_string(),
            status: TaskStatus::Pending,
            message: message.to_string(),
            created_at: Local::now(),
        }
    }
}
