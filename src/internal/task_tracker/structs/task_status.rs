use serde::{Deserialize, Serialize};

/// 下载任务状态
///
/// `Pending` 为初始状态；`Succeeded` / `Failed` 为终态，终态之间不会再互相转换。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Succeeded,
    Failed,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskStatus::Pending)
    }
}
