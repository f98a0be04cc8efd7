use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 下载任务标识。
///
/// 随机生成（UUID v4），进程生命周期内不会重复，因此延迟触发的自动移除
/// 不可能误删另一个任务。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 短格式足够在列表中区分任务
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}
