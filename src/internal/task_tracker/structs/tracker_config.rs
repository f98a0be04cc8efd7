use std::time::Duration;

/// 成功任务自动移除前的默认停留时间
pub const DEFAULT_REMOVAL_DELAY: Duration = Duration::from_secs(5);

/// 新任务的默认状态文本
pub const DEFAULT_PENDING_MESSAGE: &str = "正在生成报表…";

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// 任务成功后，在列表中保留多久再自动移除
    pub removal_delay: Duration,
    pub pending_message: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            removal_delay: DEFAULT_REMOVAL_DELAY,
            pending_message: DEFAULT_PENDING_MESSAGE.to_string(),
        }
    }
}
