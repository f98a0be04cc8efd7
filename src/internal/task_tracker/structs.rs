pub mod download_task;
pub mod task_id;
pub mod task_status;
pub mod task_tracker;
pub mod tracker_config;

// 重导出公共类型
pub use download_task::DownloadTask;
pub use task_id::TaskId;
pub use task_status::TaskStatus;
pub use task_tracker::{TaskTracker, TaskWatcher};
pub use tracker_config::TrackerConfig;
