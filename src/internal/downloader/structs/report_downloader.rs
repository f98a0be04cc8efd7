//! 报表下载器
//!
//! 一次下载的完整流程：
//!
//! 1. 立即在追踪器中创建 `Pending` 任务（早于网络请求返回）；
//! 2. 请求报表接口，拿到文件名与文件内容；
//! 3. 通过 [`ReportSink`] 保存文件；
//! 4. 把结果（成功 / 失败及原因）交给追踪器，恰好一次。
//!
//! 所有失败都在这里转换成任务的 `Failed` 状态，不会继续向上传播。
//! 下载一旦发出就不能取消：用户关闭任务只是移除记录，稍后到达的结果会被追踪器忽略。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use report_fetch::auth::ReportApiAuth;
//! # use report_fetch::downloader::{DirectorySink, ReportDownloader};
//! # use report_fetch::report::{DateRange, find_report};
//! # use report_fetch::tracker::TaskTracker;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = ReportApiAuth::new("http://localhost:8000/", "secret")?;
//! let downloader = ReportDownloader::new(auth, TaskTracker::default(), DirectorySink::new("out"));
//!
//! let report = find_report("invitro")?;
//! let range = DateRange::parse("2025-11-01", "2025-11-27")?;
//! let task_id = downloader.download(report, &range).await;
//! println!("{:?}", downloader.tracker().get_task(task_id));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::internal::auth::structs::report_api_auth::ReportApiAuth;
use crate::internal::downloader::functions::fetch_report::fetch_report;
use crate::internal::downloader::traits::report_sink::ReportSink;
use crate::internal::report::structs::{DateRange, ReportDefinition};
use crate::internal::task_tracker::structs::{TaskId, TaskStatus, TaskTracker};

use super::fetch_error::FetchError;

/// 报表下载器。Clone 只复制句柄，追踪器与保存方式在副本间共享。
#[derive(Clone)]
pub struct ReportDownloader {
    auth: ReportApiAuth,
    tracker: TaskTracker,
    sink: Arc<dyn ReportSink>,
}

impl ReportDownloader {
    pub fn new(auth: ReportApiAuth, tracker: TaskTracker, sink: impl ReportSink + 'static) -> Self {
        Self {
            auth,
            tracker,
            sink: Arc::new(sink),
        }
    }

    pub fn tracker(&self) -> &TaskTracker {
        &self.tracker
    }

    /// 创建任务并等待下载结束，返回任务标识；结果记录在任务状态中。
    pub async fn download(&self, report: &ReportDefinition, range: &DateRange) -> TaskId {
        let id = self.tracker.create_task(report.name);
        self.run(id, report, range).await;
        id
    }

    /// 同步创建任务后立即返回，下载在后台 tokio 任务中进行。
    ///
    /// 必须在 tokio 运行时内调用。
    pub fn spawn(&self, report: &ReportDefinition, range: DateRange) -> TaskId {
        let id = self.tracker.create_task(report.name);
        let this = self.clone();
        let report = report.clone();
        tokio::spawn(async move {
            this.run(id, &report, &range).await;
        });
        id
    }

    async fn run(&self, id: TaskId, report: &ReportDefinition, range: &DateRange) {
        match self.fetch_and_save(report, range).await {
            Ok(path) => {
                info!(task = %id, report = report.id, path = %path.display(), "报表下载完成");
                self.tracker.update_status(
                    id,
                    TaskStatus::Succeeded,
                    &format!("已保存到 {}", path.display()),
                );
            }
            Err(e) => {
                warn!(task = %id, report = report.id, error = ?e, "报表下载失败");
                self.tracker
                    .update_status(id, TaskStatus::Failed, &e.to_string());
            }
        }
    }

    async fn fetch_and_save(
        &self,
        report: &ReportDefinition,
        range: &DateRange,
    ) -> Result<PathBuf, FetchError> {
        let fetched = fetch_report(&self.auth, report, range).await?;
        let path = self.sink.save(&fetched.filename, fetched.body).await?;
        Ok(path)
    }
}
