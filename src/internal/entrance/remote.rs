use futures_util::future::join_all;

use crate::internal::downloader::structs::ReportDownloader;
use crate::internal::report::structs::{DateRange, ReportDefinition};
use crate::internal::task_tracker::structs::TaskId;

/// 按同一日期区间并发下载多份报表，返回各自的任务标识（顺序与 `reports` 一致）。
///
/// 每份报表互相独立：一份失败不影响其余的下载，结果都记录在追踪器的任务状态里。
///
/// example:
/// ```rust,no_run
/// use report_fetch::auth::ReportApiAuth;
/// use report_fetch::downloader::{DirectorySink, ReportDownloader};
/// use report_fetch::download_reports;
/// use report_fetch::report::{DateRange, catalog};
/// use report_fetch::tracker::TaskTracker;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let auth = ReportApiAuth::new("http://localhost:8000/", "secret")?;
/// let downloader = ReportDownloader::new(auth, TaskTracker::default(), DirectorySink::new("out"));
/// let reports: Vec<_> = catalog().iter().collect();
///
/// let ids = download_reports(&downloader, &reports, &DateRange::today()).await;
/// # Ok(())
/// # }
/// ```
pub async fn download_reports(
    downloader: &ReportDownloader,
    reports: &[&ReportDefinition],
    range: &DateRange,
) -> Vec<TaskId> {
    let tasks = reports
        .iter()
        .map(|report| downloader.download(report, range));

    join_all(tasks).await
}
