use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use report_fetch::config::{AppConfig, env_var_names};
use report_fetch::downloader::{DirectorySink, ReportDownloader};
use report_fetch::report::{DateRange, ReportDefinition, catalog, find_report};
use report_fetch::tracker::{DownloadTask, TaskStatus, TaskTracker, TaskWatcher};
use report_fetch::{ReportError, download_reports};

#[derive(Parser)]
#[command(name = "report-fetch")]
#[command(about = "下载预定义报表并跟踪每个下载任务的状态", long_about = None)]
struct Cli {
    /// 报表服务根地址，覆盖 REPORT_API_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 列出可下载的报表
    List,
    /// 下载一份或多份报表
    Download {
        /// 报表 id（见 `list`）
        #[arg(required = true)]
        reports: Vec<String>,

        /// 开始日期（YYYY-MM-DD 或 DD.MM.YYYY），默认今天
        #[arg(short, long)]
        start: Option<String>,

        /// 结束日期，默认与开始日期相同
        #[arg(short, long)]
        end: Option<String>,

        /// 保存目录，覆盖 REPORT_OUTPUT_DIR
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env 中也可以设置 LOG_LEVEL，需先于日志初始化加载
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, ReportError> {
    let Command::Download {
        reports,
        start,
        end,
        output_dir,
    } = cli.command
    else {
        print_catalog(catalog());
        return Ok(ExitCode::SUCCESS);
    };

    // 命令行参数优先于环境变量与 .env
    let base_url = cli.base_url;
    let mut config = AppConfig::from_lookup(|key| match (key, &base_url) {
        (env_var_names::REPORT_API_URL, Some(url)) => Some(url.clone()),
        _ => std::env::var(key).ok(),
    })?;
    if let Some(dir) = output_dir {
        config.output_dir = dir;
    }

    let range = match (start, end) {
        (None, None) => DateRange::today(),
        (Some(start), None) => DateRange::parse(&start, &start)?,
        (None, Some(end)) => DateRange::parse(&end, &end)?,
        (Some(start), Some(end)) => DateRange::parse(&start, &end)?,
    };
    let reports = reports
        .iter()
        .map(|id| find_report(id))
        .collect::<Result<Vec<_>, _>>()?;

    let tracker = TaskTracker::new(config.tracker_config());
    let downloader = ReportDownloader::new(
        config.build_auth()?,
        tracker.clone(),
        DirectorySink::new(&config.output_dir),
    );
    info!(output_dir = %config.output_dir.display(), "开始下载 {} 份报表", reports.len());

    let render = tokio::spawn(render_tasks(tracker.watch()));
    download_reports(&downloader, &reports, &range).await;
    if let Err(e) = tracker.wait_until_settled().await {
        warn!("等待下载结束失败: {e}");
    }
    // 渲染任务看到全部终态后自行退出
    if let Err(e) = render.await {
        warn!("状态输出任务异常退出: {e}");
    }

    let tasks = tracker.list_tasks();
    print_summary(&tasks);

    if tasks.iter().any(|t| t.status == TaskStatus::Failed) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// 任务列表每变化一次就输出一次变化的任务，所有任务结束后返回
async fn render_tasks(mut watcher: TaskWatcher) {
    let mut previous: Vec<DownloadTask> = Vec::new();
    while let Ok(tasks) = watcher.changed().await {
        for task in tasks.iter().filter(|t| !previous.contains(t)) {
            info!(task = %task.id, status = ?task.status, "{}: {}", task.label, task.message);
        }
        if !tasks.is_empty() && tasks.iter().all(|t| t.status.is_terminal()) {
            break;
        }
        previous = tasks;
    }
}

fn print_catalog(reports: &[ReportDefinition]) {
    for report in reports {
        println!("{:<10} {}", report.id, report.name);
        println!("{:<10} {}", "", report.description);
    }
}

fn print_summary(tasks: &[DownloadTask]) {
    for task in tasks.iter().rev() {
        let mark = match task.status {
            TaskStatus::Pending => "…",
            TaskStatus::Succeeded => "✔",
            TaskStatus::Failed => "✘",
        };
        println!(
            "{mark} [{}] {}: {}",
            task.created_at.format("%H:%M:%S"),
            task.label,
            task.message
        );
    }
}
