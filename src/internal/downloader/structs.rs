pub mod directory_sink;
pub mod fetch_error;
pub mod fetched_report;
pub mod report_downloader;

// 重导出公共类型
pub use directory_sink::DirectorySink;
pub use fetch_error::FetchError;
pub use fetched_report::FetchedReport;
pub use report_downloader::ReportDownloader;
