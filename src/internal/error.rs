//! 任务创建之前就能发现的错误：配置、输入校验、HTTP 客户端构造。
//!
//! 任务创建之后的失败（网络、服务端、保存文件）见 [`FetchError`](crate::downloader::FetchError)，
//! 它们不会向上传播，而是记录到任务状态中。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("缺少配置项: {0}")]
    MissingConfig(&'static str),

    #[error("配置项 {key} 无效: {value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("服务地址无效: {0}")]
    InvalidBaseUrl(String),

    #[error("API 密钥不是合法的请求头值")]
    InvalidApiKey,

    #[error("创建 HTTP 客户端失败: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("未知报表: {0}")]
    UnknownReport(String),

    #[error("日期格式无效: {0}（应为 YYYY-MM-DD 或 DD.MM.YYYY）")]
    InvalidDate(String),

    #[error("结束日期 {end} 早于开始日期 {start}")]
    InvalidDateRange { start: String, end: String },
}
