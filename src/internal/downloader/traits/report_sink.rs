//! 报表文件的落地方式。下载器只负责拿到字节，存到哪里由实现方决定。

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

/// 保存已下载的报表文件，返回最终保存位置。
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn save(&self, filename: &str, body: Bytes) -> std::io::Result<PathBuf>;
}
