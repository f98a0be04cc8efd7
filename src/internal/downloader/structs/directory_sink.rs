use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::internal::downloader::traits::report_sink::ReportSink;

/// 同名文件最多尝试的编号
const MAX_NAME_ATTEMPTS: usize = 1000;

/// 把报表保存到指定目录（不存在时自动创建）。
///
/// 从不覆盖已有文件：`a.xlsx` 已存在时依次尝试 `a (1).xlsx`、`a (2).xlsx`……
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ReportSink for DirectorySink {
    async fn save(&self, filename: &str, body: Bytes) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir).await?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.dir.join(numbered_name(filename, attempt));
            // create_new 保证并发下载同名文件时也不会互相覆盖
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e),
            };
            file.write_all(&body).await?;
            file.flush().await?;
            debug!(path = %path.display(), bytes = body.len(), "报表已保存");
            return Ok(path);
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("{filename} 的同名文件过多"),
        ))
    }
}

/// `report.xlsx` → `report (n).xlsx`；`n == 0` 时保持原名。
fn numbered_name(filename: &str, n: usize) -> String {
    if n == 0 {
        return filename.to_string();
    }
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem} ({n}).{ext}"),
        _ => format!("{filename} ({n})"),
    }
}
