use bytes::Bytes;

/// 成功下载的报表文件（仍在内存中，尚未保存）。
#[derive(Debug, Clone)]
pub struct FetchedReport {
    pub filename: String,
    pub body: Bytes,
}
