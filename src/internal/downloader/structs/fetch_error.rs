//! 下载失败分类。`Display` 即展示给用户的任务状态文本。

use reqwest::StatusCode;
use thiserror::Error;

pub const UNREACHABLE_MESSAGE: &str = "服务器不可用（请检查 VPN 或网络连接）";
pub const SERVER_ERROR_MESSAGE: &str = "服务器错误";
pub const UNDECODABLE_MESSAGE: &str = "下载文件时出错";

#[derive(Debug, Error)]
pub enum FetchError {
    /// 没有收到响应，或错误响应的内容读取失败（两者不做区分）
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable(#[source] reqwest::Error),

    /// 服务端返回了可解析的错误内容
    #[error("{detail}")]
    Server { status: StatusCode, detail: String },

    /// 错误内容不是 JSON
    #[error("{}", UNDECODABLE_MESSAGE)]
    Undecodable {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("保存文件失败: {0}")]
    Save(#[from] std::io::Error),
}
