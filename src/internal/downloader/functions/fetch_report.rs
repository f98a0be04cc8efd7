//! 请求报表接口，整文件流式读入内存。

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use reqwest::Response;
use reqwest::header::CONTENT_DISPOSITION;
use tracing::{debug, warn};

use crate::internal::auth::structs::report_api_auth::ReportApiAuth;
use crate::internal::downloader::structs::fetch_error::{FetchError, SERVER_ERROR_MESSAGE};
use crate::internal::downloader::structs::fetched_report::FetchedReport;
use crate::internal::report::structs::{DateRange, ReportDefinition};

use super::content_disposition::filename_from_content_disposition;

/// `GET {base_url}report/{id}?start_date=..&end_date=..`
///
/// 成功时返回文件名与文件内容；失败时按 [`FetchError`] 分类。
pub async fn fetch_report(
    auth: &ReportApiAuth,
    report: &ReportDefinition,
    range: &DateRange,
) -> Result<FetchedReport, FetchError> {
    let url = auth.report_url(report.id);

    debug!(report = report.id, %url, "请求报表");
    let resp = auth
        .client
        .get(url)
        .query(&range.query_pairs())
        .send()
        .await
        .map_err(FetchError::Unreachable)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(read_error_response(resp).await);
    }

    let filename = resp
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(filename_from_content_disposition)
        .unwrap_or_else(|| report.default_filename());

    let body = read_body(resp).await.map_err(FetchError::Unreachable)?;
    debug!(report = report.id, %filename, bytes = body.len(), "报表已下载");

    Ok(FetchedReport { filename, body })
}

async fn read_body(resp: Response) -> Result<Bytes, reqwest::Error> {
    let mut stream = resp.bytes_stream();
    let mut buf = BytesMut::new();
    while let Some(chunk) = stream.next().await {
        buf.extend_from_slice(&chunk?);
    }
    Ok(buf.freeze())
}

/// 错误响应按文本解码为 JSON 并取出 `detail`。
///
/// 只有解码失败才算 [`FetchError::Undecodable`]；数组、字符串、数字等
/// 合法 JSON 没有 `detail` 字段，统一使用通用提示。
async fn read_error_response(resp: Response) -> FetchError {
    let status = resp.status();
    let body = match read_body(resp).await {
        Ok(body) => body,
        Err(e) => return FetchError::Unreachable(e),
    };

    let text = String::from_utf8_lossy(&body);
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(payload) => FetchError::Server {
            status,
            detail: detail_message(payload.get("detail")),
        },
        Err(source) => {
            warn!(%status, "错误响应不是 JSON");
            FetchError::Undecodable { status, source }
        }
    }
}

/// 字符串原样使用，其它 JSON 值序列化成文本；
/// 缺失、`null`、`false`、`0`、空串使用通用提示。
fn detail_message(detail: Option<&serde_json::Value>) -> String {
    use serde_json::Value;

    match detail {
        None | Some(Value::Null) | Some(Value::Bool(false)) => SERVER_ERROR_MESSAGE.to_string(),
        Some(Value::String(s)) if s.is_empty() => SERVER_ERROR_MESSAGE.to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => SERVER_ERROR_MESSAGE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
