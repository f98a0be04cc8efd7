use core::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    Client,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use sha2::{Digest, Sha256};
use url::Url;

use crate::internal::error::ReportError;

/// 报表接口要求的密钥请求头
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// 默认请求超时
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// 报表接口认证信息
///
/// - 持有已带上 `X-API-KEY` 默认请求头的 http 客户端，调用方无需再关心密钥；
/// - `base_url` 统一以 `/` 结尾，方便拼接 `report/{id}`；
/// - 密钥只保留其 sha256 摘要用于比较，Debug 输出不会泄漏密钥。
#[derive(Clone)]
pub struct ReportApiAuth {
    pub client: Client,     // 内部是Arc，不需要特殊处理
    pub base_url: Arc<Url>, // 下载在 tokio 任务中执行，需要 Send，所以用 Arc
    pub(crate) key_fingerprint: Arc<String>,
}

impl ReportApiAuth {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ReportError> {
        Self::with_timeout(base_url, api_key, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, ReportError> {
        let base_url = format_base_url(base_url)?;
        let http_client = InternalHttpClient::create(api_key, timeout)?;

        Ok(Self {
            client: http_client.client,
            base_url: Arc::new(base_url),
            key_fingerprint: Arc::new(http_client.key_fingerprint),
        })
    }

    /// 报表下载地址：`{base_url}report/{report_id}`，`report_id` 会被百分号编码。
    pub fn report_url(&self, report_id: &str) -> Url {
        let mut url = (*self.base_url).clone();
        // 构造时已排除 cannot-be-a-base 的地址
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("report").push(report_id);
        }
        url
    }
}

impl PartialEq for ReportApiAuth {
    fn eq(&self, other: &Self) -> bool {
        self.key_fingerprint == other.key_fingerprint && self.base_url == other.base_url
    }
}

/// 防止debug泄漏密钥
impl fmt::Debug for ReportApiAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportApiAuth")
            .field("base_url", &self.base_url.as_str())
            .field("client", &"<Client with hidden api key>")
            .finish()
    }
}

fn format_base_url(url: &str) -> Result<Url, ReportError> {
    if url.trim().is_empty() {
        return Err(ReportError::InvalidBaseUrl("地址为空".to_string()));
    }

    let mut base_url =
        Url::parse(url.trim()).map_err(|e| ReportError::InvalidBaseUrl(e.to_string()))?;

    if base_url.cannot_be_a_base() {
        return Err(ReportError::InvalidBaseUrl(url.to_string()));
    }

    if !base_url.path().ends_with('/') {
        let new_path = format!("{}/", base_url.path());
        base_url.set_path(&new_path);
    }

    Ok(base_url)
}

/// 内部临时使用的http客户端结构体，在初始化ReportApiAuth时使用
struct InternalHttpClient {
    client: Client,
    key_fingerprint: String,
}

impl InternalHttpClient {
    fn fingerprint(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn create(api_key: &str, timeout: Duration) -> Result<Self, ReportError> {
        let mut headers = HeaderMap::new();

        let mut key_value =
            HeaderValue::from_str(api_key).map_err(|_| ReportError::InvalidApiKey)?;
        key_value.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key_value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            key_fingerprint: Self::fingerprint(api_key),
        })
    }
}
