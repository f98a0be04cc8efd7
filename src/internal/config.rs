//! 运行配置：从环境变量（以及可选的 `.env` 文件）读取。
//!
//! | 变量 | 说明 | 默认值 |
//! |------|------|--------|
//! | `REPORT_API_URL` | 报表服务根地址 | 必填 |
//! | `REPORT_API_KEY` | `X-API-KEY` 请求头的值 | 必填 |
//! | `REQUEST_TIMEOUT` | 请求超时（秒） | 30 |
//! | `TASK_REMOVAL_DELAY` | 成功任务自动移除的延迟（秒） | 5 |
//! | `REPORT_OUTPUT_DIR` | 报表保存目录 | 系统下载目录，取不到时为当前目录 |

use std::path::PathBuf;
use std::time::Duration;

use crate::internal::auth::structs::report_api_auth::{DEFAULT_REQUEST_TIMEOUT, ReportApiAuth};
use crate::internal::error::ReportError;
use crate::internal::task_tracker::structs::TrackerConfig;
use crate::internal::task_tracker::structs::tracker_config::DEFAULT_REMOVAL_DELAY;

pub mod env_var_names {
    pub const REPORT_API_URL: &str = "REPORT_API_URL";
    pub const REPORT_API_KEY: &str = "REPORT_API_KEY";
    pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
    pub const TASK_REMOVAL_DELAY: &str = "TASK_REMOVAL_DELAY";
    pub const REPORT_OUTPUT_DIR: &str = "REPORT_OUTPUT_DIR";
}

use env_var_names::*;

#[derive(Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub api_key: String,
    pub request_timeout: Duration,
    pub removal_delay: Duration,
    pub output_dir: PathBuf,
}

/// 防止debug泄漏密钥
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<hidden>")
            .field("request_timeout", &self.request_timeout)
            .field("removal_delay", &self.removal_delay)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}

impl AppConfig {
    /// 先加载当前目录下的 `.env`（不存在则忽略，已有的环境变量优先），再读取环境变量。
    pub fn from_env() -> Result<Self, ReportError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置，便于测试时不动进程环境变量。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get(REPORT_API_URL).ok_or(ReportError::MissingConfig(REPORT_API_URL))?;
        let api_key = get(REPORT_API_KEY).ok_or(ReportError::MissingConfig(REPORT_API_KEY))?;

        let request_timeout = match get(REQUEST_TIMEOUT) {
            Some(v) => parse_seconds(REQUEST_TIMEOUT, &v)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };
        let removal_delay = match get(TASK_REMOVAL_DELAY) {
            Some(v) => parse_seconds(TASK_REMOVAL_DELAY, &v)?,
            None => DEFAULT_REMOVAL_DELAY,
        };
        let output_dir = get(REPORT_OUTPUT_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(default_output_dir);

        Ok(Self {
            base_url,
            api_key,
            request_timeout,
            removal_delay,
            output_dir,
        })
    }

    pub fn build_auth(&self) -> Result<ReportApiAuth, ReportError> {
        ReportApiAuth::with_timeout(&self.base_url, &self.api_key, self.request_timeout)
    }

    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            removal_delay: self.removal_delay,
            ..TrackerConfig::default()
        }
    }
}

pub fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// 秒数，允许小数（如 `0.5`）
fn parse_seconds(key: &'static str, value: &str) -> Result<Duration, ReportError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ReportError::InvalidConfig {
            key,
            value: value.to_string(),
        })
}
