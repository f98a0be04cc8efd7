/// 内部导出的模块
mod internal;


/// 导出核心入口函数
pub use internal::entrance::remote::*;
pub use internal::error::ReportError;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::report_api_auth::{
        API_KEY_HEADER, DEFAULT_REQUEST_TIMEOUT, ReportApiAuth,
    };
}

pub mod config {
    use crate::internal;
    pub use internal::config::*;
}

/// 下载任务追踪器：任务模型、状态与追踪器本身
pub mod tracker {
    use crate::internal;
    pub use internal::task_tracker::structs::*;
    pub use internal::task_tracker::structs::tracker_config::{
        DEFAULT_PENDING_MESSAGE, DEFAULT_REMOVAL_DELAY,
    };
}

/// 报表目录与日期区间
pub mod report {
    use crate::internal;
    pub use internal::report::structs::*;
    pub use internal::report::structs::date_range::parse_date;
}

/// 报表下载发起方：请求接口、解析文件名、保存文件
pub mod downloader {
    use crate::internal;
    pub use internal::downloader::functions::content_disposition::*;
    pub use internal::downloader::functions::fetch_report::*;
    pub use internal::downloader::structs::*;
    pub use internal::downloader::structs::fetch_error::{
        SERVER_ERROR_MESSAGE, UNDECODABLE_MESSAGE, UNREACHABLE_MESSAGE,
    };
    pub use internal::downloader::traits::report_sink::ReportSink;
}

pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}
